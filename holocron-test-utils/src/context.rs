//! The database handle tests run against.
//!
//! This module provides the `TestContext` returned by `TestBuilder`, wrapping an isolated
//! in-memory SQLite database. Foreign keys are enforced by the SQLite driver, so cascade
//! rules declared on the entities behave as they do in production.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// An isolated database, created empty or by [`TestBuilder`](crate::TestBuilder)
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// let planet = test.catalog().insert_mock_planet("Tatooine").await?;
/// let user = test.user().insert_mock_user("luke").await?;
///
/// let repo = PlanetRepository::new(&test.db);
/// ```
pub struct TestContext {
    /// In-memory SQLite connection, dropped with the context
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Builds the application state around this context's database
    ///
    /// Generic over the target so this crate doesn't depend on holocron itself.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context with an empty in-memory database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Runs each CREATE TABLE statement in order.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Empty database
    () => {{
        $crate::TestContext::new().await
    }};

    // One table per entity, in the order given
    ($($entity:expr),+ $(,)?) => {{
        async {
            let test = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            test.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(test)
        }.await
    }};
}

/// Creates a context with every catalog table, users and favorites included.
#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    () => {{
        $crate::test_setup_with_tables!(
            entity::prelude::Planet,
            entity::prelude::Character,
            entity::prelude::Vehicle,
            entity::prelude::User,
            entity::prelude::Favorite
        )
    }};
}
