//! Declarative test builder.
//!
//! Tables and fixtures are queued by the builder methods and created in order during the final
//! `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Queues tables and fixtures for a [`TestContext`].
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Fixtures to insert, by name
    planets: Vec<String>,
    users: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            planets: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every table of the schema: planets, characters, vehicles, users and favorites.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add the table of a single entity, created after the catalog tables if both are requested.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Character)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock planet with the provided name during `build()`.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a mock user with the provided username during `build()`.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Build the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with all tables and fixtures created
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        // Tables first so fixtures have somewhere to go
        let mut tables = Vec::new();
        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            tables.push(schema.create_table_from_entity(entity::prelude::Planet));
            tables.push(schema.create_table_from_entity(entity::prelude::Character));
            tables.push(schema.create_table_from_entity(entity::prelude::Vehicle));
            tables.push(schema.create_table_from_entity(entity::prelude::User));
            tables.push(schema.create_table_from_entity(entity::prelude::Favorite));
        }
        tables.extend(self.tables);

        test.with_tables(tables).await?;

        for name in self.planets {
            test.catalog().insert_mock_planet(&name).await?;
        }

        for username in self.users {
            test.user().insert_mock_user(&username).await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
