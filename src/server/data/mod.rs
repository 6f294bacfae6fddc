//! Data access layer repositories.
//!
//! One repository per table. Each method issues a single statement against the connection it
//! was constructed with, so a repository works the same over a pooled connection or a
//! transaction. Repositories return raw [`sea_orm::DbErr`]s; mapping them to domain errors is
//! left to the service layer.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod tests;

use sea_orm::{ActiveValue, Value};

/// Overwrites an active model field only when the caller supplied a value.
pub(crate) fn set_if_present<V>(field: &mut ActiveValue<V>, value: Option<V>)
where
    V: Into<Value>,
{
    if let Some(value) = value {
        *field = ActiveValue::Set(value);
    }
}
