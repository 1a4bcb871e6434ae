//! Generic access to persisted records.
//!
//! Every resource exposes the same list/get/delete surface. Instead of
//! repeating those queries per table, each domain type describes how it maps
//! onto its sea-orm entity and the engine implements the queries once (see
//! `ops::records`).

use sea_orm::EntityTrait;

use crate::ResultEngine;

/// A domain type stored in one table with an integer surrogate key.
pub trait Record: Sized {
    type Entity: EntityTrait;

    /// Human readable name used in error messages.
    const LABEL: &'static str;

    /// Deleting an absent id is an error for most records.
    const DELETE_MISSING_IS_ERROR: bool = true;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn from_model(model: <Self::Entity as EntityTrait>::Model) -> ResultEngine<Self>;
}

/// A record that can be listed per owning user.
pub trait OwnedRecord: Record {
    fn owner_column() -> <Self::Entity as EntityTrait>::Column;
}
