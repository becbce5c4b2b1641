//! # Pedigree Store
//!
//! The one interface boundary the inference core depends on: edge lookups
//! over the family graph plus the single status-write operation. The
//! Postgres adapter scopes every call to one open transaction; tests use an
//! in-memory implementation of the same trait.

pub mod postgres;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Dog, Family};
use crate::state_machine::{ConditionChannel, ConditionStatus};

/// Read/write contract between the propagators and the register's storage.
///
/// Methods take `&mut self` because an implementation is scoped to a single
/// transaction handle, the engine's one shared mutable resource; the batch
/// is sequential and never issues two calls concurrently.
#[async_trait]
pub trait PedigreeStore {
    /// All dogs with no recorded parent family (traversal roots)
    async fn root_dogs(&mut self) -> Result<Vec<Dog>>;

    /// Every family in which the given dog is the sire
    async fn families_as_sire(&mut self, sire_id: i64) -> Result<Vec<Family>>;

    /// Every family in which the given dog is the dam
    async fn families_as_dam(&mut self, dam_id: i64) -> Result<Vec<Family>>;

    /// Persist a status on one channel of one dog
    async fn update_status(
        &mut self,
        dog_id: i64,
        channel: ConditionChannel,
        status: ConditionStatus,
    ) -> Result<()>;
}

pub use postgres::PgPedigreeStore;
