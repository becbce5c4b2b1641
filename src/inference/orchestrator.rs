//! # Batch Orchestrator
//!
//! Drives one full inference run: fetch the traversal roots, run both
//! propagation passes over every root inside a single transaction, then
//! commit. Any store failure rolls the whole batch back; no partial status
//! updates are ever retained.
//!
//! The order the two passes run in changes which fixed point the
//! population reaches, and the register's historical entry points did not
//! agree on it. It is exposed as configuration rather than guessed; see
//! DESIGN.md.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::error::Result;
use crate::inference::carrier_by_progeny::CarrierByProgenyPass;
use crate::inference::clear_by_parentage::ClearByParentagePass;
use crate::inference::visited::VisitedTracker;
use crate::state_machine::ConditionChannel;
use crate::store::{PedigreeStore, PgPedigreeStore};

/// Which propagation pass runs first within a batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassOrder {
    ClearThenCarrier,
    CarrierThenClear,
}

impl Default for PassOrder {
    fn default() -> Self {
        Self::ClearThenCarrier
    }
}

/// Per-batch options
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub channel: ConditionChannel,
    pub pass_order: PassOrder,
}

/// Outcome of one committed inference batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub channel: ConditionChannel,
    pub pass_order: PassOrder,
    pub roots: usize,
    pub carrier_promotions: u64,
    pub clear_promotions: u64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

/// Run both passes over every root against an already-scoped store.
///
/// Each pass gets a fresh visited tracker shared across all roots, so a
/// dog reachable from two roots is still processed once per pass.
pub async fn run_passes<S: PedigreeStore>(
    store: &mut S,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    let started_at = Utc::now();
    let roots = store.root_dogs().await?;
    info!(roots = roots.len(), channel = %options.channel, "starting inference passes");

    let carrier = CarrierByProgenyPass::new(options.channel);
    let clear = ClearByParentagePass::new(options.channel);

    let mut carrier_promotions = 0u64;
    let mut clear_promotions = 0u64;

    match options.pass_order {
        PassOrder::ClearThenCarrier => {
            let mut visited = VisitedTracker::new();
            for root in roots.iter().cloned() {
                clear_promotions += clear.run(store, &mut visited, root).await?;
            }
            let mut visited = VisitedTracker::new();
            for root in roots.iter().cloned() {
                carrier_promotions += carrier.run(store, &mut visited, root).await?;
            }
        }
        PassOrder::CarrierThenClear => {
            let mut visited = VisitedTracker::new();
            for root in roots.iter().cloned() {
                carrier_promotions += carrier.run(store, &mut visited, root).await?;
            }
            let mut visited = VisitedTracker::new();
            for root in roots.iter().cloned() {
                clear_promotions += clear.run(store, &mut visited, root).await?;
            }
        }
    }

    Ok(BatchSummary {
        channel: options.channel,
        pass_order: options.pass_order,
        roots: roots.len(),
        carrier_promotions,
        clear_promotions,
        started_at,
        finished_at: Utc::now(),
    })
}

/// One full inference run against the register database.
pub struct InferenceBatch {
    pool: PgPool,
    options: BatchOptions,
}

impl InferenceBatch {
    pub fn new(pool: PgPool, options: BatchOptions) -> Self {
        Self { pool, options }
    }

    /// Open a transaction, run both passes, commit.
    ///
    /// On any error the store (and its transaction) is dropped before
    /// commit, which rolls back every status written so far.
    pub async fn run(&self) -> Result<BatchSummary> {
        let mut store = PgPedigreeStore::begin(&self.pool).await?;
        let summary = run_passes(&mut store, &self.options).await?;
        store.commit().await?;

        info!(
            roots = summary.roots,
            carrier_promotions = summary.carrier_promotions,
            clear_promotions = summary.clear_promotions,
            channel = %summary.channel,
            "inference batch committed"
        );
        Ok(summary)
    }
}
