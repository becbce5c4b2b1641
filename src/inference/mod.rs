//! # Status-Inference Engine
//!
//! Two graph-propagation passes over the pedigree plus the batch
//! orchestration that runs them atomically:
//!
//! - [`CarrierByProgenyPass`] — bottom-up, a parent's status from its
//!   children's outcomes
//! - [`ClearByParentagePass`] — top-down, children's statuses from both
//!   parents being clear
//! - [`VisitedTracker`] — per-pass reprocessing and cycle guard
//! - [`InferenceBatch`] — single-transaction batch entry point
//!
//! Lab-confirmed statuses and per-channel override flags always win over
//! inference; anomalies in the data (unknown sex, missing families,
//! cycles) are skipped, never errors.

pub mod carrier_by_progeny;
pub mod clear_by_parentage;
pub mod orchestrator;
pub mod visited;

pub use carrier_by_progeny::CarrierByProgenyPass;
pub use clear_by_parentage::ClearByParentagePass;
pub use orchestrator::{run_passes, BatchOptions, BatchSummary, InferenceBatch, PassOrder};
pub use visited::VisitedTracker;
