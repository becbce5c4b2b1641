//! # Pedigree Register Inference Core
//!
//! Status-inference engine for a hereditary-condition pedigree register.
//! Each dog carries two independently tracked condition statuses (SLEM and
//! CECS) and is linked into a family graph of sires, dams and children.
//! The engine infers statuses from relatives with two recursive
//! propagation passes, honoring lab-confirmed results and per-dog override
//! flags, processing each dog at most once per pass, and terminating even
//! on malformed (cyclic) data.
//!
//! ## Module Organization
//!
//! - [`models`] - Dog and family data layer
//! - [`state_machine`] - Condition statuses and channels
//! - [`store`] - Pedigree store contract and Postgres adapter
//! - [`inference`] - The two propagators, visited tracking, batch orchestration
//! - [`database`] - Connection management
//! - [`config`] - Configuration loading
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing initialization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pedigree_core::database::DatabaseConnection;
//! use pedigree_core::inference::{BatchOptions, InferenceBatch};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = DatabaseConnection::connect("postgresql://localhost/pedigree").await?;
//! let batch = InferenceBatch::new(db.pool().clone(), BatchOptions::default());
//! let summary = batch.run().await?;
//! println!("{} carrier, {} clear promotions",
//!     summary.carrier_promotions, summary.clear_promotions);
//! # Ok(())
//! # }
//! ```
//!
//! The whole batch runs inside one transaction: either every inferred
//! status commits, or none do.

pub mod config;
pub mod database;
pub mod error;
pub mod inference;
pub mod logging;
pub mod models;
pub mod state_machine;
pub mod store;

pub use error::{PedigreeError, Result};
