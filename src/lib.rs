//! InfraScope: proximity-weighted hazard risk scoring and situation
//! summaries over river, road and landslide observations.
//!
//! The core is `risk::compute_risk` and `summary::generate_summary`, both
//! pure functions of one observation snapshot. `ingest` produces
//! snapshots from the live JMA feeds or the synthetic generator.

pub mod classify;
pub mod config;
pub mod error;
pub mod geo;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod risk;
pub mod stations;
pub mod summary;
pub mod verify;

pub use model::{RiskQuery, RiskResult, Snapshot, SummaryResult};
pub use risk::compute_risk;
pub use summary::generate_summary;
