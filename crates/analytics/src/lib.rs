//! Analytics reporting: overview, period comparison, top campaigns,
//! per-campaign breakdowns, insights, and CSV export.
//!
//! Demo mode: metrics are synthesized once at startup from a seeded
//! daily trend, so repeated reads stay consistent within a process.

pub mod models;
pub mod service;

pub use models::*;
pub use service::AnalyticsService;
