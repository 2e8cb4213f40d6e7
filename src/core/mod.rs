//! Ledger, aggregation and view state

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod ledger;
pub mod log;
pub mod period;

// Re-export main types for cleaner imports
pub use analytics::{AggregationEngine, AssetShare};
pub use dashboard::Dashboard;
pub use ledger::{
    AssetCategory, AssetHolding, LedgerError, LedgerStore, PortfolioSample, Transaction,
    TransactionKind,
};
pub use period::{ReportingPeriod, ViewState};
