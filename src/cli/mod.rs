//! Terminal views over a dashboard session

pub mod alloc;
pub mod portfolio;
pub mod setup;
pub mod summary;
pub mod transactions;
pub mod ui;
