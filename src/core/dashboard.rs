//! A dashboard session: one ledger plus the selected reporting period.
use crate::core::analytics::AggregationEngine;
use crate::core::ledger::{LedgerError, LedgerStore, PortfolioSample, Transaction};
use crate::core::period::{ReportingPeriod, ViewState};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    ledger: LedgerStore,
    view: ViewState,
}

impl Dashboard {
    pub fn new(ledger: LedgerStore, view: ViewState) -> Self {
        Self { ledger, view }
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn engine(&self) -> AggregationEngine<'_> {
        AggregationEngine::new(&self.ledger)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn select(&mut self, period: ReportingPeriod) {
        self.view.select(period);
    }

    /// Series for the currently selected period.
    pub fn current_series(&self) -> &[PortfolioSample] {
        self.engine().portfolio_series_for(self.view.selected())
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        debug!("Adding transaction {}", transaction.id);
        self.ledger.push_transaction(transaction)
    }
}
