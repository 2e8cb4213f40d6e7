//! Derived dashboard figures computed from a [`LedgerStore`].
use crate::core::ledger::{AssetCategory, LedgerStore, PortfolioSample, TransactionKind};
use crate::core::period::ReportingPeriod;
use rust_decimal::Decimal;
use tracing::debug;

/// A holding's value and its fraction of total assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetShare {
    pub category: AssetCategory,
    pub value: Decimal,
    pub color: Option<String>,
    /// `None` when total assets are zero and the share is undefined.
    pub share: Option<Decimal>,
}

/// Read-only aggregation over a ledger snapshot. Every figure is recomputed on
/// each call.
#[derive(Debug, Clone, Copy)]
pub struct AggregationEngine<'a> {
    ledger: &'a LedgerStore,
}

impl<'a> AggregationEngine<'a> {
    pub fn new(ledger: &'a LedgerStore) -> Self {
        Self { ledger }
    }

    pub fn total_assets(&self) -> Decimal {
        let total = self
            .ledger
            .holdings()
            .iter()
            .fold(Decimal::ZERO, |acc, h| acc.saturating_add(h.value));
        debug!("Total assets: {total}");
        total
    }

    pub fn monthly_income(&self) -> Decimal {
        self.sum_of(TransactionKind::Income)
    }

    /// Expense magnitude; the stored amounts are negative.
    pub fn monthly_expenses(&self) -> Decimal {
        self.sum_of(TransactionKind::Expense).abs()
    }

    pub fn net_income(&self) -> Decimal {
        let net = self.monthly_income() - self.monthly_expenses();
        debug!("Net income: {net}");
        net
    }

    pub fn is_surplus(&self) -> bool {
        self.net_income() > Decimal::ZERO
    }

    /// Share of each holding in insertion order.
    pub fn asset_distribution(&self) -> Vec<AssetShare> {
        let total = self.total_assets();
        self.ledger
            .holdings()
            .iter()
            .map(|h| AssetShare {
                category: h.category,
                value: h.value,
                color: h.color.clone(),
                share: if total > Decimal::ZERO {
                    Some(h.value / total)
                } else {
                    None
                },
            })
            .collect()
    }

    /// The stored series is returned as-is for every period; no windowing is
    /// applied.
    pub fn portfolio_series_for(&self, period: ReportingPeriod) -> &'a [PortfolioSample] {
        debug!("Portfolio series requested for period {period}");
        self.ledger.portfolio_series()
    }

    /// Percentage change from the first to the last sample of the series.
    /// `None` when it is undefined or not representable.
    pub fn portfolio_change(&self, period: ReportingPeriod) -> Option<Decimal> {
        let series = self.portfolio_series_for(period);
        let (first, last) = match series {
            [first, .., last] => (first.value, last.value),
            _ => return None,
        };
        if first.is_zero() {
            return None;
        }
        last.checked_sub(first)?
            .checked_div(first)?
            .checked_mul(Decimal::ONE_HUNDRED)
    }

    fn sum_of(&self, kind: TransactionKind) -> Decimal {
        let total = self
            .ledger
            .transactions()
            .iter()
            .filter(|t| t.kind == kind)
            .fold(Decimal::ZERO, |acc, t| acc.saturating_add(t.amount));
        debug!("Sum of {kind} transactions: {total}");
        total
    }
}
