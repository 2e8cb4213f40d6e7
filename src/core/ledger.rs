//! In-memory ledger: transactions, asset holdings and the portfolio value series.
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "income"),
            TransactionKind::Expense => write!(f, "expense"),
        }
    }
}

/// A dated cash flow. The sign of `amount` carries the direction: income is
/// strictly positive, expenses strictly negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u64,
    pub kind: TransactionKind,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCategory {
    CashSavings,
    Equities,
    Crypto,
    Collectibles,
    Bonds,
    RealEstate,
}

impl AssetCategory {
    /// Human readable label used by the terminal views.
    pub fn label(&self) -> &'static str {
        match self {
            AssetCategory::CashSavings => "Cash & Savings",
            AssetCategory::Equities => "Equities",
            AssetCategory::Crypto => "Crypto",
            AssetCategory::Collectibles => "Collectibles",
            AssetCategory::Bonds => "Bonds",
            AssetCategory::RealEstate => "Real Estate",
        }
    }
}

impl Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            AssetCategory::CashSavings => "cash-savings",
            AssetCategory::Equities => "equities",
            AssetCategory::Crypto => "crypto",
            AssetCategory::Collectibles => "collectibles",
            AssetCategory::Bonds => "bonds",
            AssetCategory::RealEstate => "real-estate",
        };
        write!(f, "{key}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetHolding {
    pub category: AssetCategory,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
    /// Opaque display hint, e.g. `#3b82f6`. Only the presentation layer reads it.
    #[serde(default)]
    pub color: Option<String>,
}

/// One point of the historical portfolio value series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioSample {
    pub label: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("income transaction {id} must have a positive amount, got {amount}")]
    IncomeNotPositive { id: u64, amount: Decimal },
    #[error("expense transaction {id} must have a negative amount, got {amount}")]
    ExpenseNotNegative { id: u64, amount: Decimal },
    #[error("duplicate transaction id {0}")]
    DuplicateTransactionId(u64),
    #[error("duplicate holding for category {0}")]
    DuplicateCategory(AssetCategory),
    #[error("holding {category} has negative value {value}")]
    NegativeHolding {
        category: AssetCategory,
        value: Decimal,
    },
    #[error("portfolio sample '{label}' has negative value {value}")]
    NegativeSample { label: String, value: Decimal },
    #[error("total of all holdings exceeds the representable range")]
    HoldingsTotalOverflow,
    #[error("total of {0} transactions exceeds the representable range")]
    TransactionTotalOverflow(TransactionKind),
}

/// Holds the session's ledger. Records are validated on the way in and never
/// modified afterwards; transactions can only be appended.
#[derive(Debug, Clone, Default)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    holdings: Vec<AssetHolding>,
    portfolio_series: Vec<PortfolioSample>,
    transaction_ids: HashSet<u64>,
    income_total: Decimal,
    expense_total: Decimal,
}

impl LedgerStore {
    pub fn new(
        transactions: Vec<Transaction>,
        holdings: Vec<AssetHolding>,
        portfolio_series: Vec<PortfolioSample>,
    ) -> Result<Self, LedgerError> {
        let mut seen_categories = HashSet::new();
        for holding in &holdings {
            if holding.value < Decimal::ZERO {
                return Err(LedgerError::NegativeHolding {
                    category: holding.category,
                    value: holding.value,
                });
            }
            if !seen_categories.insert(holding.category) {
                return Err(LedgerError::DuplicateCategory(holding.category));
            }
        }

        checked_total(holdings.iter().map(|h| h.value))
            .ok_or(LedgerError::HoldingsTotalOverflow)?;

        if let Some(sample) = portfolio_series.iter().find(|s| s.value < Decimal::ZERO) {
            return Err(LedgerError::NegativeSample {
                label: sample.label.clone(),
                value: sample.value,
            });
        }

        let mut store = Self {
            transactions: Vec::with_capacity(transactions.len()),
            holdings,
            portfolio_series,
            transaction_ids: HashSet::with_capacity(transactions.len()),
            income_total: Decimal::ZERO,
            expense_total: Decimal::ZERO,
        };
        for transaction in transactions {
            store.push_transaction(transaction)?;
        }

        debug!(
            transactions = store.transactions.len(),
            holdings = store.holdings.len(),
            samples = store.portfolio_series.len(),
            "Ledger loaded"
        );
        Ok(store)
    }

    /// Appends a transaction after checking its sign, its id and that the
    /// running total for its kind stays representable.
    pub fn push_transaction(&mut self, transaction: Transaction) -> Result<(), LedgerError> {
        validate_transaction(&transaction)?;
        let running_total = match transaction.kind {
            TransactionKind::Income => &mut self.income_total,
            TransactionKind::Expense => &mut self.expense_total,
        };
        let new_total = running_total
            .checked_add(transaction.amount)
            .ok_or(LedgerError::TransactionTotalOverflow(transaction.kind))?;
        if !self.transaction_ids.insert(transaction.id) {
            return Err(LedgerError::DuplicateTransactionId(transaction.id));
        }
        *running_total = new_total;
        self.transactions.push(transaction);
        Ok(())
    }

    /// All transactions in insertion order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All holdings in insertion order; each category appears at most once.
    pub fn holdings(&self) -> &[AssetHolding] {
        &self.holdings
    }

    pub fn holding(&self, category: AssetCategory) -> Option<Decimal> {
        self.holdings
            .iter()
            .find(|h| h.category == category)
            .map(|h| h.value)
    }

    /// The portfolio value series, oldest sample first.
    pub fn portfolio_series(&self) -> &[PortfolioSample] {
        &self.portfolio_series
    }
}

fn checked_total(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, v| acc.checked_add(v))
}

fn validate_transaction(transaction: &Transaction) -> Result<(), LedgerError> {
    match transaction.kind {
        TransactionKind::Income if transaction.amount <= Decimal::ZERO => {
            Err(LedgerError::IncomeNotPositive {
                id: transaction.id,
                amount: transaction.amount,
            })
        }
        TransactionKind::Expense if transaction.amount >= Decimal::ZERO => {
            Err(LedgerError::ExpenseNotNegative {
                id: transaction.id,
                amount: transaction.amount,
            })
        }
        _ => Ok(()),
    }
}
