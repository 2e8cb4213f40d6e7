//! Reporting period selection

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportingPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl ReportingPeriod {
    pub const ALL: [ReportingPeriod; 3] = [
        ReportingPeriod::Week,
        ReportingPeriod::Month,
        ReportingPeriod::Year,
    ];
}

impl Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ReportingPeriod::Week => "week",
                ReportingPeriod::Month => "month",
                ReportingPeriod::Year => "year",
            }
        )
    }
}

impl FromStr for ReportingPeriod {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "week" => Ok(ReportingPeriod::Week),
            "month" => Ok(ReportingPeriod::Month),
            "year" => Ok(ReportingPeriod::Year),
            _ => Err(anyhow::anyhow!("Invalid reporting period: {}", s)),
        }
    }
}

/// The currently selected reporting period. Starts at `month`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    selected: ReportingPeriod,
}

impl ViewState {
    pub fn new(selected: ReportingPeriod) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> ReportingPeriod {
        self.selected
    }

    pub fn select(&mut self, period: ReportingPeriod) {
        if self.selected != period {
            debug!("Reporting period changed: {} -> {}", self.selected, period);
            self.selected = period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_period_is_month() {
        assert_eq!(ViewState::default().selected(), ReportingPeriod::Month);
    }

    #[test]
    fn test_select_then_get_for_every_period() {
        let mut view = ViewState::default();
        for period in ReportingPeriod::ALL {
            view.select(period);
            assert_eq!(view.selected(), period);
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut view = ViewState::default();
        view.select(ReportingPeriod::Year);
        let snapshot = view.clone();
        view.select(ReportingPeriod::Year);
        assert_eq!(view, snapshot);
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("WEEK".parse::<ReportingPeriod>().unwrap(), ReportingPeriod::Week);
        assert_eq!(" year".parse::<ReportingPeriod>().unwrap(), ReportingPeriod::Year);
        assert!("quarter".parse::<ReportingPeriod>().is_err());
        assert_eq!(ReportingPeriod::Month.to_string(), "month");
    }
}
