//! Per-state survey record.

use serde::Deserialize;

/// One row of the census/health survey file.
///
/// Columns are matched by header name, so column order in the file does not
/// matter and extra columns (margins of error, confidence bounds) are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StateRecord {
    /// Row id, when the file carries one.
    #[serde(default)]
    pub id: Option<u32>,
    /// Full state name.
    pub state: String,
    /// Postal abbreviation, drawn inside each circle.
    pub abbr: String,
    /// Share of the population in poverty (%).
    pub poverty: f64,
    /// Median age (years).
    pub age: f64,
    /// Median household income ($).
    pub income: f64,
    /// Share lacking healthcare (%).
    pub healthcare: f64,
    /// Share of smokers (%).
    pub smokes: f64,
    /// Share of obese adults (%).
    pub obesity: f64,
}

impl StateRecord {
    /// Create a record from its identifying fields and the six measures.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        state: impl Into<String>,
        abbr: impl Into<String>,
        poverty: f64,
        age: f64,
        income: f64,
        healthcare: f64,
        smokes: f64,
        obesity: f64,
    ) -> Self {
        Self {
            id: None,
            state: state.into(),
            abbr: abbr.into(),
            poverty,
            age,
            income,
            healthcare,
            smokes,
            obesity,
        }
    }
}
