//! Data reading and representation.
//!
//! This module handles reading the survey CSV and holding its records for
//! the whole session.

mod field;
mod reader;
mod record;

pub use field::{AxisField, UnknownField, XField, YField};
pub use reader::CensusReader;
pub use record::StateRecord;

/// Records loaded for the session. Read-only after load.
#[derive(Debug, Clone)]
pub struct CensusData {
    records: Vec<StateRecord>,
}

impl CensusData {
    /// Wrap already parsed records.
    pub fn from_records(records: Vec<StateRecord>) -> Self {
        Self { records }
    }

    /// All records, in file order.
    pub fn records(&self) -> &[StateRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&StateRecord> {
        self.records.get(index)
    }

    /// Minimum and maximum of a field, ignoring non-finite values.
    ///
    /// Returns `None` when no finite value exists.
    pub fn extent<F: AxisField>(&self, field: F) -> Option<(f64, f64)> {
        self.records
            .iter()
            .map(|r| field.value(r))
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_nan() {
        let data = CensusData::from_records(vec![
            StateRecord::new("A", "AA", 10.0, 30.0, 40000.0, 5.0, 15.0, 25.0),
            StateRecord::new("B", "BB", f64::NAN, 40.0, 70000.0, 9.0, 20.0, 35.0),
            StateRecord::new("C", "CC", 20.0, 35.0, 50000.0, 7.0, 10.0, 30.0),
        ]);
        assert_eq!(data.extent(XField::Poverty), Some((10.0, 20.0)));
        assert_eq!(data.extent(XField::Income), Some((40000.0, 70000.0)));
        assert_eq!(data.extent(YField::Smokes), Some((10.0, 20.0)));
    }

    #[test]
    fn extent_of_empty_data_is_none() {
        let data = CensusData::from_records(Vec::new());
        assert!(data.is_empty());
        assert_eq!(data.extent(YField::Obesity), None);
    }
}
