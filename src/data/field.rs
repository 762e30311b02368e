//! Fields that can drive the chart axes.

use std::fmt;
use std::str::FromStr;

use super::StateRecord;
use crate::util::formatters::{format_grouped, format_plain};

/// A numeric field that can be bound to one axis of the chart.
pub trait AxisField: Copy + Eq + fmt::Debug + 'static {
    /// All fields for this axis, in on-screen label order.
    const ALL: &'static [Self];

    /// Column name in the data file.
    fn key(self) -> &'static str;

    /// Read this field from a record.
    fn value(self, record: &StateRecord) -> f64;

    /// Clickable axis label text.
    fn axis_label(self) -> &'static str;

    /// Label used inside the tooltip.
    fn tooltip_label(self) -> &'static str;

    /// Style a value of this field for the tooltip.
    fn format_value(self, value: f64) -> String;

    /// Position of this field in [`AxisField::ALL`].
    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// The field after this one, wrapping around.
    fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Field at a label position, if any.
    fn from_position(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Variables available on the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum XField {
    /// Poverty rate.
    #[default]
    Poverty,
    /// Median age.
    Age,
    /// Median household income.
    Income,
}

/// Variables available on the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum YField {
    /// Share lacking healthcare.
    #[default]
    Healthcare,
    /// Smoker rate.
    Smokes,
    /// Obesity rate.
    Obesity,
}

impl AxisField for XField {
    const ALL: &'static [Self] = &[XField::Poverty, XField::Age, XField::Income];

    fn key(self) -> &'static str {
        match self {
            XField::Poverty => "poverty",
            XField::Age => "age",
            XField::Income => "income",
        }
    }

    fn value(self, record: &StateRecord) -> f64 {
        match self {
            XField::Poverty => record.poverty,
            XField::Age => record.age,
            XField::Income => record.income,
        }
    }

    fn axis_label(self) -> &'static str {
        match self {
            XField::Poverty => "Poverty Rate (%)",
            XField::Age => "Median Age (years)",
            XField::Income => "Median Household Income ($)",
        }
    }

    fn tooltip_label(self) -> &'static str {
        match self {
            XField::Poverty => "Poverty Rate",
            XField::Age => "Median Age",
            XField::Income => "Median Household Income",
        }
    }

    fn format_value(self, value: f64) -> String {
        match self {
            XField::Poverty => format!("{}%", format_plain(value)),
            XField::Income => format!("${}", format_grouped(value)),
            XField::Age => format_plain(value),
        }
    }
}

impl AxisField for YField {
    const ALL: &'static [Self] = &[YField::Healthcare, YField::Smokes, YField::Obesity];

    fn key(self) -> &'static str {
        match self {
            YField::Healthcare => "healthcare",
            YField::Smokes => "smokes",
            YField::Obesity => "obesity",
        }
    }

    fn value(self, record: &StateRecord) -> f64 {
        match self {
            YField::Healthcare => record.healthcare,
            YField::Smokes => record.smokes,
            YField::Obesity => record.obesity,
        }
    }

    fn axis_label(self) -> &'static str {
        match self {
            YField::Healthcare => "Lacking Healthcare (%)",
            YField::Smokes => "Smoker Rate (%)",
            YField::Obesity => "Obesity Rate (%)",
        }
    }

    fn tooltip_label(self) -> &'static str {
        match self {
            YField::Healthcare => "Lacking Healthcare",
            YField::Smokes => "Smoker Rate",
            YField::Obesity => "Obesity Rate",
        }
    }

    fn format_value(self, value: f64) -> String {
        format!("{}%", format_plain(value))
    }
}

/// Error returned when a field name does not match any column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

fn parse_field<F: AxisField>(s: &str) -> Result<F, UnknownField> {
    F::ALL
        .iter()
        .copied()
        .find(|f| f.key().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| UnknownField(s.to_string()))
}

impl FromStr for XField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(s)
    }
}

impl FromStr for YField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_field(s)
    }
}

impl fmt::Display for XField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for YField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alabama() -> StateRecord {
        StateRecord::new("Alabama", "AL", 19.3, 38.6, 42830.0, 13.9, 21.1, 33.5)
    }

    #[test]
    fn x_values_are_styled_per_field() {
        assert_eq!(XField::Poverty.format_value(19.3), "19.3%");
        assert_eq!(XField::Income.format_value(42830.0), "$42,830");
        assert_eq!(XField::Age.format_value(38.6), "38.6");
    }

    #[test]
    fn y_values_are_percentages() {
        for field in YField::ALL {
            assert_eq!(field.format_value(21.1), "21.1%");
        }
    }

    #[test]
    fn fields_read_their_column() {
        let record = alabama();
        assert_eq!(XField::Income.value(&record), 42830.0);
        assert_eq!(YField::Smokes.value(&record), 21.1);
        assert_eq!(YField::Obesity.value(&record), 33.5);
    }

    #[test]
    fn next_wraps_in_label_order() {
        assert_eq!(XField::Poverty.next(), XField::Age);
        assert_eq!(XField::Income.next(), XField::Poverty);
        assert_eq!(YField::Obesity.next(), YField::Healthcare);
    }

    #[test]
    fn parses_column_names() {
        assert_eq!("income".parse::<XField>(), Ok(XField::Income));
        assert_eq!(" Smokes ".parse::<YField>(), Ok(YField::Smokes));
        assert!("healthcare".parse::<XField>().is_err());
    }

    #[test]
    fn defaults_match_initial_axes() {
        assert_eq!(XField::default(), XField::Poverty);
        assert_eq!(YField::default(), YField::Healthcare);
    }
}
