//! Censusplot - an interactive terminal scatter plot of per-state survey data.
//!
//! Censusplot loads a per-state census/health CSV and plots one variable
//! against another. The X axis shows poverty, median age or median household
//! income; the Y axis shows the share lacking healthcare, smokers or obese
//! adults. Clicking an axis label (or pressing its key) switches the field,
//! animating the axes and points to the new scales. Hovering a state shows a
//! tooltip with its values.
//!
//! # Features
//!
//! - Fixed-schema CSV loading with `csv` and `serde`
//! - Linear scales with padded domains and round ticks
//! - Eased transitions between fields
//! - Mouse and keyboard interaction
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use censusplot::chart::ChartState;
//! use censusplot::data::{CensusReader, XField, YField};
//! use censusplot::util::ChartConfig;
//! use std::path::Path;
//! use std::time::Instant;
//!
//! let data = CensusReader::read_file(Path::new("assets/data/data.csv"))?;
//! let mut chart = ChartState::new(data, &ChartConfig::default(), XField::Poverty, YField::Healthcare);
//! chart.select_x(XField::Income, Instant::now());
//! println!("{}", chart.tooltip(0).unwrap().text());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod chart;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod scale;
pub mod ui;
pub mod util;

pub use error::{CensusError, Result};
