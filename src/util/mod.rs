//! Utility modules.
//!
//! Number formatting shared by tooltips and axes, and chart layout
//! configuration.

pub mod formatters;
pub mod layout_config;

pub use layout_config::{ChartConfig, ChartMargins, ScaleConfig};
