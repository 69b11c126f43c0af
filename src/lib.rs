//! riskaxis-rs: value-axis rendering with risk-level banding.
//!
//! This crate builds backend-agnostic draw scenes for a chart's Y axis:
//! tick labels, the axis line, grid lines, a zero line, limit lines and a
//! colored risk-band overlay. Hosts supply the coordinate transform and a
//! `Renderer` backend; everything in between is deterministic scene math.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{YAxisConfig, YAxisRenderer};
pub use error::{AxisError, AxisResult};
