//! profile-chart: presentation and path-building engine for profile charts.
//!
//! Turns raw elevation/speed style series into per-line path geometry,
//! preview paths and vertical bounds, and keeps all of it consistent while
//! lines are shown or hidden. Drawing, gestures and number formatting stay
//! with the embedding application.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{PresentationConfig, PresentationData, ValueFormatter, VisibilityListener};
pub use error::{ChartError, ChartResult};
