//! ilars-charting
//!
//! Time-series normalization for the doctor and patient dashboards. Takes the
//! heterogeneous date-keyed series the backend returns (LARS scores, daily
//! logs, step counts) and aligns them onto a shared calendar-date axis for
//! dual-axis charting. A day missing from a series is a gap (`None`), never a
//! zero — zero is a real measurement.

pub mod error;
pub mod extract;
pub mod groups;
pub mod normalize;
pub mod response;
