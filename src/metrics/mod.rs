//! Flurry reporting operations.
//!
//! This module sits on top of [`crate::clients`] and turns raw responses into
//! answers:
//!
//! - [`FlurryClient`]: one operation per endpoint plus composite helpers
//! - [`Metric`] / [`MetricQuery`]: the endpoint table and call parameters
//! - [`Node`] / [`flatten`]: normalized response trees
//! - [`find_parameter_in_event`]: locating a parameter descriptor in an
//!   `Event` response
//!
//! # Example
//!
//! ```rust,ignore
//! use flurry_api::metrics::FlurryClient;
//! use flurry_api::ReportDate;
//!
//! let client = FlurryClient::new("ACCESS-CODE", "API-KEY")?;
//! let date = ReportDate::new("2013-05-14")?;
//!
//! for (metric, value) in client.all_daily_metrics(&date, Some("US"), None).await? {
//!     println!("{metric}: {value}");
//! }
//! ```

mod catalog;
mod client;
mod errors;
mod node;
mod search;

pub use catalog::{Metric, MetricQuery, MetricSpec};
pub use client::{FlurryClient, ParameterCounts};
pub use errors::{MetricsError, ShapeError};
pub use node::{flatten, Node, NodeMap, OneOrMany, Scalar};
pub use search::{
    daily_value, event_name, find_parameter_in_event, parameter_total_count, summary_events,
    EVENT_NAME_ATTR, NAME_ATTR, TOTAL_COUNT_ATTR, VALUE_ATTR,
};
