//! Request types for the Flurry reporting API.
//!
//! This module provides the [`MetricRequest`] type and its builder for
//! constructing requests against one `<apiFamily>/<metricName>` endpoint.

use std::fmt;

use serde::Serialize;

use crate::config::{ApiAccessCode, ApiKey, ReportDate};

/// The endpoint families of the reporting API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ApiFamily {
    /// Engagement metrics (`appMetrics`).
    AppMetrics,
    /// Application metadata (`appInfo`).
    AppInfo,
    /// Event metrics (`eventMetrics`).
    EventMetrics,
}

impl ApiFamily {
    /// Returns the path segment of this family.
    #[must_use]
    pub const fn as_path(&self) -> &'static str {
        match self {
            Self::AppMetrics => "appMetrics",
            Self::AppInfo => "appInfo",
            Self::EventMetrics => "eventMetrics",
        }
    }
}

impl fmt::Display for ApiFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Time bucketing of engagement metrics.
///
/// All metrics group by day unless told otherwise, except
/// `ActiveUsersByWeek` and `ActiveUsersByMonth` which have a fixed grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum GroupBy {
    /// One data point per day.
    #[serde(rename = "DAYS")]
    Day,
    /// One data point per week.
    #[serde(rename = "WEEKS")]
    Week,
    /// One data point per month.
    #[serde(rename = "MONTHS")]
    Month,
}

impl GroupBy {
    /// Returns the wire value of this grouping.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "DAYS",
            Self::Week => "WEEKS",
            Self::Month => "MONTHS",
        }
    }
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request for one metric endpoint.
///
/// Use [`MetricRequest::builder`] to construct requests. Building applies the
/// date defaulting rule: a missing `end_date` is set to `start_date`.
///
/// # Example
///
/// ```rust
/// use flurry_api::clients::{ApiFamily, MetricRequest};
/// use flurry_api::ReportDate;
///
/// let request = MetricRequest::builder(ApiFamily::AppMetrics, "ActiveUsers")
///     .start_date(ReportDate::new("2013-05-14").unwrap())
///     .country("US")
///     .build();
///
/// assert_eq!(request.path(), "appMetrics/ActiveUsers");
/// assert_eq!(request.end_date, Some(ReportDate::new("2013-05-14").unwrap()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetricRequest {
    /// The endpoint family.
    pub api_family: ApiFamily,
    /// The metric name within the family.
    pub metric_name: &'static str,
    /// First day of the reporting window.
    pub start_date: Option<ReportDate>,
    /// Last day of the reporting window.
    pub end_date: Option<ReportDate>,
    /// Event to report on (event metrics only).
    pub event_name: Option<String>,
    /// Country filter; `ALL` breaks results down by country.
    pub country: Option<String>,
    /// Application version filter.
    pub version_name: Option<String>,
    /// Time bucketing.
    pub group_by: Option<GroupBy>,
}

impl MetricRequest {
    /// Creates a new builder for the given endpoint.
    #[must_use]
    pub const fn builder(api_family: ApiFamily, metric_name: &'static str) -> MetricRequestBuilder {
        MetricRequestBuilder::new(api_family, metric_name)
    }

    /// Returns the endpoint path relative to the API host.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}", self.api_family, self.metric_name)
    }

    /// Assembles the query parameters for this request.
    ///
    /// Absent optional fields are left out of the query string entirely.
    #[must_use]
    pub fn query<'a>(&'a self, access_code: &'a ApiAccessCode, api_key: &'a ApiKey) -> QueryParams<'a> {
        QueryParams {
            api_access_code: access_code.as_ref(),
            api_key: api_key.as_ref(),
            start_date: self.start_date.as_ref().map(AsRef::as_ref),
            end_date: self.end_date.as_ref().map(AsRef::as_ref),
            event_name: self.event_name.as_deref(),
            country: self.country.as_deref(),
            version_name: self.version_name.as_deref(),
            group_by: self.group_by,
        }
    }
}

/// The query string of a request, serialized form-encoded by the transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams<'a> {
    /// Account access code.
    pub api_access_code: &'a str,
    /// Application API key.
    pub api_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupBy>,
}

/// Builder for constructing [`MetricRequest`] instances.
#[derive(Debug)]
pub struct MetricRequestBuilder {
    api_family: ApiFamily,
    metric_name: &'static str,
    start_date: Option<ReportDate>,
    end_date: Option<ReportDate>,
    event_name: Option<String>,
    country: Option<String>,
    version_name: Option<String>,
    group_by: Option<GroupBy>,
}

impl MetricRequestBuilder {
    const fn new(api_family: ApiFamily, metric_name: &'static str) -> Self {
        Self {
            api_family,
            metric_name,
            start_date: None,
            end_date: None,
            event_name: None,
            country: None,
            version_name: None,
            group_by: None,
        }
    }

    /// Sets the first day of the reporting window.
    #[must_use]
    pub fn start_date(mut self, date: impl Into<ReportDate>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    /// Sets the last day of the reporting window.
    #[must_use]
    pub fn end_date(mut self, date: impl Into<ReportDate>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    /// Sets the last day of the reporting window, if any.
    #[must_use]
    pub fn maybe_end_date(mut self, date: Option<ReportDate>) -> Self {
        self.end_date = date;
        self
    }

    /// Sets the event name.
    #[must_use]
    pub fn event_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = Some(name.into());
        self
    }

    /// Sets the country filter.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the country filter, if any.
    #[must_use]
    pub fn maybe_country(mut self, country: Option<String>) -> Self {
        self.country = country;
        self
    }

    /// Sets the application version filter.
    #[must_use]
    pub fn version_name(mut self, version: impl Into<String>) -> Self {
        self.version_name = Some(version.into());
        self
    }

    /// Sets the application version filter, if any.
    #[must_use]
    pub fn maybe_version_name(mut self, version: Option<String>) -> Self {
        self.version_name = version;
        self
    }

    /// Sets the time bucketing.
    #[must_use]
    pub const fn group_by(mut self, group_by: Option<GroupBy>) -> Self {
        self.group_by = group_by;
        self
    }

    /// Builds the [`MetricRequest`].
    ///
    /// A missing `end_date` defaults to `start_date`.
    #[must_use]
    pub fn build(self) -> MetricRequest {
        let end_date = self.end_date.or_else(|| self.start_date.clone());
        MetricRequest {
            api_family: self.api_family,
            metric_name: self.metric_name,
            start_date: self.start_date,
            end_date,
            event_name: self.event_name,
            country: self.country,
            version_name: self.version_name,
            group_by: self.group_by,
        }
    }
}
