//! The metric table.
//!
//! Every endpoint of the reporting API is one [`Metric`]. Its [`MetricSpec`]
//! says which family it belongs to and which query parameters it accepts;
//! requests for all metrics are built from this table by one function.

use std::fmt;

use crate::clients::{ApiFamily, GroupBy, MetricRequest};
use crate::config::ReportDate;
use crate::metrics::errors::MetricsError;

/// Which query parameters an endpoint accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricSpec {
    /// Endpoint family.
    pub family: ApiFamily,
    /// Endpoint name within the family.
    pub name: &'static str,
    /// Requires `startDate`; accepts `endDate` and `versionName`.
    pub dated: bool,
    /// Accepts `country`.
    pub country: bool,
    /// Requires `eventName`.
    pub event_name: bool,
    /// Accepts `groupBy`.
    pub group_by: bool,
    /// Grouping imposed by the endpoint itself.
    pub fixed_grouping: Option<GroupBy>,
}

impl MetricSpec {
    const fn app_metric(name: &'static str) -> Self {
        Self {
            family: ApiFamily::AppMetrics,
            name,
            dated: true,
            country: true,
            event_name: false,
            group_by: true,
            fixed_grouping: None,
        }
    }

    const fn locked(mut self, grouping: GroupBy) -> Self {
        self.group_by = false;
        self.fixed_grouping = Some(grouping);
        self
    }

    const fn event_metric(name: &'static str, event_name: bool) -> Self {
        Self {
            family: ApiFamily::EventMetrics,
            name,
            dated: true,
            country: false,
            event_name,
            group_by: false,
            fixed_grouping: None,
        }
    }

    const fn app_info(name: &'static str) -> Self {
        Self {
            family: ApiFamily::AppInfo,
            name,
            dated: false,
            country: false,
            event_name: false,
            group_by: false,
            fixed_grouping: None,
        }
    }
}

/// An endpoint of the reporting API.
///
/// Ordering follows declaration order, so maps keyed by `Metric` list
/// metrics the way the API documents them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    /// Unique users who accessed the application, per day.
    ActiveUsers,
    /// Unique users per complete calendar week.
    ActiveUsersByWeek,
    /// Unique users per complete calendar month.
    ActiveUsersByMonth,
    /// Users who used the application for the first time, per day.
    NewUsers,
    /// Median session length, per day.
    MedianSessionLength,
    /// Average session length, per day.
    AvgSessionLength,
    /// Number of sessions, per day.
    Sessions,
    /// Users who remain active users of the application, per day.
    RetainedUsers,
    /// Number of page views, per day.
    PageViews,
    /// Average page views per session, per day.
    AvgPageViewsPerSession,
    /// Information on the application.
    GetApplication,
    /// Information on all applications of the account.
    GetAllApplications,
    /// Summary of all events of the application.
    EventSummary,
    /// Metrics of one event, including its parameters.
    Event,
}

impl Metric {
    /// The ten engagement metrics, in table order.
    pub const APP_METRICS: [Self; 10] = [
        Self::ActiveUsers,
        Self::ActiveUsersByWeek,
        Self::ActiveUsersByMonth,
        Self::NewUsers,
        Self::MedianSessionLength,
        Self::AvgSessionLength,
        Self::Sessions,
        Self::RetainedUsers,
        Self::PageViews,
        Self::AvgPageViewsPerSession,
    ];

    /// Returns the table entry of this metric.
    #[must_use]
    pub const fn spec(self) -> MetricSpec {
        match self {
            Self::ActiveUsers => MetricSpec::app_metric("ActiveUsers"),
            Self::ActiveUsersByWeek => {
                MetricSpec::app_metric("ActiveUsersByWeek").locked(GroupBy::Week)
            }
            Self::ActiveUsersByMonth => {
                MetricSpec::app_metric("ActiveUsersByMonth").locked(GroupBy::Month)
            }
            Self::NewUsers => MetricSpec::app_metric("NewUsers"),
            Self::MedianSessionLength => MetricSpec::app_metric("MedianSessionLength"),
            Self::AvgSessionLength => MetricSpec::app_metric("AvgSessionLength"),
            Self::Sessions => MetricSpec::app_metric("Sessions"),
            Self::RetainedUsers => MetricSpec::app_metric("RetainedUsers"),
            Self::PageViews => MetricSpec::app_metric("PageViews"),
            Self::AvgPageViewsPerSession => MetricSpec::app_metric("AvgPageViewsPerSession"),
            Self::GetApplication => MetricSpec::app_info("getApplication"),
            Self::GetAllApplications => MetricSpec::app_info("getAllApplications"),
            Self::EventSummary => MetricSpec::event_metric("Summary", false),
            Self::Event => MetricSpec::event_metric("Event", true),
        }
    }

    /// Returns the endpoint name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.spec().name
    }

    /// Returns the endpoint family.
    #[must_use]
    pub const fn family(self) -> ApiFamily {
        self.spec().family
    }

    /// Returns `true` if callers may choose the grouping.
    #[must_use]
    pub const fn allows_group_by(self) -> bool {
        self.spec().group_by
    }

    /// Builds the request for this metric from a query.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::UnsupportedParameter`] if the query sets a
    /// parameter the metric does not accept, and
    /// [`MetricsError::MissingParameter`] if it lacks a required one.
    pub fn request(self, query: &MetricQuery) -> Result<MetricRequest, MetricsError> {
        let spec = self.spec();
        let unsupported = |parameter| MetricsError::UnsupportedParameter {
            metric: spec.name,
            parameter,
        };
        let missing = |parameter| MetricsError::MissingParameter {
            metric: spec.name,
            parameter,
        };

        if spec.dated {
            if query.start_date.is_none() {
                return Err(missing("startDate"));
            }
        } else if query.start_date.is_some() || query.end_date.is_some() {
            return Err(unsupported("startDate"));
        } else if query.version_name.is_some() {
            return Err(unsupported("versionName"));
        }
        if !spec.country && query.country.is_some() {
            return Err(unsupported("country"));
        }
        if !spec.group_by && query.group_by.is_some() {
            return Err(unsupported("groupBy"));
        }
        match (spec.event_name, &query.event_name) {
            (true, None) => return Err(missing("eventName")),
            (false, Some(_)) => return Err(unsupported("eventName")),
            _ => {}
        }

        let mut builder = MetricRequest::builder(spec.family, spec.name)
            .maybe_end_date(query.end_date.clone())
            .maybe_country(query.country.clone())
            .maybe_version_name(query.version_name.clone())
            .group_by(query.group_by);
        if let Some(start_date) = &query.start_date {
            builder = builder.start_date(start_date);
        }
        if let Some(event_name) = &query.event_name {
            builder = builder.event_name(event_name.as_str());
        }

        Ok(builder.build())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameters of a metric call.
///
/// # Example
///
/// ```rust
/// use flurry_api::clients::GroupBy;
/// use flurry_api::metrics::MetricQuery;
/// use flurry_api::ReportDate;
///
/// let query = MetricQuery::new(ReportDate::new("2013-05-01").unwrap())
///     .end_date(ReportDate::new("2013-05-31").unwrap())
///     .country("US")
///     .group_by(GroupBy::Week);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricQuery {
    /// First day of the reporting window.
    pub start_date: Option<ReportDate>,
    /// Last day of the reporting window; defaults to `start_date`.
    pub end_date: Option<ReportDate>,
    /// Event to report on.
    pub event_name: Option<String>,
    /// Country filter.
    pub country: Option<String>,
    /// Application version filter.
    pub version_name: Option<String>,
    /// Time bucketing.
    pub group_by: Option<GroupBy>,
}

impl MetricQuery {
    /// Creates a query for a reporting window starting at `start_date`.
    #[must_use]
    pub fn new(start_date: impl Into<ReportDate>) -> Self {
        Self {
            start_date: Some(start_date.into()),
            ..Self::default()
        }
    }

    /// Sets the last day of the reporting window.
    #[must_use]
    pub fn end_date(mut self, end_date: impl Into<ReportDate>) -> Self {
        self.end_date = Some(end_date.into());
        self
    }

    /// Sets the event name.
    #[must_use]
    pub fn event_name(mut self, event_name: impl Into<String>) -> Self {
        self.event_name = Some(event_name.into());
        self
    }

    /// Sets the country filter. `ALL` breaks results down by country.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Sets the application version filter.
    #[must_use]
    pub fn version_name(mut self, version_name: impl Into<String>) -> Self {
        self.version_name = Some(version_name.into());
        self
    }

    /// Sets the time bucketing.
    #[must_use]
    pub const fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }
}
