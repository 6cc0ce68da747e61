//! The Flurry metrics client.
//!
//! This module provides [`FlurryClient`], exposing one operation per endpoint
//! of the reporting API plus composite helpers built on top of them.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::clients::HttpClient;
use crate::config::{ApiAccessCode, ApiKey, FlurryConfig, ReportDate};
use crate::metrics::catalog::{Metric, MetricQuery};
use crate::metrics::errors::MetricsError;
use crate::metrics::node::{flatten, Node, OneOrMany, Scalar};
use crate::metrics::search::{daily_value, event_name, parameter_total_count, summary_events};

/// Parameter counts per event, as returned by
/// [`FlurryClient::counts_for_events_and_parameter`].
///
/// A count is `None` when the event has no descriptor for the parameter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParameterCounts {
    /// One parameter was requested: event name to count.
    Single(BTreeMap<String, Option<Scalar>>),
    /// Several parameters were requested: parameter name to event name to count.
    Multiple(BTreeMap<String, BTreeMap<String, Option<Scalar>>>),
}

/// Client for the Flurry reporting API.
///
/// Every operation issues its requests strictly one after another, each
/// preceded by the rate-limit pause.
///
/// # Example
///
/// ```rust,ignore
/// use flurry_api::metrics::{FlurryClient, MetricQuery};
/// use flurry_api::ReportDate;
///
/// let client = FlurryClient::new("ACCESS-CODE", "API-KEY")?;
/// let date = ReportDate::new("2013-05-14")?;
///
/// let sessions = client.sessions(&MetricQuery::new(&date)).await?;
/// let daily = client.all_daily_metrics(&date, None, None).await?;
/// let events = client.event_names(&date).await?;
/// ```
#[derive(Debug)]
pub struct FlurryClient {
    http_client: HttpClient,
}

// Verify FlurryClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FlurryClient>();
};

macro_rules! metric_operations {
    ($($(#[$doc:meta])* $method:ident => $metric:ident;)*) => {
        impl FlurryClient {
            $(
                $(#[$doc])*
                ///
                /// # Errors
                ///
                /// Returns [`MetricsError`] if the query does not fit the
                /// metric or the request fails.
                pub async fn $method(&self, query: &MetricQuery) -> Result<Value, MetricsError> {
                    self.fetch(Metric::$metric, query).await
                }
            )*
        }
    };
}

metric_operations! {
    /// Total number of unique users who accessed the application per day.
    active_users => ActiveUsers;
    /// Unique users per complete calendar week. Grouping cannot be overridden.
    active_users_by_week => ActiveUsersByWeek;
    /// Unique users per complete calendar month. Grouping cannot be overridden.
    active_users_by_month => ActiveUsersByMonth;
    /// Users who used the application for the first time, per day.
    new_users => NewUsers;
    /// Median length of a user session per day.
    median_session_length => MedianSessionLength;
    /// Average length of a user session per day.
    avg_session_length => AvgSessionLength;
    /// Total number of times users accessed the application per day.
    sessions => Sessions;
    /// Users who remain active users of the application per day.
    retained_users => RetainedUsers;
    /// Total number of page views per day.
    page_views => PageViews;
    /// Average page views per session for each day.
    avg_page_views_per_session => AvgPageViewsPerSession;
    /// All events of the application with their user and count totals.
    event_summary => EventSummary;
}

impl FlurryClient {
    /// Creates a client with the default retry bound of 3.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Config`] if a credential is empty, or
    /// [`MetricsError::Http`] if the HTTP client cannot be created.
    pub fn new(
        access_code: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, MetricsError> {
        Self::with_max_retries(
            access_code,
            api_key,
            crate::config::DEFAULT_MAX_RETRIES,
        )
    }

    /// Creates a client that retries provider errors `max_retries` times.
    ///
    /// # Errors
    ///
    /// Same as [`FlurryClient::new`].
    pub fn with_max_retries(
        access_code: impl Into<String>,
        api_key: impl Into<String>,
        max_retries: u32,
    ) -> Result<Self, MetricsError> {
        let config = FlurryConfig::builder()
            .access_code(ApiAccessCode::new(access_code)?)
            .api_key(ApiKey::new(api_key)?)
            .max_retries(max_retries)
            .build()?;
        Self::from_config(&config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Http`] if the HTTP client cannot be created.
    pub fn from_config(config: &FlurryConfig) -> Result<Self, MetricsError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Replaces the application API key.
    ///
    /// The access code and retry bound are unchanged; subsequent requests use
    /// the new key.
    pub fn rotate_api_key(&mut self, api_key: ApiKey) {
        self.http_client.rotate_api_key(api_key);
    }

    /// Fetches any metric of the table.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] if the query does not fit the metric or the
    /// request fails.
    pub async fn fetch(&self, metric: Metric, query: &MetricQuery) -> Result<Value, MetricsError> {
        let request = metric.request(query)?;
        Ok(self.http_client.execute(&request).await?)
    }

    /// Information on the application.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Http`] if the request fails.
    pub async fn application(&self) -> Result<Value, MetricsError> {
        self.fetch(Metric::GetApplication, &MetricQuery::default())
            .await
    }

    /// Information on all applications of the account.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Http`] if the request fails.
    pub async fn all_applications(&self) -> Result<Value, MetricsError> {
        self.fetch(Metric::GetAllApplications, &MetricQuery::default())
            .await
    }

    /// Metrics of one event: users, sessions, counts, duration and parameters.
    ///
    /// The `event_name` argument overrides any event name set on the query.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError`] if the query does not fit the metric or the
    /// request fails.
    pub async fn event_metrics(
        &self,
        event_name: &str,
        query: &MetricQuery,
    ) -> Result<Value, MetricsError> {
        let query = query.clone().event_name(event_name);
        self.fetch(Metric::Event, &query).await
    }

    /// Fetches the ten engagement metrics for one day and extracts each value.
    ///
    /// # Errors
    ///
    /// Returns the first failure among the ten requests, or
    /// [`MetricsError::Shape`] if a response carries no single value.
    pub async fn all_daily_metrics(
        &self,
        date: impl Into<ReportDate>,
        country: Option<&str>,
        version_name: Option<&str>,
    ) -> Result<BTreeMap<Metric, Scalar>, MetricsError> {
        let mut query = MetricQuery::new(date);
        query.country = country.map(String::from);
        query.version_name = version_name.map(String::from);

        let mut values = BTreeMap::new();
        for metric in Metric::APP_METRICS {
            let response = flatten(self.fetch(metric, &query).await?);
            values.insert(metric, daily_value(&response)?);
        }
        Ok(values)
    }

    /// Returns the names of all events recorded on `date`, in response order.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Http`] if the request fails, or
    /// [`MetricsError::Shape`] if an event carries no name.
    pub async fn event_names(&self, date: impl Into<ReportDate>) -> Result<Vec<String>, MetricsError> {
        let summary = self.summary_node(date.into()).await?;
        let names = summary_events(&summary)?
            .into_iter()
            .map(|event| event_name(event).map(String::from))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Returns the names of all events recorded today (UTC).
    ///
    /// # Errors
    ///
    /// Same as [`FlurryClient::event_names`].
    pub async fn event_names_today(&self) -> Result<Vec<String>, MetricsError> {
        self.event_names(ReportDate::today()).await
    }

    /// Returns the summary entries of the given events on `date`, in
    /// response order.
    ///
    /// # Errors
    ///
    /// Returns [`MetricsError::Http`] if the request fails, or
    /// [`MetricsError::Shape`] if an event carries no name.
    pub async fn summary_for_events<S: AsRef<str>>(
        &self,
        events: &[S],
        date: impl Into<ReportDate>,
    ) -> Result<Vec<Node>, MetricsError> {
        let summary = self.summary_node(date.into()).await?;

        let mut selected = Vec::new();
        for event in summary_events(&summary)? {
            let name = event_name(event)?;
            if events.iter().any(|wanted| wanted.as_ref() == name) {
                selected.push(event.clone());
            }
        }
        Ok(selected)
    }

    /// Counts how often each event carried the given parameter(s).
    ///
    /// One `Event` request is made per event. Pass a single name to get
    /// [`ParameterCounts::Single`], or a collection to get
    /// [`ParameterCounts::Multiple`].
    ///
    /// # Errors
    ///
    /// Returns the first request failure; no partial result is returned.
    pub async fn counts_for_events_and_parameter<S: AsRef<str>>(
        &self,
        events: &[S],
        params: impl Into<OneOrMany<String>>,
        start_date: impl Into<ReportDate>,
        end_date: Option<ReportDate>,
    ) -> Result<ParameterCounts, MetricsError> {
        let params = params.into();
        let mut query = MetricQuery::new(start_date);
        query.end_date = end_date;

        let mut counts: BTreeMap<String, BTreeMap<String, Option<Scalar>>> = params
            .iter()
            .map(|param| (param.clone(), BTreeMap::new()))
            .collect();

        for event in events {
            let event = event.as_ref();
            let response = flatten(self.event_metrics(event, &query).await?);
            for param in &params {
                let count = parameter_total_count(&response, param);
                if let Some(per_event) = counts.get_mut(param) {
                    per_event.insert(event.to_string(), count);
                }
            }
        }

        Ok(match params {
            OneOrMany::Single(param) => {
                ParameterCounts::Single(counts.remove(&param).unwrap_or_default())
            }
            OneOrMany::Many(_) => ParameterCounts::Multiple(counts),
        })
    }

    async fn summary_node(&self, date: ReportDate) -> Result<Node, MetricsError> {
        Ok(flatten(self.event_summary(&MetricQuery::new(date)).await?))
    }
}
