// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Navigable location state. The status filter lives here, in the `status`
//! query parameter, so it survives reloads and can be shared as an href.

use anyhow::{Context, Result, bail};
use url::{Url, form_urlencoded};

use crate::ids::LeadId;
use crate::model::LeadStatus;

pub const STATUS_PARAM: &str = "status";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const LEADS_PATH: &str = "/leads";
const LEAD_DETAIL_PREFIX: &str = "/lead/";
const BASE_URL: &str = "http://leads.local/";

pub fn lead_detail_path(id: &LeadId) -> String {
    format!("{LEAD_DETAIL_PREFIX}{id}")
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// Query holding only the given status; `None` is the empty query.
    pub fn for_status(status: Option<LeadStatus>) -> Self {
        let pairs = status
            .map(|status| vec![(STATUS_PARAM.to_owned(), status.as_str().to_owned())])
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(name, _)| name == key)
    }

    /// Values outside the status enum read as "All".
    pub fn status(&self) -> Option<LeadStatus> {
        self.get(STATUS_PARAM).and_then(LeadStatus::parse)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Leads,
    LeadDetail(LeadId),
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: QueryState,
}

impl Location {
    pub fn parse(href: &str) -> Result<Self> {
        if !href.starts_with('/') || href.starts_with("//") {
            bail!("location {href:?} must be an absolute path such as /leads?status=active");
        }
        let base = Url::parse(BASE_URL).context("parse base url")?;
        let url = base
            .join(href)
            .with_context(|| format!("parse location {href:?}"))?;
        Ok(Self {
            path: url.path().to_owned(),
            query: QueryState::parse(url.query().unwrap_or("")),
        })
    }

    pub fn leads(status: Option<LeadStatus>) -> Self {
        Self {
            path: LEADS_PATH.to_owned(),
            query: QueryState::for_status(status),
        }
    }

    pub fn href(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }

    pub fn status_filter(&self) -> Option<LeadStatus> {
        self.query.status()
    }

    pub fn route(&self) -> Route {
        match self.path.as_str() {
            DASHBOARD_PATH => Route::Dashboard,
            "/" | LEADS_PATH => Route::Leads,
            path => match path.strip_prefix(LEAD_DETAIL_PREFIX).and_then(LeadId::parse) {
                Some(id) => Route::LeadDetail(id),
                None => Route::NotFound(path.to_owned()),
            },
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::leads(None)
    }
}

/// A navigation request emitted by the list view. Routers apply it; the
/// view never navigates on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavIntent {
    /// Keep the current path and replace its whole query.
    SetQuery(QueryState),
    /// Go to an absolute href.
    Push(String),
}

impl NavIntent {
    pub fn status_filter(status: Option<LeadStatus>) -> Self {
        Self::SetQuery(QueryState::for_status(status))
    }

    pub fn open_lead(id: &LeadId) -> Self {
        Self::Push(lead_detail_path(id))
    }

    pub fn dashboard() -> Self {
        Self::Push(DASHBOARD_PATH.to_owned())
    }
}

pub trait Router {
    fn location(&self) -> &Location;
    fn navigate(&mut self, href: &str) -> Result<()>;
    fn set_query(&mut self, query: QueryState);
    /// Returns false when there is no earlier location to return to.
    fn back(&mut self) -> bool;

    fn apply(&mut self, intent: &NavIntent) -> Result<()> {
        match intent {
            NavIntent::SetQuery(query) => {
                self.set_query(query.clone());
                Ok(())
            }
            NavIntent::Push(href) => self.navigate(href),
        }
    }
}

/// History-stack router kept entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryRouter {
    history: Vec<Location>,
}

impl MemoryRouter {
    pub fn new(start: Location) -> Self {
        Self {
            history: vec![start],
        }
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }

    fn push(&mut self, location: Location) {
        tracing::debug!(href = %location.href(), "navigate");
        self.history.push(location);
    }
}

impl Default for MemoryRouter {
    fn default() -> Self {
        Self::new(Location::default())
    }
}

impl Router for MemoryRouter {
    fn location(&self) -> &Location {
        // history is never empty: new() seeds it and back() keeps the root
        &self.history[self.history.len() - 1]
    }

    fn navigate(&mut self, href: &str) -> Result<()> {
        let location = Location::parse(href)?;
        self.push(location);
        Ok(())
    }

    fn set_query(&mut self, query: QueryState) {
        let path = self.location().path.clone();
        self.push(Location { path, query });
    }

    fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        tracing::debug!(href = %self.location().href(), "navigate back");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Location, MemoryRouter, NavIntent, QueryState, Route, Router, STATUS_PARAM};
    use crate::{LeadId, LeadStatus};
    use anyhow::Result;

    #[test]
    fn status_round_trips_through_the_query() {
        for status in LeadStatus::ALL {
            let query = QueryState::for_status(Some(status));
            assert_eq!(query.to_query_string(), format!("status={}", status.as_str()));
            assert_eq!(QueryState::parse(&query.to_query_string()).status(), Some(status));
        }
    }

    #[test]
    fn clearing_status_leaves_no_key() -> Result<()> {
        let mut router = MemoryRouter::new(Location::parse("/leads")?);
        router.apply(&NavIntent::status_filter(Some(LeadStatus::InProgress)))?;
        assert_eq!(router.location().href(), "/leads?status=in-progress");

        router.apply(&NavIntent::status_filter(None))?;
        assert!(!router.location().query.contains_key(STATUS_PARAM));
        assert_eq!(router.location().href(), "/leads");
        Ok(())
    }

    #[test]
    fn unknown_status_value_reads_as_all() {
        assert_eq!(QueryState::parse("status=archived").status(), None);
        assert_eq!(QueryState::parse("status=").status(), None);
        assert_eq!(QueryState::parse("?status=completed").status(), Some(LeadStatus::Completed));
    }

    #[test]
    fn choosing_a_status_replaces_the_whole_query() -> Result<()> {
        let mut router = MemoryRouter::new(Location::parse("/leads?tab=2&status=active")?);
        router.apply(&NavIntent::status_filter(Some(LeadStatus::Completed)))?;
        assert_eq!(router.location().href(), "/leads?status=completed");
        Ok(())
    }

    #[test]
    fn routes_are_classified() -> Result<()> {
        assert_eq!(Location::parse("/dashboard")?.route(), Route::Dashboard);
        assert_eq!(Location::parse("/leads?status=active")?.route(), Route::Leads);
        assert_eq!(Location::parse("/")?.route(), Route::Leads);
        assert_eq!(
            Location::parse("/lead/FT-003318")?.route(),
            Route::LeadDetail(LeadId::parse("FT-003318").expect("valid id"))
        );
        assert_eq!(
            Location::parse("/lead/nope")?.route(),
            Route::NotFound("/lead/nope".to_owned())
        );
        Ok(())
    }

    #[test]
    fn parse_rejects_relative_and_foreign_hrefs() {
        assert!(Location::parse("leads").is_err());
        assert!(Location::parse("//evil.example/leads").is_err());
        assert!(Location::parse("").is_err());
    }

    #[test]
    fn router_back_walks_history_and_keeps_root() -> Result<()> {
        let mut router = MemoryRouter::new(Location::leads(Some(LeadStatus::Active)));
        let id = LeadId::parse("FT-000932").expect("valid id");
        router.apply(&NavIntent::open_lead(&id))?;
        assert_eq!(router.location().route(), Route::LeadDetail(id));
        assert_eq!(router.depth(), 2);

        assert!(router.back());
        assert_eq!(router.location().href(), "/leads?status=active");
        assert!(!router.back());
        assert_eq!(router.depth(), 1);
        Ok(())
    }

    #[test]
    fn dashboard_intent_targets_dashboard_path() -> Result<()> {
        let mut router = MemoryRouter::default();
        router.apply(&NavIntent::dashboard())?;
        assert_eq!(router.location().route(), Route::Dashboard);
        Ok(())
    }
}
