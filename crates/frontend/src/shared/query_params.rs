//! List state carried in the URL.
//!
//! Admin lists keep `query`, `page`, `limit` and one categorical filter
//! (`status` or `method`) in the search string. [`ListQuery`] is the resolved,
//! read-only view of those parameters: missing or invalid values fall back
//! to defaults and never fail. Changing a filter means navigating to a new
//! URL, which re-derives the query and triggers a new fetch.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use serde::Serialize;

use crate::config::{DEFAULT_LIMIT, DEFAULT_PAGE, FILTER_ALL};

/// Which URL parameter holds the categorical filter of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterParam {
    Status,
    Method,
}

impl FilterParam {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterParam::Status => "status",
            FilterParam::Method => "method",
        }
    }
}

#[derive(Debug, Default)]
struct RawListParams {
    query: Option<String>,
    page: Option<String>,
    limit: Option<String>,
    status: Option<String>,
    method: Option<String>,
}

/// Parameters sent to the API list endpoints
#[derive(Debug, Serialize)]
struct BackendListParams<'a> {
    page: u32,
    query: &'a str,
    page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<&'a str>,
}

/// Parameters written back to the browser URL; defaults are omitted
#[derive(Debug, Serialize)]
struct UrlListParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    method: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub query: String,
    pub page: u32,
    pub limit: u32,
    pub filter: String,
    pub filter_param: FilterParam,
}

impl RawListParams {
    /// Reads `key=value` pairs one at a time, so a bad pair only loses
    /// itself. A repeated key keeps its last value.
    fn parse(search: &str) -> Self {
        let mut raw = Self::default();
        for pair in search.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = match urlencoding::decode(&value.replace('+', " ")) {
                Ok(v) => v.into_owned(),
                Err(e) => {
                    log::warn!("Ignoring undecodable parameter '{}': {}", key, e);
                    continue;
                }
            };
            let slot = match key {
                "query" => &mut raw.query,
                "page" => &mut raw.page,
                "limit" => &mut raw.limit,
                "status" => &mut raw.status,
                "method" => &mut raw.method,
                _ => continue,
            };
            *slot = Some(value);
        }
        raw
    }
}

fn positive_or(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(default)
}

impl ListQuery {
    pub fn new(filter_param: FilterParam) -> Self {
        Self {
            query: String::new(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            filter: FILTER_ALL.to_string(),
            filter_param,
        }
    }

    /// Resolves a browser search string (with or without the leading `?`)
    pub fn from_search(search: &str, filter_param: FilterParam) -> Self {
        let raw = RawListParams::parse(search);

        let filter = match filter_param {
            FilterParam::Status => raw.status,
            FilterParam::Method => raw.method,
        }
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| FILTER_ALL.to_string());

        Self {
            query: raw.query.map(|q| q.trim().to_string()).unwrap_or_default(),
            page: positive_or(raw.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(raw.limit.as_deref(), DEFAULT_LIMIT),
            filter,
            filter_param,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.filter != FILTER_ALL
    }

    fn active_filter(&self) -> Option<&str> {
        self.is_filtered().then_some(self.filter.as_str())
    }

    /// Query string for the API list endpoint; `all` is not sent
    pub fn to_backend_query(&self) -> String {
        let filter = self.active_filter();
        let params = BackendListParams {
            page: self.page,
            query: &self.query,
            page_size: self.limit,
            status: filter.filter(|_| self.filter_param == FilterParam::Status),
            method: filter.filter(|_| self.filter_param == FilterParam::Method),
        };
        serde_qs::to_string(&params).unwrap_or_else(|e| {
            log::error!("Failed to encode list parameters: {}", e);
            String::new()
        })
    }

    /// Search string for the browser URL, starting with `?` (or empty)
    pub fn to_search(&self) -> String {
        let filter = self.active_filter();
        let params = UrlListParams {
            query: Some(self.query.as_str()).filter(|q| !q.is_empty()),
            page: Some(self.page).filter(|p| *p != DEFAULT_PAGE),
            limit: Some(self.limit).filter(|l| *l != DEFAULT_LIMIT),
            status: filter.filter(|_| self.filter_param == FilterParam::Status),
            method: filter.filter(|_| self.filter_param == FilterParam::Method),
        };
        match serde_qs::to_string(&params) {
            Ok(qs) if !qs.is_empty() => format!("?{}", qs),
            Ok(_) => String::new(),
            Err(e) => {
                log::error!("Failed to encode URL parameters: {}", e);
                String::new()
            }
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// New search text; goes back to the first page
    pub fn with_query(&self, query: &str) -> Self {
        Self {
            query: query.trim().to_string(),
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    pub fn with_limit(&self, limit: u32) -> Self {
        Self {
            limit: if limit == 0 { DEFAULT_LIMIT } else { limit },
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }

    /// Same page with the filter pinned, for pages that never let the
    /// user choose it
    pub fn with_fixed_filter(&self, filter: &str) -> Self {
        Self {
            filter: filter.to_string(),
            ..self.clone()
        }
    }

    pub fn with_filter(&self, filter: &str) -> Self {
        let filter = filter.trim();
        Self {
            filter: if filter.is_empty() {
                FILTER_ALL.to_string()
            } else {
                filter.to_string()
            },
            page: DEFAULT_PAGE,
            ..self.clone()
        }
    }
}

/// Current list query of the page, re-derived whenever the URL changes
pub fn use_list_query(filter_param: FilterParam) -> Memo<ListQuery> {
    let location = use_location();
    Memo::new(move |_| ListQuery::from_search(&location.search.get(), filter_param))
}

/// Returns a function that navigates the current page to another list query
pub fn use_list_navigation() -> impl Fn(&ListQuery) + Clone + 'static {
    let location = use_location();
    let navigate = use_navigate();
    move |next: &ListQuery| {
        let path = location.pathname.get_untracked();
        navigate(&format!("{}{}", path, next.to_search()), Default::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_yields_defaults() {
        let q = ListQuery::from_search("", FilterParam::Status);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert_eq!(q.query, "");
        assert_eq!(q.filter, "all");
        assert!(!q.is_filtered());
        assert_eq!(q, ListQuery::new(FilterParam::Status));
    }

    #[test]
    fn test_reads_all_parameters() {
        let q = ListQuery::from_search("?query=lomo&page=3&limit=20&status=true", FilterParam::Status);
        assert_eq!(q.query, "lomo");
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 20);
        assert_eq!(q.filter, "true");
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let q = ListQuery::from_search("page=abc&limit=0", FilterParam::Status);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        let q = ListQuery::from_search("page=-2&limit=2.5", FilterParam::Status);
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        let q = ListQuery::from_search("page=&limit=", FilterParam::Status);
        assert_eq!((q.page, q.limit), (1, 10));
    }

    #[test]
    fn test_bad_parameter_keeps_the_others() {
        let q = ListQuery::from_search("query=lomo&page=2&page=3", FilterParam::Status);
        assert_eq!(q.query, "lomo");
        assert_eq!(q.page, 3);

        let q = ListQuery::from_search("query=%E0%A4%A&limit=20&page[x]=2", FilterParam::Status);
        assert_eq!(q.query, "");
        assert_eq!(q.limit, 20);
        assert_eq!(q.page, 1);

        let q = ListQuery::from_search("?query=lomo+saltado&status", FilterParam::Status);
        assert_eq!(q.query, "lomo saltado");
        assert_eq!(q.filter, "all");
    }

    #[test]
    fn test_fixed_filter_keeps_page() {
        let q = ListQuery::from_search("page=3&status=false", FilterParam::Status).with_fixed_filter("true");
        assert_eq!(q.page, 3);
        assert_eq!(q.filter, "true");
    }

    #[test]
    fn test_filter_comes_from_its_own_parameter() {
        let q = ListQuery::from_search("status=true&method=yape", FilterParam::Method);
        assert_eq!(q.filter, "yape");
        let q = ListQuery::from_search("method=", FilterParam::Method);
        assert_eq!(q.filter, "all");
    }

    #[test]
    fn test_backend_query_omits_all() {
        let q = ListQuery::new(FilterParam::Method);
        assert_eq!(q.to_backend_query(), "page=1&query=&page_size=10");

        let q = q.with_filter("yape").with_page(2);
        assert_eq!(q.to_backend_query(), "page=2&query=&page_size=10&method=yape");
    }

    #[test]
    fn test_url_search_omits_defaults() {
        let q = ListQuery::new(FilterParam::Status);
        assert_eq!(q.to_search(), "");
        let q = q.with_limit(20).with_filter("false").with_page(4);
        assert_eq!(q.to_search(), "?page=4&limit=20&status=false");
    }

    #[test]
    fn test_changing_filters_resets_page() {
        let q = ListQuery::from_search("page=5", FilterParam::Status);
        assert_eq!(q.with_query("pisco").page, 1);
        assert_eq!(q.with_limit(50).page, 1);
        assert_eq!(q.with_filter("true").page, 1);
        assert_eq!(q.with_page(0).page, 1);
        assert_eq!(q.with_filter("").filter, "all");
    }

    #[test]
    fn test_search_round_trip() {
        let q = ListQuery::new(FilterParam::Status)
            .with_query("inca")
            .with_filter("true")
            .with_page(2);
        assert_eq!(ListQuery::from_search(&q.to_search(), FilterParam::Status), q);
    }
}
