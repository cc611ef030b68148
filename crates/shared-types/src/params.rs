use std::collections::BTreeSet;
use std::fmt;

use crate::filters::{FacetSelection, FacetSelections, FilterState, StatusLabel};

/// Query-string state of the search page.
///
/// List parameters (`status`, `owners`, `attorneys`, `law_firms`) are
/// comma-joined; each value is percent-encoded on its own so commas inside a
/// value survive. Empty lists are omitted entirely. Parameters this page does
/// not understand are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub query: Option<String>,
    pub country: Option<String>,
    pub status: BTreeSet<StatusLabel>,
    pub facets: FacetSelections,
    pub extra: Vec<(String, String)>,
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

fn decode_list(raw: &str) -> FacetSelection {
    raw.split(',')
        .map(decode)
        .filter(|v| !v.is_empty())
        .collect()
}

fn encode_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| urlencoding::encode(v).into_owned())
        .collect::<Vec<_>>()
        .join(",")
}

impl SearchParams {
    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query_string: &str) -> Self {
        let mut params = SearchParams::default();
        let trimmed = query_string.trim_start_matches('?');

        for pair in trimmed.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(raw_key);
            match key.as_str() {
                "query" => params.query = non_empty(decode(raw_value)),
                "country" => params.country = non_empty(decode(raw_value)),
                "status" => {
                    params.status = raw_value
                        .split(',')
                        .filter_map(|v| StatusLabel::parse(&decode(v)))
                        .collect();
                }
                "owners" => params.facets.owners = decode_list(raw_value),
                "attorneys" => params.facets.attorneys = decode_list(raw_value),
                "law_firms" => params.facets.law_firms = decode_list(raw_value),
                _ => params.extra.push((key, decode(raw_value))),
            }
        }

        params
    }

    /// Parameters describing `state` exactly.
    pub fn from_state(state: &FilterState) -> Self {
        Self {
            query: Some(state.query.clone()),
            country: Some(state.country.clone()),
            status: state.status.clone(),
            facets: state.facets.clone(),
            extra: Vec::new(),
        }
    }

    /// Filter state described by these parameters, filling a missing query or
    /// country from the given defaults.
    pub fn to_state(&self, default_query: &str, default_country: &str) -> FilterState {
        FilterState {
            query: self
                .query
                .clone()
                .unwrap_or_else(|| default_query.to_string()),
            country: self
                .country
                .clone()
                .unwrap_or_else(|| default_country.to_string()),
            status: self.status.clone(),
            facets: self.facets.clone(),
        }
    }

    /// Fill a missing `query` / `country`. Returns true when anything was added.
    pub fn apply_defaults(&mut self, default_query: &str, default_country: &str) -> bool {
        let mut changed = false;
        if self.query.is_none() {
            self.query = Some(default_query.to_string());
            changed = true;
        }
        if self.country.is_none() {
            self.country = Some(default_country.to_string());
            changed = true;
        }
        changed
    }

    /// Same query and country, with status and facets taken from `state`.
    pub fn with_filters_from(&self, state: &FilterState) -> Self {
        Self {
            status: state.status.clone(),
            facets: state.facets.clone(),
            ..self.clone()
        }
    }

    /// Only `query` and `country`; used when a new search term drops refinements.
    pub fn query_only(query: &str, country: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            country: Some(country.to_string()),
            ..Self::default()
        }
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pairs: Vec<(String, String)> = Vec::new();

        if let Some(query) = &self.query {
            pairs.push(("query".into(), urlencoding::encode(query).into_owned()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country".into(), urlencoding::encode(country).into_owned()));
        }
        if !self.status.is_empty() {
            pairs.push((
                "status".into(),
                encode_list(self.status.iter().map(StatusLabel::as_str)),
            ));
        }
        for (key, selection) in [
            ("owners", &self.facets.owners),
            ("attorneys", &self.facets.attorneys),
            ("law_firms", &self.facets.law_firms),
        ] {
            if !selection.is_empty() {
                pairs.push((key.into(), encode_list(selection.iter())));
            }
        }
        for (key, value) in &self.extra {
            pairs.push((
                urlencoding::encode(key).into_owned(),
                urlencoding::encode(value).into_owned(),
            ));
        }

        let joined = pairs
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        f.write_str(&joined)
    }
}

impl From<&str> for SearchParams {
    fn from(query_string: &str) -> Self {
        SearchParams::parse(query_string)
    }
}
