use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SearchError;
use crate::filters::{Facet, FilterState};

/// Request body for the remote trademark search endpoint.
///
/// Field order and the fixed empty lists mirror what the endpoint expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub input_query: String,
    pub input_query_type: String,
    pub sort_by: String,
    pub status: Vec<String>,
    pub exact_match: bool,
    pub date_query: bool,
    pub owners: Vec<String>,
    pub attorneys: Vec<String>,
    pub law_firms: Vec<String>,
    pub mark_description_description: Vec<String>,
    pub classes: Vec<String>,
    pub page: u32,
    pub rows: u32,
    pub sort_order: String,
    pub states: Vec<String>,
    pub counties: Vec<String>,
}

/// Paging and ordering defaults applied to every request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDefaults {
    pub page: u32,
    pub rows: u32,
    pub sort_by: String,
    pub sort_order: String,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        Self {
            page: 1,
            rows: 10,
            sort_by: "default".to_string(),
            sort_order: "desc".to_string(),
        }
    }
}

impl SearchRequest {
    /// Build the request body for `filters`. Pure: equal inputs give equal bodies.
    pub fn from_filters(filters: &FilterState, defaults: &RequestDefaults) -> Self {
        Self {
            input_query: filters.query.clone(),
            input_query_type: String::new(),
            sort_by: defaults.sort_by.clone(),
            status: filters.status_keys(),
            exact_match: false,
            date_query: false,
            owners: filters.facets.owners.to_vec(),
            attorneys: filters.facets.attorneys.to_vec(),
            law_firms: filters.facets.law_firms.to_vec(),
            mark_description_description: Vec::new(),
            classes: Vec::new(),
            page: defaults.page,
            rows: defaults.rows,
            sort_order: defaults.sort_order.clone(),
            states: Vec::new(),
            counties: Vec::new(),
        }
    }
}

/// Outer wrapper of the endpoint response: `{ "body": { ... } }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub body: Option<RawSearchBody>,
}

/// Response body before validation; `hits` may be missing on bad responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSearchBody {
    #[serde(default)]
    pub hits: Option<HitsBlock>,
    #[serde(default)]
    pub aggregations: Option<Aggregations>,
}

impl SearchEnvelope {
    /// Validate the envelope, rejecting responses without `body.hits`.
    pub fn into_body(self) -> Result<SearchResponseBody, SearchError> {
        let body = self
            .body
            .ok_or_else(|| SearchError::malformed("Invalid response format from API"))?;
        let hits = body
            .hits
            .ok_or_else(|| SearchError::malformed("Invalid response format from API"))?;
        Ok(SearchResponseBody {
            hits,
            aggregations: body.aggregations.unwrap_or_default(),
        })
    }
}

/// A validated search response body; this is what the response cache stores.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResponseBody {
    pub hits: HitsBlock,
    #[serde(default)]
    pub aggregations: Aggregations,
}

impl SearchResponseBody {
    pub fn total(&self) -> Option<u64> {
        self.hits.total.as_ref().map(|t| t.value)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HitsBlock {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hits: Vec<Hit>,
    #[serde(default)]
    pub total: Option<HitsTotal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitsTotal {
    pub value: u64,
}

/// One trademark record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "_source", default, deserialize_with = "null_as_default")]
    pub source: HitSource,
}

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Class codes with `null` for the list or any entry dropped.
fn class_code_list<'de, D>(deserializer: D) -> Result<Vec<ClassCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let codes = Option::<Vec<Option<ClassCode>>>::deserialize(deserializer)?;
    Ok(codes.unwrap_or_default().into_iter().flatten().collect())
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HitSource {
    #[serde(default)]
    pub mark_identification: Option<String>,
    #[serde(default)]
    pub current_owner: Option<String>,
    #[serde(default)]
    pub filing_date: Option<DateValue>,
    #[serde(default)]
    pub registration_date: Option<DateValue>,
    #[serde(default)]
    pub renewal_date: Option<DateValue>,
    #[serde(default)]
    pub status_type: Option<String>,
    #[serde(default)]
    pub mark_description_description: Option<Description>,
    #[serde(default, deserialize_with = "class_code_list")]
    pub class_codes: Vec<ClassCode>,
}

/// A date as the endpoint sends it: ISO text or epoch seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    Text(String),
    Epoch(i64),
}

/// Goods/services description, sent either as one string or a list of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Lines(Vec<String>),
}

impl Description {
    /// Single display string; `None` when blank.
    pub fn as_text(&self) -> Option<String> {
        let text = match self {
            Description::Text(s) => s.trim().to_string(),
            Description::Lines(lines) => lines
                .iter()
                .map(|l| l.trim())
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// International class code, sent as `"009"` or `9`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassCode {
    Text(String),
    Number(i64),
}

/// Facet aggregations returned alongside hits.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Aggregations {
    #[serde(default)]
    pub current_owners: Option<BucketList>,
    #[serde(default)]
    pub law_firms: Option<BucketList>,
    #[serde(default)]
    pub attorneys: Option<BucketList>,
}

impl Aggregations {
    /// Bucket keys for a facet, in response order.
    pub fn keys(&self, facet: Facet) -> Vec<&str> {
        let list = match facet {
            Facet::Owners => &self.current_owners,
            Facet::LawFirms => &self.law_firms,
            Facet::Attorneys => &self.attorneys,
        };
        list.as_ref()
            .map(|l| l.buckets.iter().map(|b| b.key.as_str()).collect())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BucketList {
    #[serde(default)]
    pub buckets: Vec<Bucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub key: String,
    #[serde(default)]
    pub doc_count: Option<u64>,
}

/// Facet buckets from the latest unfiltered search.
///
/// Kept apart from the live aggregations so facet option lists stay stable
/// while the user narrows the results.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationSnapshot(Aggregations);

impl AggregationSnapshot {
    pub fn new(aggregations: Aggregations) -> Self {
        Self(aggregations)
    }

    pub fn keys(&self, facet: Facet) -> Vec<&str> {
        self.0.keys(facet)
    }

    pub fn aggregations(&self) -> &Aggregations {
        &self.0
    }
}
