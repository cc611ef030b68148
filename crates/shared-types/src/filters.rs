use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A specific trademark status a search can be narrowed to.
///
/// "All" is not a label: it is the absence of any status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLabel {
    Registered,
    Pending,
    Abandoned,
    Others,
}

/// All status labels in display order.
pub const ALL_STATUS_LABELS: &[StatusLabel] = &[
    StatusLabel::Registered,
    StatusLabel::Pending,
    StatusLabel::Abandoned,
    StatusLabel::Others,
];

impl StatusLabel {
    /// Lower-case key used in URLs and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Registered => "registered",
            StatusLabel::Pending => "pending",
            StatusLabel::Abandoned => "abandoned",
            StatusLabel::Others => "others",
        }
    }

    /// Human-readable name for the status chip.
    pub fn display_name(&self) -> &'static str {
        match self {
            StatusLabel::Registered => "Registered",
            StatusLabel::Pending => "Pending",
            StatusLabel::Abandoned => "Abandoned",
            StatusLabel::Others => "Others",
        }
    }

    /// Parse a label case-insensitively. "all" and unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "registered" => Some(StatusLabel::Registered),
            "pending" => Some(StatusLabel::Pending),
            "abandoned" => Some(StatusLabel::Abandoned),
            "others" => Some(StatusLabel::Others),
            _ => None,
        }
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A faceted filter category backed by aggregation buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Facet {
    #[default]
    Owners,
    LawFirms,
    Attorneys,
}

/// Facet tabs in display order.
pub const ALL_FACETS: &[Facet] = &[Facet::Owners, Facet::LawFirms, Facet::Attorneys];

impl Facet {
    /// Tab label shown in the facet selector.
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Owners => "Owners",
            Facet::LawFirms => "Law Firms",
            Facet::Attorneys => "Attorneys",
        }
    }

    /// Query-string parameter and request-body field name.
    pub fn param_key(&self) -> &'static str {
        match self {
            Facet::Owners => "owners",
            Facet::LawFirms => "law_firms",
            Facet::Attorneys => "attorneys",
        }
    }

    /// Aggregation name in the search response.
    pub fn aggregation_key(&self) -> &'static str {
        match self {
            Facet::Owners => "current_owners",
            Facet::LawFirms => "law_firms",
            Facet::Attorneys => "attorneys",
        }
    }
}

/// Insertion-ordered set of selected facet values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacetSelection(Vec<String>);

impl FacetSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    /// Add a value if it is not already selected. Returns true when inserted.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    /// Flip membership of `value`. Returns true when the value is now selected.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|v| v == value) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(value.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<S> for FacetSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = FacetSelection::new();
        for value in iter {
            selection.insert(value);
        }
        selection
    }
}

/// Selected values for every facet category.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetSelections {
    #[serde(default)]
    pub owners: FacetSelection,
    #[serde(default)]
    pub law_firms: FacetSelection,
    #[serde(default)]
    pub attorneys: FacetSelection,
}

impl FacetSelections {
    pub fn get(&self, facet: Facet) -> &FacetSelection {
        match facet {
            Facet::Owners => &self.owners,
            Facet::LawFirms => &self.law_firms,
            Facet::Attorneys => &self.attorneys,
        }
    }

    pub fn get_mut(&mut self, facet: Facet) -> &mut FacetSelection {
        match facet {
            Facet::Owners => &mut self.owners,
            Facet::LawFirms => &mut self.law_firms,
            Facet::Attorneys => &mut self.attorneys,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty() && self.law_firms.is_empty() && self.attorneys.is_empty()
    }
}

/// The full search filter tuple: query text, country, status and facets.
///
/// An empty `status` set means "All".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub country: String,
    #[serde(default)]
    pub status: BTreeSet<StatusLabel>,
    #[serde(default)]
    pub facets: FacetSelections,
}

impl FilterState {
    pub fn new(query: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    /// True when neither status nor any facet narrows the search.
    pub fn is_unfiltered(&self) -> bool {
        self.status.is_empty() && self.facets.is_empty()
    }

    /// Lower-case status keys in canonical order.
    pub fn status_keys(&self) -> Vec<String> {
        self.status.iter().map(|s| s.as_str().to_string()).collect()
    }

    /// Drop every status and facet filter, keeping query and country.
    pub fn clear_filters(&mut self) {
        self.status.clear();
        self.facets = FacetSelections::default();
    }

    /// Deterministic cache key over the whole filter tuple.
    ///
    /// Each value is percent-encoded, so the `|` and `,` separators cannot occur
    /// inside a component.
    pub fn fingerprint(&self) -> Fingerprint {
        fn join<'a>(values: impl Iterator<Item = &'a str>) -> String {
            values
                .map(|v| urlencoding::encode(v).into_owned())
                .collect::<Vec<_>>()
                .join(",")
        }

        let status = join(self.status.iter().map(StatusLabel::as_str));
        let parts = [
            urlencoding::encode(&self.query).into_owned(),
            status,
            urlencoding::encode(&self.country).into_owned(),
            join(self.facets.owners.iter()),
            join(self.facets.attorneys.iter()),
            join(self.facets.law_firms.iter()),
        ];
        Fingerprint(parts.join("|"))
    }
}

/// Cache key derived from a [`FilterState`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
