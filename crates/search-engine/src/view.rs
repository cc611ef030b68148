use shared_types::{AggregationSnapshot, Aggregations, Fingerprint, Hit, SearchError};

use crate::orchestrator::SearchOutcome;

/// Bootstrap progress of the search page.
///
/// The page renders a placeholder until the first search settles, then never
/// leaves `Ready` again; later searches only toggle [`SearchView::loading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootPhase {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

impl BootPhase {
    /// First search scheduled.
    pub fn start(self) -> Self {
        match self {
            BootPhase::Uninitialized => BootPhase::Loading,
            other => other,
        }
    }

    /// A search finished, successfully or not.
    pub fn settle(self) -> Self {
        BootPhase::Ready
    }

    pub fn is_ready(self) -> bool {
        self == BootPhase::Ready
    }
}

/// Everything the result presenters and facet selector read.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchView {
    pub phase: BootPhase,
    pub loading: bool,
    pub hits: Vec<Hit>,
    pub total: Option<u64>,
    /// Aggregations of the latest successful search.
    pub aggregations: Aggregations,
    /// Aggregations of the latest successful unfiltered search.
    pub snapshot: AggregationSnapshot,
    pub error: Option<SearchError>,
    pub fingerprint: Option<Fingerprint>,
}

impl SearchView {
    /// A search was scheduled; stays loading until an outcome is applied.
    pub fn begin_loading(&mut self) {
        self.phase = self.phase.start();
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, outcome: SearchOutcome) {
        match outcome {
            SearchOutcome::Resolved(resolution) => {
                let body = resolution.body;
                self.total = body.total();
                self.hits = body.hits.hits;
                if resolution.unfiltered {
                    self.snapshot = AggregationSnapshot::new(body.aggregations.clone());
                }
                self.aggregations = body.aggregations;
                self.fingerprint = Some(resolution.fingerprint);
                self.error = None;
            }
            SearchOutcome::Failed(error) => {
                self.hits.clear();
                self.error = Some(error);
            }
            // The newer search owns the loading flag.
            SearchOutcome::Superseded => return,
        }
        self.loading = false;
        self.phase = self.phase.settle();
    }

    pub fn is_empty(&self) -> bool {
        !self.loading && self.error.is_none() && self.hits.is_empty()
    }
}
