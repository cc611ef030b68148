use dioxus::prelude::*;
use shared_types::Hit;
use shared_ui::{Badge, Card};

use super::result_list::{placeholder, ClassTags};
use crate::format_helpers::HitSummary;

/// Card grid of hits. Same data as the list, arranged for browsing.
#[component]
pub fn ResultGrid(hits: Vec<Hit>, loading: bool) -> Element {
    if let Some(placeholder) = placeholder(&hits, loading) {
        return placeholder;
    }

    rsx! {
        div { class: "result-grid",
            for hit in hits {
                GridCard { key: "{hit.id}", summary: HitSummary::new(&hit.id, &hit.source) }
            }
        }
    }
}

#[component]
fn GridCard(summary: HitSummary) -> Element {
    let (variant, status_label) = summary.status;

    rsx! {
        Card { class: "grid-card",
            div { class: "grid-card-top",
                p { class: "hit-mark", "{summary.mark}" }
                Badge { variant, "{status_label}" }
            }
            p { class: "hit-owner", "{summary.owner}" }
            div { class: "grid-card-dates",
                span { class: "hit-serial", "{summary.serial}" }
                if let Some(filed) = summary.filing_date.as_ref() {
                    span { class: "hit-date", "Filed {filed}" }
                }
                if let Some(registered) = summary.registration_date.as_ref() {
                    span { class: "hit-date", "Registered {registered}" }
                }
                if let Some(renewal) = summary.renewal_date.as_ref() {
                    span { class: "hit-renewal", "Renewal {renewal}" }
                }
            }
            p { class: "hit-description", "{summary.description}" }
            ClassTags { classes: summary.classes.clone(), more: summary.more_classes }
        }
    }
}
