use std::collections::BTreeSet;
use std::time::Duration;

use dioxus::prelude::*;
use search_engine::{DebouncedEmitter, StatusChip, StatusToggle, STATUS_CHIPS};
use shared_types::StatusLabel;
use shared_ui::{BadgeVariant, Button, ButtonVariant, Card, CardContent, CardTitle, StatusDot};

fn dot_variant(chip: StatusChip) -> Option<BadgeVariant> {
    match chip {
        StatusChip::All => None,
        StatusChip::Label(StatusLabel::Registered) => Some(BadgeVariant::Live),
        StatusChip::Label(StatusLabel::Pending) => Some(BadgeVariant::Pending),
        StatusChip::Label(StatusLabel::Abandoned) => Some(BadgeVariant::Dead),
        StatusChip::Label(StatusLabel::Others) => Some(BadgeVariant::Neutral),
    }
}

/// Five-way status filter. Reports the active labels 250 ms after the last
/// click; an empty set means "All".
#[component]
pub fn StatusSelector(
    selected: BTreeSet<StatusLabel>,
    on_change: EventHandler<BTreeSet<StatusLabel>>,
) -> Element {
    let mut toggle = use_signal(|| StatusToggle::new(selected.clone()));
    let emitter = use_hook(|| {
        let delay = Duration::from_millis(search_engine::config().search.selector_debounce_ms);
        DebouncedEmitter::new(delay, move |labels: BTreeSet<StatusLabel>| {
            tracing::debug!(?labels, "Status selection settled");
            on_change.call(labels)
        })
        .skip_initial()
    });

    // The store changed underneath us (new query, history navigation).
    use_effect(use_reactive((&selected,), move |(selected,)| {
        if toggle.peek().selection() != &selected {
            toggle.write().sync(&selected);
        }
    }));

    {
        let emitter = emitter.clone();
        use_effect(move || {
            let selection = toggle.read().selection().clone();
            let pending = emitter.emit(selection);
            spawn(async move {
                pending.await;
            });
        });
    }

    {
        let emitter = emitter.clone();
        use_drop(move || emitter.teardown());
    }

    rsx! {
        Card { class: "status-selector",
            CardTitle { "Status" }
            CardContent { class: "status-chips",
                for chip in STATUS_CHIPS {
                    Button {
                        key: "{chip.label()}",
                        variant: ButtonVariant::Chip,
                        active: toggle.read().is_active(chip),
                        onclick: move |_| {
                            toggle.write().click(chip);
                        },
                        if let Some(variant) = dot_variant(chip) {
                            StatusDot { variant }
                        }
                        "{chip.label()}"
                    }
                }
            }
        }
    }
}
