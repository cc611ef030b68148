use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFilter;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant};

use crate::state::use_search;

/// Toolbar above the results. On narrow screens the filter button shows and
/// hides the filter sidebar.
#[component]
pub fn FilterHeader() -> Element {
    let mut open = use_search().filter_panel_open;
    let is_open = *open.read();

    rsx! {
        div { class: "filter-header",
            Button {
                class: "filter-header-toggle",
                variant: ButtonVariant::Outline,
                active: is_open,
                onclick: move |_| {
                    let next = !*open.peek();
                    open.set(next);
                },
                Icon { icon: LdFilter, width: 16, height: 16 }
                "Filter"
            }
        }
    }
}
