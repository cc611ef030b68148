use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLayoutGrid, LdList};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardTitle};

use crate::state::{use_search, ResultLayout};
use crate::use_feature_flags;

/// List/Grid switch. Hidden when the grid layout is turned off in config.
#[component]
pub fn DisplayToggle() -> Element {
    let flags = use_feature_flags();
    let mut layout = use_search().layout;

    if !flags.grid_view {
        return rsx! {};
    }

    let current = *layout.read();

    rsx! {
        Card { class: "display-toggle",
            CardTitle { "Display" }
            CardContent { class: "display-toggle-options",
                Button {
                    variant: ButtonVariant::Ghost,
                    active: current == ResultLayout::Grid,
                    onclick: move |_| layout.set(ResultLayout::Grid),
                    Icon { icon: LdLayoutGrid, width: 16, height: 16 }
                    "{ResultLayout::Grid.label()}"
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    active: current == ResultLayout::List,
                    onclick: move |_| layout.set(ResultLayout::List),
                    Icon { icon: LdList, width: 16, height: 16 }
                    "{ResultLayout::List.label()}"
                }
            }
        }
    }
}
