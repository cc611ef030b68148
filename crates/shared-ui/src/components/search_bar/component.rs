use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonVariant, Input};

/// Query box with a search icon and a submit button. Submits on Enter too.
#[component]
pub fn SearchBar(
    value: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    #[props(default = "Search Trademark Here eg. Mickey Mouse".to_string())] placeholder: String,
    #[props(default = "Search".to_string())] button_label: String,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "search-bar",
            div { class: "search-bar-field",
                span { class: "search-bar-icon",
                    Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                }
                Input {
                    value,
                    placeholder,
                    on_input: move |text: String| on_input.call(text),
                    on_enter: move |_: ()| on_submit.call(()),
                }
            }
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| on_submit.call(()),
                "{button_label}"
            }
        }
    }
}
