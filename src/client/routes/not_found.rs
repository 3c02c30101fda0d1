use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Hangar" }
        Page { class: "flex flex-col items-center",
            div { class: "flex flex-col items-center gap-4 mt-16",
                p { class: "text-2xl",
                    "Page not found"
                }
                p { class: "text-sm opacity-70",
                    "/{path}"
                }
                Link {
                    to: Route::AirplaneList {},
                    class: "btn btn-primary",
                    "Back to airplanes"
                }
            }
        }
    )
}
