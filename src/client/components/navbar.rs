use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlane;
use dioxus_free_icons::Icon;

use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                Link {
                    to: Route::AirplaneList {},
                    class: "flex items-center gap-2",
                    Icon {
                        width: 24,
                        height: 24,
                        icon: FaPlane
                    }
                    p { class: "text-xl",
                        "Hangar"
                    }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                Link {
                    to: Route::NewAirplane {},
                    class: "btn btn-outline btn-sm",
                    "New Airplane"
                }
                a { href: "/api/docs",
                    class: "btn btn-ghost btn-sm",
                    "API Docs"
                }
            }
        }

        Outlet::<Route> {}
    }
}
