use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{components::Page, router::Route},
    model::airplane::AirplaneDto,
};

#[cfg(feature = "web")]
use crate::client::util::airplane::get_airplanes;

#[component]
pub fn AirplaneList() -> Element {
    let mut airplanes = use_signal(Vec::<AirplaneDto>::new);
    let mut loaded = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_effect(move || {
        spawn(async move {
            match get_airplanes().await {
                Ok(list) => airplanes.set(list),
                Err(err) => {
                    tracing::error!("{}", err);
                    error.set(Some(err));
                }
            }
            loaded.set(true);
        });
    });

    rsx!(
        Title { "Airplanes | Hangar" }
        Page {
            div { class: "flex flex-col gap-4",
                div { class: "flex justify-between items-center",
                    h1 { class: "text-2xl", "Airplanes" }
                    Link {
                        to: Route::NewAirplane {},
                        class: "btn btn-primary",
                        "New Airplane"
                    }
                }
                if let Some(err) = error() {
                    div { class: "alert alert-error", "{err}" }
                }
                if !loaded() {
                    div { class: "skeleton w-full h-32" }
                } else if airplanes.read().is_empty() {
                    p { class: "opacity-70", "No airplanes yet." }
                } else {
                    table { class: "table table-md",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Description" }
                            }
                        }
                        tbody {
                            {airplanes.read().iter().map(|airplane| {
                                let id = airplane.id;
                                let name = airplane.name.clone();
                                let description = airplane.description.clone().unwrap_or_default();

                                rsx! {
                                    tr { key: "{id}",
                                        td {
                                            Link {
                                                to: Route::AirplaneDetail { id },
                                                class: "link",
                                                "{name}"
                                            }
                                        }
                                        td { class: "truncate max-w-[480px]", "{description}" }
                                    }
                                }
                            })}
                        }
                    }
                }
            }
        }
    )
}
