use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{components::Page, router::Route},
    model::airplane::AirplaneDto,
};

#[cfg(feature = "web")]
use crate::client::util::airplane::get_airplane;

#[derive(Clone, Debug, PartialEq)]
enum Lookup {
    Loading,
    Found(AirplaneDto),
    Missing,
    Failed(String),
}

impl From<Result<Option<AirplaneDto>, String>> for Lookup {
    fn from(result: Result<Option<AirplaneDto>, String>) -> Self {
        match result {
            Ok(Some(airplane)) => Self::Found(airplane),
            Ok(None) => Self::Missing,
            Err(err) => Self::Failed(err),
        }
    }
}

#[component]
pub fn AirplaneDetail(id: i32) -> Element {
    let mut lookup = use_signal(|| Lookup::Loading);
    #[cfg(feature = "web")]
    let mut requested = use_signal(|| id);

    // Reruns whenever the route hands over a different ID
    #[cfg(feature = "web")]
    use_effect(use_reactive!(|(id,)| {
        requested.set(id);
        lookup.set(Lookup::Loading);

        spawn(async move {
            let result = get_airplane(id).await;
            if let Err(err) = &result {
                tracing::error!("{}", err);
            }

            // A response for a previous ID arriving late is dropped
            if *requested.peek() == id {
                lookup.set(Lookup::from(result));
            }
        });
    }));

    let content = match &*lookup.read() {
        Lookup::Loading => rsx! {
            div { class: "skeleton w-full h-32" }
        },
        Lookup::Found(airplane) => {
            let description = airplane.description.clone().unwrap_or_default();
            let created_at = airplane.created_at.format("%Y-%m-%d %H:%M").to_string();

            rsx! {
                h1 { class: "text-2xl", "{airplane.name}" }
                p { class: "whitespace-pre-line", "{description}" }
                p { class: "text-sm opacity-70", "Added {created_at}" }
            }
        }
        Lookup::Missing => rsx! {
            p { class: "text-xl", "Airplane not found" }
        },
        Lookup::Failed(err) => rsx! {
            div { class: "alert alert-error", "{err}" }
        },
    };

    rsx!(
        Title { "Airplane | Hangar" }
        Page {
            div { class: "flex flex-col gap-4",
                {content}
                Link {
                    to: Route::AirplaneList {},
                    class: "btn btn-ghost w-fit",
                    "Back to airplanes"
                }
            }
        }
    )
}
