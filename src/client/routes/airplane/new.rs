use dioxus::prelude::*;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

use crate::{
    client::{components::Page, router::Route},
    model::airplane::AirplaneParams,
};

#[cfg(feature = "web")]
use crate::client::util::airplane::{create_airplane, CreateOutcome};

#[component]
pub fn NewAirplane() -> Element {
    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut errors = use_signal(Vec::<String>::new);
    let mut submitting = use_signal(|| false);
    let navigator = use_navigator();

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        if submitting() {
            return;
        }
        submitting.set(true);

        let params = AirplaneParams {
            name: name(),
            description: description(),
        };

        #[cfg(feature = "web")]
        spawn(async move {
            match create_airplane(&params).await {
                Ok(CreateOutcome::Created(airplane)) => {
                    navigator.push(Route::AirplaneDetail { id: airplane.id });
                }
                Ok(CreateOutcome::Invalid(form)) => {
                    name.set(form.airplane.name);
                    description.set(form.airplane.description);
                    errors.set(form.errors);
                }
                Err(err) => {
                    tracing::error!("{}", err);
                    errors.set(vec![err]);
                }
            }
            submitting.set(false);
        });

        #[cfg(not(feature = "web"))]
        let _ = (params, navigator);
    };

    rsx!(
        Title { "New Airplane | Hangar" }
        Page {
            div { class: "flex flex-col gap-4 max-w-[480px]",
                h1 { class: "text-2xl", "New Airplane" }
                if !errors.read().is_empty() {
                    div { class: "alert alert-error",
                        ul {
                            for message in errors.read().iter() {
                                li { "{message}" }
                            }
                        }
                    }
                }
                form {
                    class: "flex flex-col gap-4",
                    onsubmit: onsubmit,
                    label { class: "flex flex-col gap-1",
                        span { "Name" }
                        input {
                            class: "input input-bordered",
                            r#type: "text",
                            name: "name",
                            value: "{name}",
                            oninput: move |event| name.set(event.value()),
                        }
                    }
                    label { class: "flex flex-col gap-1",
                        span { "Description" }
                        textarea {
                            class: "textarea textarea-bordered",
                            name: "description",
                            rows: 4,
                            value: "{description}",
                            oninput: move |event| description.set(event.value()),
                        }
                    }
                    div { class: "flex gap-2",
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            "Create Airplane"
                        }
                        Link {
                            to: Route::AirplaneList {},
                            class: "btn btn-ghost",
                            "Back"
                        }
                    }
                }
            }
        }
    )
}
