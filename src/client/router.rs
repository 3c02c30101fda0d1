use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        airplane::{AirplaneDetail, AirplaneList, NewAirplane},
        NotFound,
    },
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::AirplaneList {})]

    #[layout(Navbar)]

    #[route("/airplanes")]
    AirplaneList {},

    #[route("/airplanes/new")]
    NewAirplane {},

    #[route("/airplanes/:id")]
    AirplaneDetail { id: i32 },

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
