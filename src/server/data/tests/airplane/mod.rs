//! Tests for AirplaneRepository.

mod create;
mod get_all;
mod get_by_id;
mod name_exists;

use crate::server::data::airplane::{AirplaneRepository, NewAirplane};

use super::*;

fn new_airplane(name: &str, description: Option<&str>) -> NewAirplane {
    NewAirplane {
        name: name.to_string(),
        description: description.map(str::to_string),
    }
}
