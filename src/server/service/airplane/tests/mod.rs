
use hangar_test_utils::prelude::*;

use crate::{
    model::airplane::AirplaneParams,
    server::{
        error::{airplane::AirplaneError, Error},
        service::airplane::AirplaneService,
    },
};

fn params(name: &str, description: &str) -> AirplaneParams {
    AirplaneParams {
        name: name.to_string(),
        description: description.to_string(),
    }
}
