use crate::TestContext;

pub mod data;
pub mod factory;

impl TestContext {
    pub fn airplane<'a>(&'a mut self) -> AirplaneFixtures<'a> {
        AirplaneFixtures { setup: self }
    }
}

pub struct AirplaneFixtures<'a> {
    pub setup: &'a mut TestContext,
}
