pub mod detail;
pub mod list;
pub mod new;

pub use detail::AirplaneDetail;
pub use list::AirplaneList;
pub use new::NewAirplane;
