pub use super::airplane::Entity as Airplane;
