pub mod airplane;
pub mod not_found;

pub use not_found::NotFound;
