pub mod prelude;

pub mod airplane;
