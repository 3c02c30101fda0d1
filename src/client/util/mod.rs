pub mod airplane;
