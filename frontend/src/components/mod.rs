pub mod error;
pub mod gate;
pub mod layout;
