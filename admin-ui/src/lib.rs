pub mod api;
pub mod components;

pub use api::*;
pub use components::*;
