//! Domain models shared between the data, service and controller layers.

pub mod api;
pub mod request;
pub mod seat;
pub mod settings;
pub mod user;
