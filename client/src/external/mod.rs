//! External API integrations

pub mod api;
pub mod weather;

pub use api::{DataService, HttpDataService};
pub use weather::{WeatherClient, WeatherProvider};
