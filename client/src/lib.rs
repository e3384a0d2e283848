//! AgroNexo dashboard client
//!
//! State and behaviour of the farm management dashboard: cached
//! collections of lots, animals and silos, the single open form, the
//! animal multi-select, map clicks and the weather panel. All data lives
//! in the farm backend and is reached through [`external::DataService`].

pub mod config;
pub mod controller;
pub mod error;
pub mod external;
pub mod map;
pub mod modal;
pub mod notify;
pub mod panel;
pub mod selection;
pub mod store;

pub use config::Config;
pub use controller::{Dashboard, Section};
pub use error::{ClientError, ClientResult};
pub use external::{DataService, HttpDataService, WeatherClient, WeatherProvider};
pub use modal::{FormDraft, FormMode, Modal, ModalKind};
pub use notify::{LogNotifier, Notifier};
pub use store::{Collection, CollectionStore, Mutation, RefreshPolicy, RefreshReport};
