//! Domain models for the AgroNexo farm dashboard

mod animal;
mod expense;
mod harvest;
mod lot;
mod rainfall;
mod reproduction;
mod sale;
mod silo;
mod summary;
mod weather;

pub use animal::*;
pub use expense::*;
pub use harvest::*;
pub use lot::*;
pub use rainfall::*;
pub use reproduction::*;
pub use sale::*;
pub use silo::*;
pub use summary::*;
pub use weather::*;
