//! Domain records for ships, voyages, maintenance and fuel usage.
//!
//! These are the plain structured records the repository layer stores and the
//! service layer computes over. All of them serialize with camelCase field names,
//! matching the JSON surface of the REST API.

pub mod fuel_log;
pub mod macros;
pub mod maintenance;
pub mod ship;
pub mod voyage;

pub use fuel_log::*;
pub use maintenance::*;
pub use ship::*;
pub use voyage::*;
