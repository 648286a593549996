//! Domain types and pure edit logic for the meridian route console.
//!
//! Everything here is I/O-free:
//!
//! - [`models`]: the console entities the editor works with
//!   ([`DataCenter`], [`Route`]).
//! - [`routes`]: the add-dialog lookup table and designated-set edits.
//! - [`staging`]: the add-dialog staging list and its resolution.
//!
//! Service clients and the stateful editor build on top of this crate.

pub mod models;
pub mod routes;
pub mod staging;
pub mod types;

pub use models::{DataCenter, Route};
pub use routes::RouteTable;
pub use staging::{StagedResolution, StagedRoute};
