//! REST client for the meridian console backend.
//!
//! - [`ClusterService`] / [`RouteService`]: the contracts the route
//!   editor depends on.
//! - [`ConsoleClient`]: reqwest-backed implementation of both, speaking
//!   the console's JSON API.
//! - [`ConsoleConfig`]: connection settings from the environment.

pub mod api;
pub mod config;
pub mod services;

pub use api::{ConsoleClient, ServiceError, UpdateOutcome, UPDATE_SUCCESS};
pub use config::ConsoleConfig;
pub use services::{ClusterService, RouteService};
