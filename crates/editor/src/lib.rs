//! Headless controller for the cluster designated-routes editor.
//!
//! [`RouteEditor`] binds an event-driven view layer to the console's
//! cluster and route services:
//!
//! - loads the data centers a cluster is deployed in and the
//!   designated-route set of the selected one,
//! - stages route additions picked in the add dialog and applies them,
//! - submits the edited set as an atomic replacement.
//!
//! Outcomes surface on a [`NoticeBus`]; accepted submissions schedule a
//! cancellable redirect through a [`Navigator`]. The controller holds no
//! widget-library types, so any view technology can sit on top.

pub mod config;
pub mod controller;
pub mod navigation;
pub mod notice;

pub use config::EditorConfig;
pub use controller::{DcSelection, EditorSnapshot, RouteEditor};
pub use navigation::{Destination, Navigator};
pub use notice::{Notice, NoticeBus, NoticeLevel};
