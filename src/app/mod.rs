//! Application layer: the controller, its events and the actions it emits.
//!
//! # Architecture
//!
//! ```text
//! Zellij Input → Event → handle_event → AppState mutation → Actions → Plugin API
//!                                            │
//!                                            └→ compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects for the plugin runtime
//! - [`filter`]: filter text matching and highlight ranges
//! - [`handler`]: event processing and click dispatch
//! - [`lifecycle`]: pointer subscription tied to mount/unmount
//! - [`modes`]: selection, input and filter modes
//! - [`state`]: the selectable list controller

pub mod actions;
pub mod filter;
pub mod handler;
pub mod lifecycle;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use lifecycle::PointerSubscription;
pub use modes::{FilterMode, InputMode, SelectMode};
pub use state::AppState;
