//! User interface rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled output through composable
//! rendering components, and keeps the hit map that maps pointer positions
//! back onto what was drawn.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//!                                     │
//!                                     └→ HitMap → AppState (pointer events)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing one frame
//! - [`layout`]: clickable regions and controller bounds
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable component renderers
//! - [`helpers`]: shared rendering utilities (highlighting, truncation)
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{HitMap, HitRegion, HitTarget};
pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BadgeInfo, DisplayItem, EmptyState, FooterInfo, ListboxAttributes, MenuInfo, SearchBarInfo,
    TriggerContent, UIViewModel,
};
