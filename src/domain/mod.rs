//! Domain layer for the zelect plugin.
//!
//! Plain data types with no Zellij dependency: the choices a menu offers, the
//! current selection, and the screen geometry used for hit testing.
//!
//! # Organization
//!
//! - [`choice`]: `Choice` and the ordered `ChoiceSet`
//! - [`selection`]: single or insertion-ordered multi selection keyed by id
//! - [`geometry`]: `Point` and `Rect` in pane-relative cell coordinates
//! - [`error`]: error types and result alias
//!
//! # Examples
//!
//! ```
//! use zelect::domain::{Choice, Selection};
//!
//! let mut selection = Selection::multi();
//! selection.toggle(&Choice::new("figma", "Figma"));
//! assert!(selection.contains("figma"));
//! ```

pub mod choice;
pub mod error;
pub mod geometry;
pub mod selection;

pub use choice::{Choice, ChoiceSet};
pub use error::{Result, ZelectError};
pub use geometry::{Point, Rect};
pub use selection::Selection;
