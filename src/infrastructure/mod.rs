//! Host filesystem access from inside the Zellij sandbox.
//!
//! Zellij mounts the host home directory at `/host`; these helpers translate
//! user-facing paths into sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
