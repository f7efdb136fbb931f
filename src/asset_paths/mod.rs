//! String helpers for turning asset references into resolved paths.
//!
//! The resolver composes these pieces: classifying a reference, joining it onto a base,
//! collapsing backwards segments and locating the directory a plunge should move to. Each
//! helper is pure string manipulation and never touches the filesystem.

mod collapse;
mod filters;
mod join;

pub use collapse::collapse_backwards_segments;
pub use filters::{is_external_reference, should_ignore_asset_reference};
pub use join::{directory_of, join_reference};
