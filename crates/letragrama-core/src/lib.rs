//! Core types for the Letragrama puzzle engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: grid [`Cell`]s,
//! board [`Border`]s, connector [`Segment`]s with the crossing predicate
//! [`segments_intersect`], and committed [`PlacedWord`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod border;
pub mod cell;
pub mod error;
pub mod geometry;
pub mod word;

pub use border::{Border, BorderSet};
pub use cell::{Cell, KING_DELTAS};
pub use error::WordError;
pub use geometry::{segments_intersect, Segment};
pub use word::{normalize_word, PlacedWord};
