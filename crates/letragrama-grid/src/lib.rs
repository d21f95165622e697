//! Grid topology for Letragrama boards.
//!
//! [`Grid`] is a fixed `rows × cols` rectangle with an 8-connected (king
//! move) neighbourhood and absorbing edges: cells on the rim simply have
//! fewer neighbours. It also answers the border questions the spangram rule
//! depends on.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;

pub use error::GridError;
pub use grid::Grid;
