//! This crate is part of [quadset],
//! an in-memory RDF dataset with set semantics.
//!
//! This crate provides functions to canonicalize datasets.
//! Canonicalization is what datasets rely on for their text form
//! and for isomorphism checks.
//!
//! It currently implements the [RDFC-1.0](rdfc10) algorithm.
//!
//! [quadset]: https://docs.rs/quadset/latest/quadset/

#![deny(missing_docs)]

mod _c14n_term;
mod _permutations;

pub mod hash;
pub mod rdfc10;

pub use _c14n_term::C14nTerm;
pub use rdfc10::Rdfc10;

use thiserror::Error;

/// Canonicalization error.
#[derive(Debug, Error)]
pub enum C14nError {
    /// An IO error occurred while writing the normalized form
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The dataset was deemed too complex by the configured safeguards of the algorithm
    #[error("Toxic graph detected: {0}")]
    ToxicGraph(String),
    /// The c14n algorithm does not support this dataset
    #[error("Unsupported feature: {0}")]
    Unsupported(String),
}

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
