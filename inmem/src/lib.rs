//! This crate is part of [quadset],
//! an in-memory RDF dataset with set semantics.
//!
//! It provides the deduplicating [`QuadStore`](store::QuadStore)
//! and the [`Dataset`] built on top of it.
//!
//! [quadset]: https://docs.rs/quadset/latest/quadset/

#![deny(missing_docs)]

pub mod dataset;
pub mod store;

pub use dataset::Dataset;
pub use store::QuadStore;

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
