//! This crate is part of [quadset],
//! an in-memory [RDF] dataset with set semantics.
//!
//! It defines the abstractions that the other crates of the workspace rely on:
//! [terms](term), [quads](quad), [matchers](term::matcher),
//! the [canonicalization boundary](c14n) and asynchronous [quad sources](source).
//!
//! [quadset]: https://docs.rs/quadset/latest/quadset/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

pub mod c14n;
pub mod ns;
pub mod prelude;
pub mod quad;
pub mod source;
pub mod term;
