//! An in-memory [RDF] dataset with set semantics.
//!
//! A [`Dataset`](inmem::Dataset) is a set of quads:
//! adding a quad twice, or removing an absent quad, has no effect.
//! Two quads are the same when their terms serialize identically,
//! regardless of which objects hold them.
//! On top of the usual mutation and traversal operations,
//! datasets support set algebra (union, intersection, difference, inclusion),
//! a canonical [N-Quads] form computed with [RDFC-1.0],
//! and asynchronous import from, and export to, streams of quads.
//!
//! This crate re-exports the crates of the workspace:
//! * [`api`] defines terms, quads, matchers and quad sources;
//! * [`c14n`] implements RDFC-1.0;
//! * [`inmem`] provides the dataset itself.
//!
//! # Getting started
//!
//! ```
//! use quadset::prelude::*;
//!
//! let iri = |suffix: &str| SimpleTerm::new_iri(format!("http://example.org/{suffix}"));
//! let g = Some(iri("g"));
//! let a: Dataset = [
//!     ([iri("s1"), iri("p1"), iri("o1")], g.clone()),
//!     ([iri("s2"), iri("p2"), iri("o2")], g.clone()),
//! ]
//! .into_iter()
//! .collect();
//! let b: Dataset = [([iri("s1"), iri("p1"), iri("o1")], g.clone())]
//!     .into_iter()
//!     .collect();
//!
//! assert!(a.contains(&b));
//! assert!(!b.contains(&a));
//! assert_eq!(a.intersection(&b), b);
//! assert_eq!(a.difference(&b).len(), 1);
//! println!("{}", a.union(&b).to_canonical()?);
//! # Ok::<(), C14nError>(())
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [N-Quads]: https://www.w3.org/TR/n-quads/
//! [RDFC-1.0]: https://www.w3.org/TR/rdf-canon/
#![deny(missing_docs)]

pub use quadset_api as api;
pub use quadset_c14n as c14n;
pub use quadset_inmem as inmem;

pub mod prelude {
    //! Re-exports of the types and traits most commonly needed.
    pub use quadset_api::prelude::*;
    pub use quadset_api::source::{channel, QuadReceiver, QuadSender};
    pub use quadset_c14n::{C14nError, Rdfc10};
    pub use quadset_inmem::{Dataset, QuadStore};
}
