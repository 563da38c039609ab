//! The boundary between datasets and canonicalization algorithms.
//!
//! A canonicalization algorithm maps a set of quads to a string,
//! in such a way that two isomorphic sets of quads
//! (equal up to blank node renaming) produce the same string,
//! regardless of the order in which the quads are given.
//!
//! See the `quadset_c14n` crate for an implementation of RDFC-1.0.
use crate::quad::Quad;
use std::error::Error;

/// A canonicalization algorithm.
pub trait Canonicalizer {
    /// The error that this algorithm may raise.
    type Error: Error + Send + Sync + 'static;

    /// Produce the canonical form of `quads`.
    ///
    /// `quads` must not contain duplicates;
    /// the result must not depend on their order.
    fn canonicalize<Q: Quad>(&self, quads: &[Q]) -> Result<String, Self::Error>;
}

impl<C: Canonicalizer + ?Sized> Canonicalizer for &C {
    type Error = C::Error;

    fn canonicalize<Q: Quad>(&self, quads: &[Q]) -> Result<String, Self::Error> {
        (**self).canonicalize(quads)
    }
}
