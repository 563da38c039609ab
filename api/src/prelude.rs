//! General-use types and traits from the quadset API.

pub use crate::c14n::Canonicalizer;
pub use crate::quad::{GraphName, Quad, QuadKey, SimpleQuad, Spog};
pub use crate::term::matcher::{Any, GraphNameMatcher, TermMatcher};
pub use crate::term::{SimpleTerm, Term, TermKind};
