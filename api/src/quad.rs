//! A quad expresses a single fact within a context.
//! Quads are made of a subject, a predicate and an object,
//! augmented with an optional graph name.
//!
//! They are the individual statements of an RDF dataset.
use crate::term::matcher::{GraphNameMatcher, TermMatcher};
use crate::term::{SimpleTerm, Term};
use std::fmt;

/// A graph name is an optional term, `None` denoting the default graph.
pub type GraphName<T> = Option<T>;

/// An owned quad as a tuple of an array and a graph name.
pub type Spog<T> = ([T; 3], GraphName<T>);

/// The default quad type, made of [`SimpleTerm`]s.
pub type SimpleQuad = Spog<SimpleTerm>;

/// This trait represents an abstract RDF quad,
/// and provides convenient methods for working with quads.
pub trait Quad {
    /// The type of [`Term`] contained by this quad
    type Term: Term;

    /// The subject of this quad.
    fn s(&self) -> &Self::Term;
    /// The predicate of this quad.
    fn p(&self) -> &Self::Term;
    /// The object of this quad.
    fn o(&self) -> &Self::Term;
    /// The graph name of this quad.
    ///
    /// `None` means that this quad is asserted in the default graph.
    fn g(&self) -> GraphName<&Self::Term>;

    /// The four components of this quad, borrowed.
    fn spog(&self) -> Spog<&Self::Term> {
        ([self.s(), self.p(), self.o()], self.g())
    }

    /// An owned copy of the four components of this quad.
    fn to_spog(&self) -> Spog<Self::Term> {
        (
            [self.s().clone(), self.p().clone(), self.o().clone()],
            self.g().cloned(),
        )
    }

    /// The [`QuadKey`] identifying this quad.
    fn key(&self) -> QuadKey {
        QuadKey::of(self)
    }

    /// Check whether this quad is matched by the given matchers.
    fn matched_by<S, P, O, G>(&self, sm: &S, pm: &P, om: &O, gm: &G) -> bool
    where
        S: TermMatcher<Self::Term> + ?Sized,
        P: TermMatcher<Self::Term> + ?Sized,
        O: TermMatcher<Self::Term> + ?Sized,
        G: GraphNameMatcher<Self::Term> + ?Sized,
    {
        sm.matches(self.s()) && pm.matches(self.p()) && om.matches(self.o()) && gm.matches(self.g())
    }
}

impl<T: Term> Quad for Spog<T> {
    type Term = T;
    #[inline]
    fn s(&self) -> &T {
        &self.0[0]
    }
    #[inline]
    fn p(&self) -> &T {
        &self.0[1]
    }
    #[inline]
    fn o(&self) -> &T {
        &self.0[2]
    }
    #[inline]
    fn g(&self) -> GraphName<&T> {
        self.1.as_ref()
    }
}

impl<Q: Quad + ?Sized> Quad for &Q {
    type Term = Q::Term;
    #[inline]
    fn s(&self) -> &Q::Term {
        (*self).s()
    }
    #[inline]
    fn p(&self) -> &Q::Term {
        (*self).p()
    }
    #[inline]
    fn o(&self) -> &Q::Term {
        (*self).o()
    }
    #[inline]
    fn g(&self) -> GraphName<&Q::Term> {
        (*self).g()
    }
}

/// The identity of a quad inside a dataset.
///
/// It is the concatenation of the N-Quads serializations
/// (see [`Term::write_nq`]) of the subject, predicate, object,
/// and graph name (if any) of the quad,
/// together with the offsets where the predicate, object and graph name start.
///
/// Terms are not validated, so an IRI may contain `> <` and the concatenation
/// alone could be shared by distinct quads.
/// With the offsets, each component is delimited,
/// and two quads have the same key if and only if they are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuadKey {
    text: Box<str>,
    offsets: [usize; 3],
}

impl QuadKey {
    /// Compute the key of `quad`.
    pub fn of<Q: Quad + ?Sized>(quad: &Q) -> Self {
        let mut buffer = String::new();
        let mut offsets = [0; 3];
        for (term, offset) in [quad.s(), quad.p(), quad.o()].into_iter().zip(&mut offsets) {
            term.write_nq(&mut buffer);
            *offset = buffer.len();
        }
        if let Some(g) = quad.g() {
            g.write_nq(&mut buffer);
        }
        QuadKey {
            text: buffer.into(),
            offsets,
        }
    }

    /// The concatenated N-Quads serialization of the components.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Formats the key as an N-Quads statement.
impl fmt::Display for QuadKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.", self.text)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::term::matcher::Any;

    fn quad(s: &str, p: &str, o: &str, g: Option<&str>) -> SimpleQuad {
        (
            [
                SimpleTerm::new_iri(s),
                SimpleTerm::new_iri(p),
                SimpleTerm::new_iri(o),
            ],
            g.map(SimpleTerm::new_iri),
        )
    }

    #[test]
    fn accessors() {
        let q = quad("tag:s", "tag:p", "tag:o", Some("tag:g"));
        assert_eq!(q.s(), &SimpleTerm::new_iri("tag:s"));
        assert_eq!(q.p(), &SimpleTerm::new_iri("tag:p"));
        assert_eq!(q.o(), &SimpleTerm::new_iri("tag:o"));
        assert_eq!(q.g(), Some(&SimpleTerm::new_iri("tag:g")));
        assert_eq!(q.to_spog(), q);
        assert_eq!((&q).key(), q.key());
    }

    #[test]
    fn key_is_nquads() {
        let q = quad("tag:s", "tag:p", "tag:o", Some("tag:g"));
        assert_eq!(q.key().as_str(), "<tag:s> <tag:p> <tag:o> <tag:g> ");
        assert_eq!(q.key().to_string(), "<tag:s> <tag:p> <tag:o> <tag:g> .");
        let q = quad("tag:s", "tag:p", "tag:o", None);
        assert_eq!(q.key().as_str(), "<tag:s> <tag:p> <tag:o> ");
    }

    #[test]
    fn key_identifies_quads() {
        let q1 = quad("tag:s", "tag:p", "tag:o", None);
        let q2 = quad("tag:s", "tag:p", "tag:o", None);
        let q3 = quad("tag:s", "tag:p", "tag:o", Some("tag:g"));
        assert_eq!(q1.key(), q2.key());
        assert_ne!(q1.key(), q3.key());

        let lit: SimpleQuad = (
            [
                SimpleTerm::new_iri("tag:s"),
                SimpleTerm::new_iri("tag:p"),
                SimpleTerm::new_literal("tag:o"),
            ],
            None,
        );
        assert_ne!(q1.key(), lit.key());
        let bnode: SimpleQuad = (
            [
                SimpleTerm::new_iri("tag:s"),
                SimpleTerm::new_iri("tag:p"),
                SimpleTerm::new_bnode("tag:o"),
            ],
            None,
        );
        assert_ne!(q1.key(), bnode.key());
        assert_ne!(lit.key(), bnode.key());
    }

    #[test]
    fn key_identifies_quads_with_unusual_iris() {
        // same concatenated text, different boundaries
        let q1 = quad("a", "b> <c", "d", None);
        let q2 = quad("a> <b", "c", "d", None);
        assert_eq!(q1.key().as_str(), q2.key().as_str());
        assert_ne!(q1.key(), q2.key());

        // the graph name must not merge into the object
        let in_default = quad("s", "p", "o> <g", None);
        let in_named = quad("s", "p", "o", Some("g"));
        assert_eq!(in_default.key().as_str(), in_named.key().as_str());
        assert_ne!(in_default.key(), in_named.key());

        let b1: SimpleQuad = (
            [
                SimpleTerm::new_bnode("x _:y"),
                SimpleTerm::new_iri("p"),
                SimpleTerm::new_iri("o"),
            ],
            None,
        );
        let b2: SimpleQuad = (
            [
                SimpleTerm::new_bnode("x"),
                SimpleTerm::new_bnode("y"),
                SimpleTerm::new_iri("p"),
            ],
            Some(SimpleTerm::new_iri("o")),
        );
        assert_ne!(b1.key(), b2.key());

        let tag1: SimpleQuad = (
            [
                SimpleTerm::new_iri("s"),
                SimpleTerm::new_iri("p"),
                SimpleTerm::new_lang_literal("a", "en <g>"),
            ],
            None,
        );
        let tag2: SimpleQuad = (
            [
                SimpleTerm::new_iri("s"),
                SimpleTerm::new_iri("p"),
                SimpleTerm::new_lang_literal("a", "en"),
            ],
            Some(SimpleTerm::new_iri("g")),
        );
        assert_ne!(tag1.key(), tag2.key());
    }

    #[test]
    fn matched_by() {
        let q = quad("tag:s", "tag:p", "tag:o", Some("tag:g"));
        let s = SimpleTerm::new_iri("tag:s");
        let g = SimpleTerm::new_iri("tag:g");
        let other = SimpleTerm::new_iri("tag:other");
        let wildcard: Option<&SimpleTerm> = None;

        assert!(q.matched_by(&Any, &Any, &Any, &Any));
        assert!(q.matched_by(&Some(&s), &wildcard, &wildcard, &Some(Some(&g))));
        assert!(!q.matched_by(&Some(&other), &wildcard, &wildcard, &Any));
        assert!(!q.matched_by(&Any, &Any, &Any, &Some(None::<&SimpleTerm>)));
        assert!(q.matched_by(&Any, &[other.clone(), SimpleTerm::new_iri("tag:p")], &Any, &Any));
    }
}
