//! I define generic traits and default implementations for *matchers*,
//! objects that can be used to match zero, one or several terms.
//!
//! For methods using matchers, see for example
//! [`Quad::matched_by`](crate::quad::Quad::matched_by).
//!
//! The two matchers used for simple quad patterns are
//! `Option<&T>` for terms and `Option<GraphName<&T>>` for graph names,
//! where `None` is a wildcard.
use super::*;
use crate::quad::GraphName;

/// Generic trait for matching [`Term`]s of type `T`.
pub trait TermMatcher<T: Term> {
    /// Check whether this matcher matches `term`.
    fn matches(&self, term: &T) -> bool;
}

/// Generic trait for matching [graph names](GraphName) whose terms are of type `T`.
pub trait GraphNameMatcher<T: Term> {
    /// Check whether this matcher matches `graph_name`.
    fn matches(&self, graph_name: GraphName<&T>) -> bool;
}

/// A universal matcher: it matches any term (resp. any graph name).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Any;

impl<T: Term> TermMatcher<T> for Any {
    fn matches(&self, _term: &T) -> bool {
        true
    }
}

impl<T: Term> GraphNameMatcher<T> for Any {
    fn matches(&self, _graph_name: GraphName<&T>) -> bool {
        true
    }
}

/// Matches the given term if any, otherwise matches every term.
impl<T: Term> TermMatcher<T> for Option<&T> {
    fn matches(&self, term: &T) -> bool {
        match self {
            Some(mine) => *mine == term,
            None => true,
        }
    }
}

/// Matches any of the terms in the array.
impl<T: Term, const N: usize> TermMatcher<T> for [T; N] {
    fn matches(&self, term: &T) -> bool {
        self.iter().any(|mine| mine == term)
    }
}

/// Matches any of the terms in the slice.
impl<T: Term> TermMatcher<T> for &[T] {
    fn matches(&self, term: &T) -> bool {
        self.iter().any(|mine| mine == term)
    }
}

/// Matches any term of the given kind.
impl<T: Term> TermMatcher<T> for TermKind {
    fn matches(&self, term: &T) -> bool {
        term.kind() == *self
    }
}

/// Matches any term for which the closure returns `true`.
impl<T, F> TermMatcher<T> for F
where
    T: Term,
    F: Fn(&T) -> bool,
{
    fn matches(&self, term: &T) -> bool {
        (self)(term)
    }
}

/// Matches the given graph name if any, otherwise matches every graph name.
///
/// NB: `Some(None)` matches only the default graph.
impl<T: Term> GraphNameMatcher<T> for Option<GraphName<&T>> {
    fn matches(&self, graph_name: GraphName<&T>) -> bool {
        match self {
            Some(mine) => *mine == graph_name,
            None => true,
        }
    }
}

/// Matches any of the graph names in the array.
impl<T: Term, const N: usize> GraphNameMatcher<T> for [GraphName<T>; N] {
    fn matches(&self, graph_name: GraphName<&T>) -> bool {
        self.iter().any(|mine| mine.as_ref() == graph_name)
    }
}

/// Matches any of the graph names in the slice.
impl<T: Term> GraphNameMatcher<T> for &[GraphName<T>] {
    fn matches(&self, graph_name: GraphName<&T>) -> bool {
        self.iter().any(|mine| mine.as_ref() == graph_name)
    }
}

/// Matches any graph name for which the closure returns `true`.
impl<T, F> GraphNameMatcher<T> for F
where
    T: Term,
    F: Fn(GraphName<&T>) -> bool,
{
    fn matches(&self, graph_name: GraphName<&T>) -> bool {
        (self)(graph_name)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn t1() -> SimpleTerm {
        SimpleTerm::new_iri("tag:t1")
    }
    fn t2() -> SimpleTerm {
        SimpleTerm::new_iri("tag:t2")
    }
    fn t3() -> SimpleTerm {
        SimpleTerm::new_bnode("t3")
    }

    #[test]
    fn any() {
        assert!(TermMatcher::matches(&Any, &t1()));
        assert!(TermMatcher::matches(&Any, &t3()));
        assert!(GraphNameMatcher::<SimpleTerm>::matches(&Any, None));
        assert!(GraphNameMatcher::matches(&Any, Some(&t1())));
    }

    #[test]
    fn option() {
        let t1 = t1();
        let wildcard: Option<&SimpleTerm> = None;
        assert!(TermMatcher::matches(&wildcard, &t1));
        assert!(TermMatcher::matches(&wildcard, &t2()));

        let some = Some(&t1);
        assert!(TermMatcher::matches(&some, &t1));
        assert!(!TermMatcher::matches(&some, &t2()));
        assert!(!TermMatcher::matches(&some, &t3()));
    }

    #[test]
    fn array_and_slice() {
        let a0: [SimpleTerm; 0] = [];
        assert!(!a0.matches(&t1()));

        let a2 = [t1(), t2()];
        assert!(a2.matches(&t1()));
        assert!(a2.matches(&t2()));
        assert!(!a2.matches(&t3()));

        let s2 = &a2[..];
        assert!(s2.matches(&t1()));
        assert!(!s2.matches(&t3()));
    }

    #[test]
    fn term_kind() {
        assert!(TermKind::Iri.matches(&t1()));
        assert!(!TermKind::BlankNode.matches(&t1()));
        assert!(TermKind::BlankNode.matches(&t3()));
    }

    #[test]
    fn closure() {
        let c = |t: &SimpleTerm| t != &t1();
        assert!(!TermMatcher::matches(&c, &t1()));
        assert!(TermMatcher::matches(&c, &t2()));
    }

    #[test]
    fn graph_name_option() {
        let g = t1();
        let wildcard: Option<GraphName<&SimpleTerm>> = None;
        assert!(GraphNameMatcher::matches(&wildcard, None));
        assert!(GraphNameMatcher::matches(&wildcard, Some(&g)));

        let default_only: Option<GraphName<&SimpleTerm>> = Some(None);
        assert!(GraphNameMatcher::matches(&default_only, None));
        assert!(!GraphNameMatcher::matches(&default_only, Some(&g)));

        let named = Some(Some(&g));
        assert!(!GraphNameMatcher::matches(&named, None));
        assert!(GraphNameMatcher::matches(&named, Some(&t1())));
        assert!(!GraphNameMatcher::matches(&named, Some(&t2())));
    }

    #[test]
    fn graph_name_array_and_closure() {
        let a = [None, Some(t1())];
        assert!(GraphNameMatcher::matches(&a, None));
        assert!(GraphNameMatcher::matches(&a, Some(&t1())));
        assert!(!GraphNameMatcher::matches(&a, Some(&t2())));

        let c = |g: GraphName<&SimpleTerm>| g.is_some();
        assert!(!GraphNameMatcher::matches(&c, None));
        assert!(GraphNameMatcher::matches(&c, Some(&t2())));
    }
}
