//! A flat, deduplicating store of quads.
//!
//! [`QuadStore`] maps the [`QuadKey`] of each quad to the quad itself,
//! in insertion order. It has no secondary index:
//! pattern matching is a linear scan.
use indexmap::map::{Entry, IntoValues, Values};
use indexmap::IndexMap;
use quadset_api::quad::{GraphName, Quad, QuadKey};
use quadset_api::term::matcher::{GraphNameMatcher, TermMatcher};

/// An insertion-ordered set of quads, keyed by their [`QuadKey`].
///
/// Adding a quad that is already present, or removing a quad that is absent,
/// leaves the store unchanged.
/// Removal preserves the relative order of the remaining quads.
#[derive(Clone, Debug)]
pub struct QuadStore<Q> {
    quads: IndexMap<QuadKey, Q>,
}

impl<Q> Default for QuadStore<Q> {
    fn default() -> Self {
        QuadStore {
            quads: IndexMap::new(),
        }
    }
}

impl<Q: Quad> QuadStore<Q> {
    /// Construct an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an empty store with room for `capacity` quads.
    pub fn with_capacity(capacity: usize) -> Self {
        QuadStore {
            quads: IndexMap::with_capacity(capacity),
        }
    }

    /// Insert `quad` unless an equal quad is already present.
    ///
    /// Return `true` iff the store changed.
    pub fn add(&mut self, quad: Q) -> bool {
        match self.quads.entry(quad.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(e) => {
                e.insert(quad);
                true
            }
        }
    }

    /// Remove the quad equal to `quad`, if any.
    ///
    /// Return `true` iff the store changed.
    pub fn remove<T: Quad + ?Sized>(&mut self, quad: &T) -> bool {
        self.quads.shift_remove(&quad.key()).is_some()
    }

    /// Whether a quad equal to `quad` is present.
    ///
    /// `quad` may be of any [`Quad`] type whose terms serialize
    /// like those of this store.
    pub fn has<T: Quad + ?Sized>(&self, quad: &T) -> bool {
        self.quads.contains_key(&quad.key())
    }

    /// The number of quads in this store.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether this store contains no quad.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Iter over all quads, in insertion order.
    pub fn iter(&self) -> Iter<'_, Q> {
        Iter(self.quads.values())
    }

    /// Iter over the quads with the given components,
    /// where `None` is a wildcard.
    ///
    /// NB: for the graph name, `Some(None)` matches only the default graph.
    pub fn matching<'s>(
        &'s self,
        s: Option<&'s Q::Term>,
        p: Option<&'s Q::Term>,
        o: Option<&'s Q::Term>,
        g: Option<GraphName<&'s Q::Term>>,
    ) -> impl Iterator<Item = &'s Q> + 's {
        self.quads_matching(s, p, o, g)
    }

    /// Iter over the quads matched by the given matchers.
    pub fn quads_matching<'s, S, P, O, G>(
        &'s self,
        sm: S,
        pm: P,
        om: O,
        gm: G,
    ) -> impl Iterator<Item = &'s Q> + 's
    where
        S: TermMatcher<Q::Term> + 's,
        P: TermMatcher<Q::Term> + 's,
        O: TermMatcher<Q::Term> + 's,
        G: GraphNameMatcher<Q::Term> + 's,
    {
        self.iter()
            .filter(move |q| q.matched_by(&sm, &pm, &om, &gm))
    }

    /// Whether `predicate` holds for at least one quad.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Q) -> bool,
    {
        self.quads.values().any(|q| predicate(q))
    }

    /// Keep only the quads for which `keep` returns `true`,
    /// in a single pass.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&Q) -> bool,
    {
        self.quads.retain(|_, q| keep(q));
    }

    /// Remove every quad matched by the given matchers.
    ///
    /// Return the number of removed quads.
    pub fn remove_matching<S, P, O, G>(&mut self, sm: S, pm: P, om: O, gm: G) -> usize
    where
        S: TermMatcher<Q::Term>,
        P: TermMatcher<Q::Term>,
        O: TermMatcher<Q::Term>,
        G: GraphNameMatcher<Q::Term>,
    {
        let before = self.len();
        self.retain(|q| !q.matched_by(&sm, &pm, &om, &gm));
        before - self.len()
    }
}

impl<Q: Quad> Extend<Q> for QuadStore<Q> {
    fn extend<I: IntoIterator<Item = Q>>(&mut self, iter: I) {
        for quad in iter {
            self.add(quad);
        }
    }
}

impl<Q: Quad> FromIterator<Q> for QuadStore<Q> {
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

impl<Q> IntoIterator for QuadStore<Q> {
    type Item = Q;
    type IntoIter = IntoIter<Q>;

    fn into_iter(self) -> IntoIter<Q> {
        IntoIter(self.quads.into_values())
    }
}

impl<'a, Q> IntoIterator for &'a QuadStore<Q> {
    type Item = &'a Q;
    type IntoIter = Iter<'a, Q>;

    fn into_iter(self) -> Iter<'a, Q> {
        Iter(self.quads.values())
    }
}

/// Borrowing iterator over the quads of a [`QuadStore`], in insertion order.
#[derive(Clone, Debug)]
pub struct Iter<'a, Q>(Values<'a, QuadKey, Q>);

impl<'a, Q> Iterator for Iter<'a, Q> {
    type Item = &'a Q;

    fn next(&mut self) -> Option<&'a Q> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<Q> ExactSizeIterator for Iter<'_, Q> {}

/// Owning iterator over the quads of a [`QuadStore`], in insertion order.
#[derive(Debug)]
pub struct IntoIter<Q>(IntoValues<QuadKey, Q>);

impl<Q> Iterator for IntoIter<Q> {
    type Item = Q;

    fn next(&mut self) -> Option<Q> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<Q> ExactSizeIterator for IntoIter<Q> {}
