//! An in-memory RDF dataset with set semantics.
//!
//! A [`Dataset`] behaves as a mathematical set of quads:
//! membership is decided by value, never by identity.
//! On top of the usual set operations
//! ([`add`](Dataset::add), [`delete`](Dataset::delete), [`has`](Dataset::has)),
//! it provides
//! * set algebra: [`union`](Dataset::union), [`intersection`](Dataset::intersection),
//!   [`difference`](Dataset::difference), [`contains`](Dataset::contains),
//!   [`equals`](Dataset::equals);
//! * functional traversal: [`filter`](Dataset::filter), [`map`](Dataset::map),
//!   [`reduce`](Dataset::reduce), [`every`](Dataset::every), [`some`](Dataset::some);
//! * a canonical text form: [`to_canonical`](Dataset::to_canonical),
//!   also available through [`Display`](fmt::Display);
//! * asynchronous streaming: [`import`](Dataset::import),
//!   [`to_stream`](Dataset::to_stream), [`export`](Dataset::export).
//!
//! ```
//! # use quadset_api::prelude::*;
//! # use quadset_inmem::Dataset;
//! let s = SimpleTerm::new_iri("http://example.org/s");
//! let p = SimpleTerm::new_iri("http://example.org/p");
//! let a: Dataset = Dataset::from_quads([
//!     ([s.clone(), p.clone(), SimpleTerm::new_literal("1")], None),
//!     ([s.clone(), p.clone(), SimpleTerm::new_literal("2")], None),
//! ]);
//! let b: Dataset = Dataset::from_quads([([s.clone(), p.clone(), SimpleTerm::new_literal("1")], None)]);
//! assert!(a.contains(&b));
//! assert_eq!(a.difference(&b).len(), 1);
//! assert_eq!(a.intersection(&b), b);
//! ```
use std::fmt;

use futures_util::stream::{self, Stream, StreamExt};
use quadset_api::c14n::Canonicalizer;
use quadset_api::quad::{GraphName, Quad, SimpleQuad};
use quadset_api::source::QuadSender;
use quadset_api::term::matcher::{GraphNameMatcher, TermMatcher};
use quadset_c14n::{C14nError, Rdfc10};

use crate::store::{IntoIter, Iter, QuadStore};

/// An in-memory set of quads.
///
/// See the [module documentation](self).
#[derive(Clone, Debug)]
pub struct Dataset<Q = SimpleQuad> {
    store: QuadStore<Q>,
}

impl<Q> Default for Dataset<Q> {
    fn default() -> Self {
        Dataset {
            store: QuadStore::default(),
        }
    }
}

impl<Q: Quad> Dataset<Q> {
    /// Construct an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a dataset from the given quads, ignoring duplicates.
    pub fn from_quads<I: IntoIterator<Item = Q>>(quads: I) -> Self {
        let mut dataset = Self::new();
        dataset.add_all(quads);
        dataset
    }

    /// Insert `quad` unless an equal quad is already present.
    ///
    /// Return `true` iff the dataset changed.
    pub fn add(&mut self, quad: Q) -> bool {
        self.store.add(quad)
    }

    /// Remove the quad equal to `quad`, if any.
    ///
    /// Return `true` iff the dataset changed.
    pub fn delete<T: Quad + ?Sized>(&mut self, quad: &T) -> bool {
        self.store.remove(quad)
    }

    /// Whether a quad equal to `quad` belongs to this dataset.
    pub fn has<T: Quad + ?Sized>(&self, quad: &T) -> bool {
        self.store.has(quad)
    }

    /// The number of quads in this dataset.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether this dataset contains no quad.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iter over all quads, in insertion order.
    pub fn quads(&self) -> Iter<'_, Q> {
        self.store.iter()
    }

    /// Alias of [`quads`](Dataset::quads).
    pub fn iter(&self) -> Iter<'_, Q> {
        self.store.iter()
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
        self.store.matching(s, p, o, g)
    }

    /// Iter over the quads matched by the given [matchers](quadset_api::term::matcher).
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
        self.store.quads_matching(sm, pm, om, gm)
    }

    /// Insert all the given quads, ignoring those already present.
    pub fn add_all<I: IntoIterator<Item = Q>>(&mut self, quads: I) -> &mut Self {
        self.store.extend(quads);
        self
    }

    /// Remove every quad with the given components,
    /// with the same wildcard semantics as [`matching`](Dataset::matching).
    pub fn delete_matches(
        &mut self,
        s: Option<&Q::Term>,
        p: Option<&Q::Term>,
        o: Option<&Q::Term>,
        g: Option<GraphName<&Q::Term>>,
    ) -> &mut Self {
        let removed = self.store.remove_matching(s, p, o, g);
        log::trace!("delete_matches removed {removed} quad(s)");
        self
    }

    /// Remove every quad matched by the given [matchers](quadset_api::term::matcher).
    ///
    /// Return the number of removed quads.
    pub fn remove_matching<S, P, O, G>(&mut self, sm: S, pm: P, om: O, gm: G) -> usize
    where
        S: TermMatcher<Q::Term>,
        P: TermMatcher<Q::Term>,
        O: TermMatcher<Q::Term>,
        G: GraphNameMatcher<Q::Term>,
    {
        self.store.remove_matching(sm, pm, om, gm)
    }

    /// Whether `predicate` holds for every quad.
    ///
    /// Stops at the first quad for which it does not.
    pub fn every<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Q, &Self) -> bool,
    {
        self.iter().all(|q| predicate(q, self))
    }

    /// Whether `predicate` holds for at least one quad.
    ///
    /// Stops at the first quad for which it does.
    pub fn some<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&Q, &Self) -> bool,
    {
        self.store.some(|q| predicate(q, self))
    }

    /// Call `f` on every quad, in iteration order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Q, &Self),
    {
        for q in self.iter() {
            f(q, self);
        }
    }

    /// Fold all quads into an accumulator, from left to right in iteration order.
    pub fn reduce<A, F>(&self, f: F, initial: A) -> A
    where
        F: FnMut(A, &Q) -> A,
    {
        self.iter().fold(initial, f)
    }

    /// A new dataset containing the images of all quads by `f`.
    ///
    /// If `f` maps several quads to equal quads, they collapse into one.
    pub fn map<'a, R, F>(&'a self, mut f: F) -> Dataset<R>
    where
        R: Quad,
        F: FnMut(&'a Q, &'a Self) -> R,
    {
        self.iter().map(|q| f(q, self)).collect()
    }

    /// The canonical form of this dataset,
    /// computed by [RDFC-1.0](quadset_c14n::rdfc10) with its default parameters.
    ///
    /// Two datasets that are equal up to blank node renaming
    /// have the same canonical form,
    /// whatever the order in which their quads were inserted.
    pub fn to_canonical(&self) -> Result<String, C14nError> {
        self.to_canonical_with(&Rdfc10::new())
    }

    /// The canonical form of this dataset, computed by `c14n`.
    pub fn to_canonical_with<C: Canonicalizer>(&self, c14n: &C) -> Result<String, C::Error> {
        let quads: Vec<&Q> = self.iter().collect();
        c14n.canonicalize(&quads)
    }

    /// Whether this dataset is equal to `other` up to blank node renaming.
    pub fn is_isomorphic(&self, other: &Self) -> Result<bool, C14nError> {
        if self.len() != other.len() {
            return Ok(false);
        }
        Ok(self.to_canonical()? == other.to_canonical()?)
    }

    /// Insert all the quads produced by `source`,
    /// with the same semantics as [`add_all`](Dataset::add_all).
    ///
    /// If `source` yields an error, the import stops and that error is returned.
    /// The quads received before the error are kept in this dataset.
    pub async fn import<S, E>(&mut self, source: S) -> Result<&mut Self, E>
    where
        S: Stream<Item = Result<Q, E>>,
    {
        futures_util::pin_mut!(source);
        let mut received = 0_usize;
        let mut added = 0_usize;
        while let Some(item) = source.next().await {
            match item {
                Ok(quad) => {
                    received += 1;
                    if self.add(quad) {
                        added += 1;
                    }
                }
                Err(error) => {
                    log::debug!(
                        "import aborted by source error after {received} quad(s), {added} added"
                    );
                    return Err(error);
                }
            }
        }
        log::debug!("import completed: {received} quad(s) received, {added} added");
        Ok(self)
    }
}

impl<Q: Quad + Clone> Dataset<Q> {
    /// The quads of this dataset, in iteration order.
    pub fn to_vec(&self) -> Vec<Q> {
        self.iter().cloned().collect()
    }

    /// A new dataset containing the quads for which `predicate` holds.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&Q, &Self) -> bool,
    {
        self.iter().filter(|q| predicate(q, self)).cloned().collect()
    }

    /// A new dataset containing the quads of `self`, then those of `other`.
    pub fn union(&self, other: &Self) -> Self {
        let mut ret = self.clone();
        ret.add_all(other.iter().cloned());
        ret
    }

    /// A new dataset containing the quads present in both `self` and `other`.
    ///
    /// The smaller dataset is scanned,
    /// and each of its quads is looked up in the larger one.
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        smaller.filter(|q, _| larger.has(q))
    }

    /// A new dataset containing the quads of `self` that are not in `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.filter(|q, _| !other.has(q))
    }

    /// Whether every quad of `other` belongs to `self`.
    pub fn contains(&self, other: &Self) -> bool {
        if other.len() > self.len() {
            return false;
        }
        other.intersection(self).len() == other.len()
    }

    /// Whether `self` and `other` contain the same quads.
    ///
    /// This checks, in order, that
    /// 1. both datasets have the same size,
    /// 2. their intersection has that size,
    /// 3. their union has that size.
    ///
    /// The last check can only fail if the membership test is inconsistent,
    /// which is reported as a warning.
    pub fn equals(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        if other.intersection(self).len() != self.len() {
            return false;
        }
        let union_len = other.union(self).len();
        if union_len != self.len() {
            log::warn!(
                "inconsistent membership: intersection has {} quad(s) but union has {}",
                self.len(),
                union_len
            );
            return false;
        }
        true
    }

    /// A stream yielding a snapshot of the quads of this dataset, then ending.
    pub fn to_stream(&self) -> impl Stream<Item = Q> {
        stream::iter(self.to_vec())
    }

    /// Push every quad of this dataset into `sender`, then end the stream.
    ///
    /// If the receiving half is dropped, the export stops early.
    pub async fn export<E>(&self, sender: QuadSender<Q, E>) {
        let mut sent = 0_usize;
        for quad in self.iter() {
            if sender.push(quad.clone()).await.is_err() {
                log::debug!("export stopped after {sent} quad(s): receiver dropped");
                return;
            }
            sent += 1;
        }
        sender.end();
        log::debug!("export completed: {sent} quad(s) sent");
    }
}

/// Formats the dataset in its [canonical form](Dataset::to_canonical).
///
/// If canonicalization fails, the error is logged and [`fmt::Error`] is returned
/// (so [`to_string`](ToString::to_string) panics);
/// use [`to_canonical`](Dataset::to_canonical) to handle such datasets.
impl<Q: Quad> fmt::Display for Dataset<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_canonical() {
            Ok(txt) => f.write_str(&txt),
            Err(err) => {
                log::error!("could not canonicalize dataset: {err}");
                Err(fmt::Error)
            }
        }
    }
}

impl<Q: Quad + Clone> PartialEq for Dataset<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<Q: Quad + Clone> Eq for Dataset<Q> {}

impl<Q: Quad> FromIterator<Q> for Dataset<Q> {
    fn from_iter<I: IntoIterator<Item = Q>>(iter: I) -> Self {
        Self::from_quads(iter)
    }
}

impl<Q: Quad> Extend<Q> for Dataset<Q> {
    fn extend<I: IntoIterator<Item = Q>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<Q: Quad> From<Vec<Q>> for Dataset<Q> {
    fn from(quads: Vec<Q>) -> Self {
        Self::from_quads(quads)
    }
}

impl<Q> IntoIterator for Dataset<Q> {
    type Item = Q;
    type IntoIter = IntoIter<Q>;

    fn into_iter(self) -> IntoIter<Q> {
        self.store.into_iter()
    }
}

impl<'a, Q> IntoIterator for &'a Dataset<Q> {
    type Item = &'a Q;
    type IntoIter = Iter<'a, Q>;

    fn into_iter(self) -> Iter<'a, Q> {
        (&self.store).into_iter()
    }
}
