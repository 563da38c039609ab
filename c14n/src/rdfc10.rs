//! I provide the implementation of the RDFC-1.0 algorithm described at
//! <https://www.w3.org/TR/rdf-canon/>
//!
//! The main entry point is [`Rdfc10`], a [`Canonicalizer`] that datasets
//! use to compute their canonical form.
//! The free functions [`normalize`] and [`relabel`] (and their variants)
//! give access to the intermediate results of the algorithm.

use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::rc::Rc;

use quadset_api::c14n::Canonicalizer;
use quadset_api::quad::{Quad, Spog};
use quadset_api::term::Term;

use crate::_c14n_term::C14nTerm;
use crate::_permutations::try_for_each_permutation_of;
use crate::hash::{hex, HashFunction, Sha256, Sha384};
use crate::C14nError;

/// The default value of `depth_factor` in [`normalize`] and [`relabel`].
pub const DEFAULT_DEPTH_FACTOR: f32 = 1.0;

/// The default value of `permutation_limit` in [`normalize`] and [`relabel`].
pub const DEFAULT_PERMUTATION_LIMIT: usize = 6;

/// The RDFC-1.0 canonicalization algorithm,
/// parameterized by its [hash function](HashFunction)
/// and by the safeguards described in [`relabel_with`].
///
/// The canonical form is the sorted list of canonical N-Quads lines,
/// each terminated by `"\n"`.
///
/// ```
/// # use quadset_api::prelude::*;
/// # use quadset_c14n::Rdfc10;
/// let quads: Vec<SimpleQuad> = vec![(
///     [
///         SimpleTerm::new_bnode("x"),
///         SimpleTerm::new_iri("tag:p"),
///         SimpleTerm::new_literal("o"),
///     ],
///     None,
/// )];
/// let c14n = Rdfc10::new().canonicalize(&quads)?;
/// assert_eq!(c14n, "_:c14n0 <tag:p> \"o\" .\n");
/// # Ok::<(), quadset_c14n::C14nError>(())
/// ```
pub struct Rdfc10<H = Sha256> {
    depth_factor: f32,
    permutation_limit: usize,
    _hash: PhantomData<fn() -> H>,
}

impl Rdfc10 {
    /// RDFC-1.0 with [SHA-256](Sha256) and the default safeguards.
    pub fn new() -> Self {
        Self::with_hash()
    }
}

impl<H> Rdfc10<H> {
    /// RDFC-1.0 with the hash function `H` and the default safeguards.
    pub fn with_hash() -> Self {
        Rdfc10 {
            depth_factor: DEFAULT_DEPTH_FACTOR,
            permutation_limit: DEFAULT_PERMUTATION_LIMIT,
            _hash: PhantomData,
        }
    }

    /// Change the maximum recursion depth, as a factor of the number of blank nodes.
    pub fn with_depth_factor(mut self, depth_factor: f32) -> Self {
        self.depth_factor = depth_factor;
        self
    }

    /// Change the maximum number of undistinguishable blank nodes
    /// that will be permuted.
    pub fn with_permutation_limit(mut self, permutation_limit: usize) -> Self {
        self.permutation_limit = permutation_limit;
        self
    }

    /// The configured depth factor.
    pub fn depth_factor(&self) -> f32 {
        self.depth_factor
    }

    /// The configured permutation limit.
    pub fn permutation_limit(&self) -> usize {
        self.permutation_limit
    }
}

impl Default for Rdfc10 {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Clone for Rdfc10<H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for Rdfc10<H> {}

impl<H> fmt::Debug for Rdfc10<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rdfc10")
            .field("hash", &std::any::type_name::<H>())
            .field("depth_factor", &self.depth_factor)
            .field("permutation_limit", &self.permutation_limit)
            .finish()
    }
}

impl<H: HashFunction> Canonicalizer for Rdfc10<H> {
    type Error = C14nError;

    fn canonicalize<Q: Quad>(&self, quads: &[Q]) -> Result<String, C14nError> {
        let lines =
            canonical_lines::<H, Q>(quads, self.depth_factor, self.permutation_limit)?;
        Ok(lines.concat())
    }
}

/// Write into `w` a canonical N-quads representation of `quads`, where
/// + blank nodes are canonically [relabelled](relabel) with
///   - the [SHA-256](Sha256) hash function,
///   - the [`DEFAULT_DEPTH_FACTOR`],
///   - the [`DEFAULT_PERMUTATION_LIMIT`];
/// + quads are sorted in codepoint order.
///
/// `quads` must not contain duplicates.
///
/// See also [`normalize_with`].
pub fn normalize<Q: Quad, W: io::Write>(quads: &[Q], w: W) -> Result<(), C14nError> {
    normalize_with::<Sha256, Q, W>(quads, w, DEFAULT_DEPTH_FACTOR, DEFAULT_PERMUTATION_LIMIT)
}

/// Write into `w` a canonical N-quads representation of `quads`, where
/// + blank nodes are canonically [relabelled](relabel_sha384) with
///   - the [SHA-384](Sha384) hash function,
///   - the [`DEFAULT_DEPTH_FACTOR`],
///   - the [`DEFAULT_PERMUTATION_LIMIT`];
/// + quads are sorted in codepoint order.
///
/// See also [`normalize_with`].
pub fn normalize_sha384<Q: Quad, W: io::Write>(quads: &[Q], w: W) -> Result<(), C14nError> {
    normalize_with::<Sha384, Q, W>(quads, w, DEFAULT_DEPTH_FACTOR, DEFAULT_PERMUTATION_LIMIT)
}

/// Write into `w` a canonical N-quads representation of `quads`, where
/// + blank nodes are canonically [relabelled](relabel_with) with
///   - the [hash function](HashFunction) `H`,
///   - the given `depth_factor`,
///   - the given `permutation_limit`;
/// + quads are sorted in codepoint order.
///
/// See also [`normalize`].
pub fn normalize_with<H: HashFunction, Q: Quad, W: io::Write>(
    quads: &[Q],
    mut w: W,
    depth_factor: f32,
    permutation_limit: usize,
) -> Result<(), C14nError> {
    for line in canonical_lines::<H, Q>(quads, depth_factor, permutation_limit)? {
        w.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// The sorted canonical N-Quads lines of `quads`.
fn canonical_lines<H: HashFunction, Q: Quad>(
    quads: &[Q],
    depth_factor: f32,
    permutation_limit: usize,
) -> Result<Vec<String>, C14nError> {
    let (relabelled, _) = relabel_with::<H, Q>(quads, depth_factor, permutation_limit)?;
    let mut lines: Vec<String> = relabelled
        .iter()
        .map(|quad| {
            let mut line = String::new();
            for component in components(quad) {
                component.write_nq(&mut line);
            }
            line.push_str(".\n");
            line
        })
        .collect();
    // UTF-8 byte order is code point order
    lines.sort_unstable();
    Ok(lines)
}

/// Return a list of quads isomorphic to `quads`,
/// paired with a mapping from original blank node labels to canonical ones.
///
/// This calls [`relabel_with`] with
///   - the [SHA-256](Sha256) hash function,
///   - the [`DEFAULT_DEPTH_FACTOR`],
///   - the [`DEFAULT_PERMUTATION_LIMIT`].
///
/// Implements <https://www.w3.org/TR/rdf-canon/#canon-algorithm>
///
/// See also [`normalize`].
pub fn relabel<Q: Quad>(quads: &[Q]) -> Result<(C14nQuads<'_, Q::Term>, C14nIdMap), C14nError> {
    relabel_with::<Sha256, Q>(quads, DEFAULT_DEPTH_FACTOR, DEFAULT_PERMUTATION_LIMIT)
}

/// Return a list of quads isomorphic to `quads`,
/// paired with a mapping from original blank node labels to canonical ones.
///
/// This calls [`relabel_with`] with
///   - the [SHA-384](Sha384) hash function,
///   - the [`DEFAULT_DEPTH_FACTOR`],
///   - the [`DEFAULT_PERMUTATION_LIMIT`].
///
/// See also [`normalize_sha384`].
pub fn relabel_sha384<Q: Quad>(
    quads: &[Q],
) -> Result<(C14nQuads<'_, Q::Term>, C14nIdMap), C14nError> {
    relabel_with::<Sha384, Q>(quads, DEFAULT_DEPTH_FACTOR, DEFAULT_PERMUTATION_LIMIT)
}

/// Return a list of quads isomorphic to `quads`,
/// paired with a mapping from original blank node labels to canonical ones.
///
/// The generic parameter `H` determines which [hash function](HashFunction)
/// the algorithm should use internally
/// (RDFC-1.0 uses [SHA-256](Sha256) by default).
///
/// The parameters `depth_factor` and `permutation_limit`
/// are used to stop the algorithm if the computation becomes too complex,
/// in order to secure it against [dataset poisoning](https://www.w3.org/TR/rdf-canon/#dataset-poisoning).
/// The default values ([`DEFAULT_DEPTH_FACTOR`] and [`DEFAULT_PERMUTATION_LIMIT`])
/// are expected to work with any "realistic" dataset.
///
/// More precisely:
/// * the algorithm will not recurse more deeply than `depth_factor`*N,
///   where N is the total number of blank nodes in the dataset;
/// * the algorithm will not try to disambiguate more than
///   `permutation_limit` undistinguishable blank nodes
///   (blank nodes with the same immediate neighbourhood).
///
/// In both cases, [`C14nError::ToxicGraph`] is returned.
/// Predicates that are not IRIs are rejected with [`C14nError::Unsupported`].
///
/// Implements <https://www.w3.org/TR/rdf-canon/#canon-algorithm>
///
/// See also [`relabel`], [`normalize_with`].
pub fn relabel_with<H: HashFunction, Q: Quad>(
    quads: &[Q],
    depth_factor: f32,
    permutation_limit: usize,
) -> Result<(C14nQuads<'_, Q::Term>, C14nIdMap), C14nError> {
    let quads: Vec<Spog<&Q::Term>> = quads.iter().map(|q| q.spog()).collect();
    // Step 1
    let mut state = C14nState::<H, &Q::Term>::new(depth_factor, permutation_limit);
    // Step 2
    for quad in &quads {
        if !quad.p().is_iri() {
            return Err(C14nError::Unsupported(
                "RDFC-1.0 requires predicates to be IRIs".to_string(),
            ));
        }
        for component in components(quad) {
            if let Some(bnid) = component.bnode_id() {
                let mentions = state.b2q.entry(Rc::from(bnid)).or_default();
                // a quad mentioning the same blank node twice is listed once
                if !mentions.last().is_some_and(|q| std::ptr::eq(*q, quad)) {
                    mentions.push(quad);
                }
            }
        }
    }
    // Step 3
    for (bnid, mentions) in &state.b2q {
        let hash = hash_first_degree_quads::<H, _>(bnid, &mentions[..]);
        state.h2b.entry(hash).or_default().push(bnid.clone());
        state.b2h.insert(bnid.clone(), hash);
    }
    // Step 4
    // NB: BTreeMap iterates in hash order
    for (hash, bnids) in std::mem::take(&mut state.h2b) {
        debug_assert!(!bnids.is_empty());
        if bnids.len() > 1 {
            state.h2b.insert(hash, bnids);
        } else {
            state.canonical.issue(&bnids[0]);
        }
    }
    // Step 5
    for identifier_list in state.h2b.values() {
        let mut hash_path_list = vec![];
        // Step 5.2
        for i in identifier_list {
            if state.canonical.issued.contains_key(i) {
                continue;
            }
            let mut issuer = BnodeIssuer::new("b");
            issuer.issue(i);
            hash_path_list.push(state.hash_n_degree_quads(i, &issuer, 0)?);
        }
        // Step 5.3
        hash_path_list.sort_unstable_by_key(|p| p.0);
        for (_, issuer) in hash_path_list {
            for bnid in issuer.issued_order {
                state.canonical.issue(&bnid);
            }
        }
    }
    log::debug!(
        "RDFC-1.0 relabelled {} blank node(s) in {} quad(s)",
        state.canonical.issued.len(),
        quads.len()
    );
    // Step 6
    let issued = state.canonical.issued;
    let relabelled = quads
        .iter()
        .map(|&(spo, g)| {
            (
                spo.map(|t| relabel_term(t, &issued)),
                g.map(|t| relabel_term(t, &issued)),
            )
        })
        .collect();
    Ok((relabelled, issued))
}

fn relabel_term<'a, T: Term>(term: &'a T, issued: &C14nIdMap) -> C14nTerm<&'a T> {
    match term.bnode_id().and_then(|bnid| issued.get(bnid)) {
        Some(canon_id) => C14nTerm::Blank(canon_id.clone()),
        None => C14nTerm::Other(term),
    }
}

/// A list of quads where blank nodes carry their canonical labels,
/// as returned by [`relabel`] and [`relabel_with`].
pub type C14nQuads<'a, T> = Vec<Spog<C14nTerm<&'a T>>>;

/// An identifier map as returned by [`relabel`] and [`relabel_with`]
pub type C14nIdMap = BTreeMap<Rc<str>, Rc<str>>;

#[derive(Clone, Debug)]
struct C14nState<'a, H: HashFunction, T: Term> {
    b2q: BTreeMap<Rc<str>, Vec<&'a Spog<T>>>,
    h2b: BTreeMap<H::Output, Vec<Rc<str>>>,
    canonical: BnodeIssuer,
    /// memoized results of hash_first_degree_quads
    b2h: BTreeMap<Rc<str>, H::Output>,
    /// maximum recursion factor in `hash_n_degree_quads`
    depth_factor: f32,
    /// maximum number of nodes on which permutations will be computed
    permutation_limit: usize,
}

impl<H: HashFunction, T: Term> C14nState<'_, H, T> {
    fn new(depth_factor: f32, permutation_limit: usize) -> Self {
        C14nState {
            b2q: BTreeMap::new(),
            h2b: BTreeMap::new(),
            canonical: BnodeIssuer::new("c14n"),
            b2h: BTreeMap::new(),
            depth_factor,
            permutation_limit,
        }
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-related-blank-node>
    fn hash_related_bnode(
        &self,
        related: &str,
        quad: &Spog<T>,
        issuer: &BnodeIssuer,
        position: &str,
    ) -> H::Output {
        let mut input = H::initialize();
        input.update(position.as_bytes());
        if position != "g" {
            input.update(b"<");
            input.update(quad.p().iri().unwrap_or_default().as_bytes());
            input.update(b">");
        }
        if let Some(canon_id) = self.canonical.issued.get(related) {
            input.update(b"_:");
            input.update(canon_id.as_bytes());
        } else if let Some(temp_id) = issuer.issued.get(related) {
            input.update(b"_:");
            input.update(temp_id.as_bytes());
        } else if let Some(h1d) = self.b2h.get(related) {
            input.update(hex(h1d).as_bytes());
        }
        input.finalize()
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#hash-nd-quads>
    fn hash_n_degree_quads(
        &self,
        identifier: &str,
        issuer: &BnodeIssuer,
        depth: usize,
    ) -> Result<(H::Output, BnodeIssuer), C14nError> {
        if depth as f32 > self.depth_factor * self.b2q.len() as f32 {
            return Err(C14nError::ToxicGraph(format!(
                "too many recursions (limit={} per bnode)",
                self.depth_factor
            )));
        }
        // Step 1
        let mut hn = BTreeMap::<H::Output, Vec<Box<str>>>::new();
        // Steps 2 and 3
        for quad in self.b2q.get(identifier).into_iter().flatten().copied() {
            for (component, position) in components(quad).zip(["s", "p", "o", "g"]) {
                if let Some(bnid) = component.bnode_id() {
                    if bnid == identifier {
                        continue;
                    }
                    let hash = self.hash_related_bnode(bnid, quad, issuer, position);
                    hn.entry(hash).or_default().push(Box::from(bnid));
                }
            }
        }
        // Step 4
        let mut data_to_hash = H::initialize();
        // Step 5
        let mut ret_issuer: Option<BnodeIssuer> = None;
        for (related_hash, mut blank_node) in hn {
            data_to_hash.update(hex(&related_hash));
            let mut chosen_path = String::new();
            let mut chosen_issuer: Option<BnodeIssuer> = None;
            // Step 5.4
            if blank_node.len() > self.permutation_limit {
                return Err(C14nError::ToxicGraph(format!(
                    "too many permutations ({} nodes, limit set to {})",
                    blank_node.len(),
                    self.permutation_limit,
                )));
            }
            try_for_each_permutation_of(&mut blank_node, |p| -> Result<(), C14nError> {
                let mut issuer_copy = ret_issuer.as_ref().unwrap_or(issuer).clone();
                let mut path = String::new();
                let mut recursion_list = vec![];
                // Step 5.4.4
                for related in p {
                    if let Some(canon_id) = self.canonical.issued.get(&**related) {
                        path.push_str("_:");
                        path.push_str(canon_id);
                    } else {
                        let (id, new) = issuer_copy.issue(related);
                        path.push_str("_:");
                        path.push_str(id);
                        if new {
                            recursion_list.push(&**related);
                        }
                    }
                    if cannot_beat(&chosen_path, &path) {
                        return Ok(()); // skip to the next permutation
                    }
                }
                // Step 5.4.5
                for related in recursion_list {
                    let (hash, result_issuer) =
                        self.hash_n_degree_quads(related, &issuer_copy, depth + 1)?;
                    let (id, _) = issuer_copy.issue(related);
                    path.push_str("_:");
                    path.push_str(id);
                    path.push('<');
                    path.push_str(&hex(&hash));
                    path.push('>');
                    issuer_copy = result_issuer;
                    if cannot_beat(&chosen_path, &path) {
                        return Ok(()); // skip to the next permutation
                    }
                }
                // Step 5.4.6
                if chosen_path.is_empty() || path < chosen_path {
                    chosen_path = path;
                    chosen_issuer = Some(issuer_copy);
                }
                Ok(())
            })?;
            // Step 5.5
            data_to_hash.update(chosen_path.as_bytes());
            ret_issuer = chosen_issuer;
        }
        let hash = data_to_hash.finalize();
        log::trace!("hash-n-degree({identifier}, {depth})\n-> {}", hex(&hash));
        Ok((hash, ret_issuer.unwrap_or_else(|| issuer.clone())))
    }
}

#[derive(Clone, Debug)]
struct BnodeIssuer {
    prefix: &'static str,
    issued: C14nIdMap,
    // the counter of the issuer is issued_order.len()
    issued_order: Vec<Rc<str>>,
}

impl BnodeIssuer {
    fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            issued: BTreeMap::new(),
            issued_order: vec![],
        }
    }

    /// Implements <https://www.w3.org/TR/rdf-canon/#issue-identifier>
    /// modified to also return a boolean indicating whether the issued identifier
    /// was newly created (true) or if it existed before (false)
    fn issue(&mut self, bnid: &str) -> (&str, bool) {
        let mut new = false;
        let ret = self.issued.entry(Rc::from(bnid)).or_insert_with_key(|key| {
            new = true;
            let counter = self.issued_order.len();
            self.issued_order.push(key.clone());
            Rc::from(format!("{}{}", self.prefix, counter))
        });
        (&**ret, new)
    }
}

/// Implements <https://www.w3.org/TR/rdf-canon/#hash-1d-quads>
/// with the difference that the C14n state is not passed;
/// instead, the quad list corresponding to bnid is passed directly
fn hash_first_degree_quads<H: HashFunction, T: Term>(
    bnid: &str,
    quads: &[&Spog<T>],
) -> H::Output {
    let mut nquads: Vec<_> = quads
        .iter()
        .map(|q| {
            let mut line = String::new();
            for component in components(q) {
                nq_for_hash(component, &mut line, bnid);
            }
            line.push_str(".\n");
            line
        })
        .collect();
    nquads.sort_unstable();
    let mut hasher = H::initialize();
    for line in nquads {
        hasher.update(&line);
    }
    let ret = hasher.finalize();
    log::trace!("hash-first-degree({bnid})\n-> {}", hex(&ret));
    ret
}

fn nq_for_hash<T: Term>(term: &T, buffer: &mut String, ref_bnid: &str) {
    match term.bnode_id() {
        Some(bnid) if bnid == ref_bnid => buffer.push_str("_:a "),
        Some(_) => buffer.push_str("_:z "),
        None => term.write_nq(buffer),
    }
}

/// Whether `path` (or any extension of it) can no longer be smaller than `chosen_path`.
fn cannot_beat(chosen_path: &str, path: &str) -> bool {
    !chosen_path.is_empty() && path.len() >= chosen_path.len() && path > chosen_path
}

/// Iter over the subject, predicate, object and (if any) graph name of a quad.
fn components<T>(quad: &Spog<T>) -> impl Iterator<Item = &T> {
    quad.0.iter().chain(quad.1.as_ref())
}

#[cfg(test)]
mod test {
    use super::*;
    use quadset_api::quad::SimpleQuad;
    use quadset_api::term::SimpleTerm;

    #[test]
    fn example2() {
        crate::test_setup();

        let dataset = ez_quads(&[
            "<http://example.com/#p> <http://example.com/#q> _:e0 .",
            "<http://example.com/#p> <http://example.com/#r> _:e1 .",
            "_:e0 <http://example.com/#s> <http://example.com/#u> .",
            "_:e1 <http://example.com/#t> <http://example.com/#u> .",
        ]);
        let exp = r"<http://example.com/#p> <http://example.com/#q> _:c14n0 .
<http://example.com/#p> <http://example.com/#r> _:c14n1 .
_:c14n0 <http://example.com/#s> <http://example.com/#u> .
_:c14n1 <http://example.com/#t> <http://example.com/#u> .
";
        let got = c14n_nquads(&dataset).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn example3() {
        crate::test_setup();

        let dataset = ez_quads(&[
            "<http://example.com/#p> <http://example.com/#q> _:e0 .",
            "<http://example.com/#p> <http://example.com/#q> _:e1 .",
            "_:e0 <http://example.com/#p> _:e2 .",
            "_:e1 <http://example.com/#p> _:e3 .",
            "_:e2 <http://example.com/#r> _:e3 .",
        ]);
        let exp = r"<http://example.com/#p> <http://example.com/#q> _:c14n2 .
<http://example.com/#p> <http://example.com/#q> _:c14n3 .
_:c14n0 <http://example.com/#r> _:c14n1 .
_:c14n2 <http://example.com/#p> _:c14n1 .
_:c14n3 <http://example.com/#p> _:c14n0 .
";
        let got = c14n_nquads(&dataset).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn cycle5() {
        crate::test_setup();

        let dataset = ez_quads(&CYCLE5);
        let exp = r"_:c14n0 <http://example.com/#p> _:c14n4 .
_:c14n1 <http://example.com/#p> _:c14n0 .
_:c14n2 <http://example.com/#p> _:c14n1 .
_:c14n3 <http://example.com/#p> _:c14n2 .
_:c14n4 <http://example.com/#p> _:c14n3 .
";
        let got = c14n_nquads(&dataset).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn cycle5_toxic() {
        crate::test_setup();

        let dataset = ez_quads(&CYCLE5);
        let mut output = Vec::<u8>::new();
        // set depth_factor too low for this graph
        let res =
            normalize_with::<Sha256, _, _>(&dataset, &mut output, 0.5, 2 * DEFAULT_PERMUTATION_LIMIT);
        assert!(matches!(res, Err(C14nError::ToxicGraph(_))));
    }

    #[test]
    fn clique5() {
        crate::test_setup();

        let dataset = ez_quads(&clique5_lines());
        let mut exp = String::new();
        for i in 0..5 {
            for j in (0..5).filter(|j| *j != i) {
                exp.push_str(&format!(
                    "_:c14n{i} <http://example.com/#p> _:c14n{j} .\n"
                ));
            }
        }
        let got = c14n_nquads(&dataset).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn clique5_toxic() {
        crate::test_setup();

        let dataset = ez_quads(&clique5_lines());
        // set permutation limit too low for this graph
        let rdfc10 = Rdfc10::new()
            .with_depth_factor(2.0 * DEFAULT_DEPTH_FACTOR)
            .with_permutation_limit(3);
        let res = rdfc10.canonicalize(&dataset);
        assert!(matches!(res, Err(C14nError::ToxicGraph(_))));
    }

    #[test]
    fn cycle2plus3() {
        crate::test_setup();

        let dataset = ez_quads(&[
            "_:e0 <http://example.com/#p> _:e1 .",
            "_:e1 <http://example.com/#p> _:e0 .",
            "_:e2 <http://example.com/#p> _:e3 .",
            "_:e3 <http://example.com/#p> _:e4 .",
            "_:e4 <http://example.com/#p> _:e2 .",
        ]);
        let exp = r"_:c14n0 <http://example.com/#p> _:c14n1 .
_:c14n1 <http://example.com/#p> _:c14n0 .
_:c14n2 <http://example.com/#p> _:c14n4 .
_:c14n3 <http://example.com/#p> _:c14n2 .
_:c14n4 <http://example.com/#p> _:c14n3 .
";
        let got = c14n_nquads(&dataset).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn tricky_order() {
        crate::test_setup();

        let dataset = ez_quads(&[
            "<tag:a> <tag:p> _:a .",
            "<tag:a> <tag:p> <tag:a> .",
            "<tag:a> <tag:p> 'a' .",
            "<tag:a> <tag:p> 'a!' .",
            "<tag:a9> <tag:p> 'a!' .",
        ]);
        let exp = r#"<tag:a9> <tag:p> "a!" .
<tag:a> <tag:p> "a!" .
<tag:a> <tag:p> "a" .
<tag:a> <tag:p> <tag:a> .
<tag:a> <tag:p> _:c14n0 .
"#;
        let got = c14n_nquads(&dataset).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn example2_sha384() {
        crate::test_setup();

        let dataset = ez_quads(&[
            "<http://example.com/#p> <http://example.com/#q> _:e0 .",
            "<http://example.com/#p> <http://example.com/#r> _:e1 .",
            "_:e0 <http://example.com/#s> <http://example.com/#u> .",
            "_:e1 <http://example.com/#t> <http://example.com/#u> .",
        ]);
        let exp = r"<http://example.com/#p> <http://example.com/#q> _:c14n1 .
<http://example.com/#p> <http://example.com/#r> _:c14n0 .
_:c14n0 <http://example.com/#t> <http://example.com/#u> .
_:c14n1 <http://example.com/#s> <http://example.com/#u> .
";
        let mut got = Vec::<u8>::new();
        normalize_sha384(&dataset, &mut got).unwrap();
        let got = String::from_utf8(got).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn named_graphs_and_literals() {
        crate::test_setup();

        let dataset = ez_quads(&[
            "_:x <tag:p> 'chat'@fr <tag:g> .",
            "_:x <tag:p> 42 .",
            "<tag:s> <tag:p> 'plain' <tag:g> .",
        ]);
        let exp = r#"<tag:s> <tag:p> "plain" <tag:g> .
_:c14n0 <tag:p> "42"^^<http://www.w3.org/2001/XMLSchema#integer> .
_:c14n0 <tag:p> "chat"@fr <tag:g> .
"#;
        let got = c14n_nquads(&dataset).unwrap();
        println!(">>>> GOT\n{got}>>>> EXPECTED\n{exp}<<<<");
        assert!(got == exp);
    }

    #[test]
    fn independent_of_order_and_labels() {
        crate::test_setup();

        let dataset = ez_quads(&[
            "<http://example.com/#p> <http://example.com/#q> _:e0 .",
            "<http://example.com/#p> <http://example.com/#q> _:e1 .",
            "_:e0 <http://example.com/#p> _:e2 .",
            "_:e1 <http://example.com/#p> _:e3 .",
            "_:e2 <http://example.com/#r> _:e3 .",
        ]);
        let renamed = ez_quads(&[
            "_:y <http://example.com/#r> _:x .",
            "_:w <http://example.com/#p> _:x .",
            "_:v <http://example.com/#p> _:y .",
            "<http://example.com/#p> <http://example.com/#q> _:w .",
            "<http://example.com/#p> <http://example.com/#q> _:v .",
        ]);
        let mut reversed = dataset.clone();
        reversed.reverse();
        let got = c14n_nquads(&dataset).unwrap();
        assert_eq!(c14n_nquads(&reversed).unwrap(), got);
        assert_eq!(c14n_nquads(&renamed).unwrap(), got);
    }

    #[test]
    fn same_bnode_twice_in_a_quad() {
        crate::test_setup();

        let dataset = ez_quads(&["_:a <tag:p> _:a .", "_:a <tag:q> _:b ."]);
        let renamed = ez_quads(&["_:z <tag:q> _:y .", "_:z <tag:p> _:z ."]);
        let got = c14n_nquads(&dataset).unwrap();
        assert_eq!(c14n_nquads(&renamed).unwrap(), got);
        let lines: Vec<_> = got.lines().collect();
        assert_eq!(lines.len(), 2);
        let subject = lines[0].split(' ').next().unwrap();
        assert_eq!(lines[0], format!("{subject} <tag:p> {subject} ."));
        assert!(lines[1].starts_with(subject));
    }

    #[test]
    fn relabel_map() {
        crate::test_setup();

        let dataset = ez_quads(&["_:e0 <tag:p> <tag:o> .", "<tag:s> <tag:p> _:e1 ."]);
        let (quads, map) = relabel(&dataset).unwrap();
        assert_eq!(quads.len(), 2);
        assert_eq!(map.len(), 2);
        let mut canon: Vec<&str> = map.values().map(|v| &**v).collect();
        canon.sort();
        assert_eq!(canon, vec!["c14n0", "c14n1"]);
        for (spo, _) in &quads {
            for t in spo.iter().filter(|t| t.is_blank_node()) {
                assert!(matches!(t, C14nTerm::Blank(_)));
            }
        }
    }

    #[test]
    fn empty_dataset() {
        let dataset: Vec<SimpleQuad> = vec![];
        assert_eq!(c14n_nquads(&dataset).unwrap(), "");
    }

    #[test]
    fn literal_predicate_is_unsupported() {
        let dataset: Vec<SimpleQuad> = vec![(
            [
                SimpleTerm::new_iri("tag:s"),
                SimpleTerm::new_literal("p"),
                SimpleTerm::new_iri("tag:o"),
            ],
            None,
        )];
        assert!(matches!(
            c14n_nquads(&dataset),
            Err(C14nError::Unsupported(_))
        ));
    }

    const CYCLE5: [&str; 5] = [
        "_:e0 <http://example.com/#p> _:e1 .",
        "_:e1 <http://example.com/#p> _:e2 .",
        "_:e2 <http://example.com/#p> _:e3 .",
        "_:e3 <http://example.com/#p> _:e4 .",
        "_:e4 <http://example.com/#p> _:e0 .",
    ];

    fn clique5_lines() -> Vec<String> {
        let mut lines = vec![];
        for i in 0..5 {
            for j in (0..5).filter(|j| *j != i) {
                lines.push(format!("_:e{i} <http://example.com/#p> _:e{j} ."));
            }
        }
        lines
    }

    fn c14n_nquads(quads: &[SimpleQuad]) -> Result<String, C14nError> {
        Rdfc10::new().canonicalize(quads)
    }

    /// Simplistic Quad parser, useful for writing test cases.
    fn ez_quads<S: AsRef<str>>(lines: &[S]) -> Vec<SimpleQuad> {
        lines.iter().map(|line| ez_quad(line.as_ref())).collect()
    }

    /// Simplistic Quad parser, useful for writing test cases.
    /// The syntax is a subset of N-Quads,
    /// where spaces are not allowed in literals, and a space is required before the ending '.'.
    fn ez_quad(txt: &str) -> SimpleQuad {
        let mut tokens: Vec<_> = txt.split(' ').collect();
        assert!(tokens.len() == 4 || tokens.len() == 5);
        assert!(tokens.pop().unwrap() == ".");
        let g = if tokens.len() == 4 {
            tokens.pop().map(ez_term)
        } else {
            None
        };
        let o = ez_term(tokens.pop().unwrap());
        let p = ez_term(tokens.pop().unwrap());
        let s = ez_term(tokens.pop().unwrap());
        ([s, p, o], g)
    }

    /// Simplistic Term parser, useful for writing test cases.
    fn ez_term(txt: &str) -> SimpleTerm {
        match txt.as_bytes() {
            [b'<', .., b'>'] => SimpleTerm::new_iri(&txt[1..txt.len() - 1]),
            [b':', ..] => SimpleTerm::new_iri(format!("tag:{}", &txt[1..])),
            [b'_', b':', ..] => SimpleTerm::new_bnode(&txt[2..]),
            [b'\'', .., b'\''] => SimpleTerm::new_literal(&txt[1..txt.len() - 1]),
            [b'\'', .., b'\'', b'@', _, _] => {
                SimpleTerm::new_lang_literal(&txt[1..txt.len() - 4], &txt[txt.len() - 2..])
            }
            [c, ..] if c.is_ascii_digit() => SimpleTerm::new_typed_literal(
                txt,
                "http://www.w3.org/2001/XMLSchema#integer",
            ),
            _ => panic!("ez_term can not parse this"),
        }
    }
}
