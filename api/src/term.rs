//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented.
//!
//! I provide the main trait [`Term`],
//! the auxiliary type [`TermKind`],
//! and a default implementation of [`Term`]: [`SimpleTerm`].
use crate::ns::xsd;
use std::fmt::Debug;
use std::hash::Hash;

mod _simple;
pub use _simple::*;

pub mod matcher;

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
}

/// An RDF term.
///
/// This is the capability contract that any term type must fulfill
/// to be stored in a dataset.
///
/// # Implementation
///
/// The only method without a default implementation is [`kind`](Term::kind).
/// The accessors corresponding to the kind returned by [`kind`](Term::kind)
/// MUST be overridden, otherwise [`write_nq`](Term::write_nq) will produce
/// an empty IRI, blank node identifier or lexical form.
///
/// Equality and hashing MUST be consistent with [`write_nq`](Term::write_nq):
/// two terms are equal if and only if they serialize identically.
/// Datasets rely on that serialization to derive the identity of quads
/// (see [`QuadKey`](crate::quad::QuadKey)).
pub trait Term: Clone + Debug + Eq + Hash {
    /// Return the kind of RDF term that this [`Term`] represents.
    fn kind(&self) -> TermKind;

    /// If [`kind`](Term::kind) returns [`TermKind::Iri`],
    /// return this IRI.
    /// Otherwise return `None`.
    fn iri(&self) -> Option<&str> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::BlankNode`],
    /// return the locally unique label of this blank node.
    /// Otherwise return `None`.
    fn bnode_id(&self) -> Option<&str> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the lexical form of this literal.
    /// Otherwise return `None`.
    fn lexical_form(&self) -> Option<&str> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// return the datatype IRI of this literal.
    /// Otherwise return `None`.
    ///
    /// NB: language-tagged strings have the datatype `rdf:langString`.
    fn datatype(&self) -> Option<&str> {
        None
    }

    /// If [`kind`](Term::kind) returns [`TermKind::Literal`],
    /// and if this literal is a language-tagged string,
    /// return its language tag.
    /// Otherwise return `None`.
    fn language_tag(&self) -> Option<&str> {
        None
    }

    /// Return true if this [`Term`] is an IRI.
    #[inline]
    fn is_iri(&self) -> bool {
        self.kind() == TermKind::Iri
    }

    /// Return true if this [`Term`] is a blank node.
    #[inline]
    fn is_blank_node(&self) -> bool {
        self.kind() == TermKind::BlankNode
    }

    /// Return true if this [`Term`] is a literal.
    #[inline]
    fn is_literal(&self) -> bool {
        self.kind() == TermKind::Literal
    }

    /// Append the canonical N-Quads serialization of this term to `buffer`,
    /// followed by a single space.
    fn write_nq(&self, buffer: &mut String) {
        match self.kind() {
            TermKind::Iri => {
                buffer.push('<');
                buffer.push_str(self.iri().unwrap_or_default());
                buffer.push('>');
            }
            TermKind::Literal => {
                buffer.push('"');
                for c in self.lexical_form().unwrap_or_default().chars() {
                    match c {
                        '"' => buffer.push_str("\\\""),
                        '\\' => buffer.push_str("\\\\"),
                        '\n' => buffer.push_str("\\n"),
                        '\r' => buffer.push_str("\\r"),
                        '\t' => buffer.push_str("\\t"),
                        '\x08' => buffer.push_str("\\b"),
                        '\x0c' => buffer.push_str("\\f"),
                        '\x7f' => buffer.push_str("\\u007F"),
                        c if c <= '\x1f' => buffer.push_str(&format!("\\u{:04X}", c as u8)),
                        _ => buffer.push(c),
                    }
                }
                buffer.push('"');
                if let Some(tag) = self.language_tag() {
                    buffer.push('@');
                    buffer.push_str(tag);
                } else {
                    let datatype = self.datatype().unwrap_or(xsd::string);
                    if datatype != xsd::string {
                        buffer.push_str("^^<");
                        buffer.push_str(datatype);
                        buffer.push('>');
                    }
                }
            }
            TermKind::BlankNode => {
                buffer.push_str("_:");
                buffer.push_str(self.bnode_id().unwrap_or_default());
            }
        }
        buffer.push(' ');
    }
}

impl<T: Term> Term for &T {
    fn kind(&self) -> TermKind {
        (*self).kind()
    }
    fn iri(&self) -> Option<&str> {
        (*self).iri()
    }
    fn bnode_id(&self) -> Option<&str> {
        (*self).bnode_id()
    }
    fn lexical_form(&self) -> Option<&str> {
        (*self).lexical_form()
    }
    fn datatype(&self) -> Option<&str> {
        (*self).datatype()
    }
    fn language_tag(&self) -> Option<&str> {
        (*self).language_tag()
    }
    fn write_nq(&self, buffer: &mut String) {
        (*self).write_nq(buffer)
    }
}
