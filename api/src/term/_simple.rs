use super::*;
use crate::ns::rdf;
use std::fmt;
use std::sync::Arc;

/// A straightforward implementation of [`Term`] as an enum.
///
/// Text is shared through [`Arc`],
/// so cloning a term (and hence a quad) never copies strings,
/// and datasets of [`SimpleTerm`]s can be sent across threads.
///
/// The constructors never validate their input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SimpleTerm {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(Arc<str>),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode(Arc<str>),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal),
    /// with its lexical form and datatype IRI
    LiteralDatatype(Arc<str>, Arc<str>),
    /// An RDF [language-tagged string](https://www.w3.org/TR/rdf11-concepts/#dfn-language-tagged-string),
    /// with its lexical form and language tag
    LiteralLanguage(Arc<str>, Arc<str>),
}

use SimpleTerm::*;

impl SimpleTerm {
    /// Build an IRI term.
    pub fn new_iri(iri: impl Into<Arc<str>>) -> Self {
        Iri(iri.into())
    }

    /// Build a blank node with the given label.
    pub fn new_bnode(id: impl Into<Arc<str>>) -> Self {
        BlankNode(id.into())
    }

    /// Build a simple literal (datatype `xsd:string`).
    pub fn new_literal(lex: impl Into<Arc<str>>) -> Self {
        LiteralDatatype(lex.into(), Arc::from(xsd::string))
    }

    /// Build a literal with an explicit datatype.
    pub fn new_typed_literal(lex: impl Into<Arc<str>>, datatype: impl Into<Arc<str>>) -> Self {
        LiteralDatatype(lex.into(), datatype.into())
    }

    /// Build a language-tagged string.
    pub fn new_lang_literal(lex: impl Into<Arc<str>>, tag: impl Into<Arc<str>>) -> Self {
        LiteralLanguage(lex.into(), tag.into())
    }
}

impl Term for SimpleTerm {
    fn kind(&self) -> TermKind {
        match self {
            Iri(_) => TermKind::Iri,
            BlankNode(_) => TermKind::BlankNode,
            LiteralDatatype(..) | LiteralLanguage(..) => TermKind::Literal,
        }
    }
    fn iri(&self) -> Option<&str> {
        if let Iri(iri) = self {
            Some(&**iri)
        } else {
            None
        }
    }
    fn bnode_id(&self) -> Option<&str> {
        if let BlankNode(bnid) = self {
            Some(&**bnid)
        } else {
            None
        }
    }
    fn lexical_form(&self) -> Option<&str> {
        match self {
            LiteralDatatype(lex, _) | LiteralLanguage(lex, _) => Some(&**lex),
            _ => None,
        }
    }
    fn datatype(&self) -> Option<&str> {
        match self {
            LiteralDatatype(_, dt) => Some(&**dt),
            LiteralLanguage(..) => Some(rdf::langString),
            _ => None,
        }
    }
    fn language_tag(&self) -> Option<&str> {
        if let LiteralLanguage(_, tag) = self {
            Some(&**tag)
        } else {
            None
        }
    }
}

/// Simple literal
impl From<&str> for SimpleTerm {
    fn from(value: &str) -> Self {
        SimpleTerm::new_literal(value)
    }
}

/// Formats the term in N-Quads syntax.
impl fmt::Display for SimpleTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buffer = String::new();
        self.write_nq(&mut buffer);
        f.write_str(buffer.trim_end())
    }
}
