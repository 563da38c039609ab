use quadset_api::term::{Term, TermKind};
use std::rc::Rc;

/// A term of a relabelled quad:
/// blank nodes carry their canonical identifier,
/// every other term is borrowed from the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum C14nTerm<T> {
    /// A blank node, with its canonical identifier
    Blank(Rc<str>),
    /// Any other term
    Other(T),
}
use C14nTerm::{Blank, Other};

impl<T: Term> Term for C14nTerm<T> {
    fn kind(&self) -> TermKind {
        match self {
            Blank(_) => TermKind::BlankNode,
            Other(t) => t.kind(),
        }
    }

    fn iri(&self) -> Option<&str> {
        match self {
            Blank(_) => None,
            Other(t) => t.iri(),
        }
    }

    fn bnode_id(&self) -> Option<&str> {
        match self {
            Blank(id) => Some(&**id),
            Other(t) => t.bnode_id(),
        }
    }

    fn lexical_form(&self) -> Option<&str> {
        match self {
            Blank(_) => None,
            Other(t) => t.lexical_form(),
        }
    }

    fn datatype(&self) -> Option<&str> {
        match self {
            Blank(_) => None,
            Other(t) => t.datatype(),
        }
    }

    fn language_tag(&self) -> Option<&str> {
        match self {
            Blank(_) => None,
            Other(t) => t.language_tag(),
        }
    }
}
