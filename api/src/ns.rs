//! IRIs of the standard vocabularies used by this crate.
#![allow(non_upper_case_globals)]

/// The standard `rdf:` namespace.
pub mod rdf {
    /// `rdf:langString`, the datatype of every language-tagged string
    pub const langString: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// The standard `xsd:` namespace.
pub mod xsd {
    /// `xsd:string`, the datatype of simple literals
    pub const string: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`
    pub const integer: &str = "http://www.w3.org/2001/XMLSchema#integer";
}
