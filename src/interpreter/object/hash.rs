use std::{fmt, rc::Rc};

use crate::interpreter::object::core::Object;

/// A content-derived hash map key.
///
/// Keys are compared by type tag and content, never by object identity, so
/// two separately built strings `"foo"` land on the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HashKey {
    Integer(i64),
    Boolean(bool),
    String(Rc<str>),
}

/// A hash entry. The original key object is kept for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct HashPair {
    pub key:   Object,
    pub value: Object,
}

impl fmt::Display for HashPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}
