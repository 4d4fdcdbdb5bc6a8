use std::{fmt, rc::Rc};

use indexmap::IndexMap;

use crate::{
    ast::write_joined,
    error::RuntimeError,
    interpreter::object::{
        function::{Builtin, Function},
        hash::{HashKey, HashPair},
    },
};

/// Represents a runtime value in the interpreter.
///
/// Compound values are reference counted, so cloning an `Object` never copies
/// array elements, hash pairs or closure environments. Equality is structural
/// except for user functions, which compare by identity.
#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A boolean. Use [`TRUE`] and [`FALSE`] rather than constructing one.
    Boolean(bool),
    /// The absence of a useful value. Use [`NULL`].
    Null,
    /// An immutable string.
    String(Rc<str>),
    /// An immutable array. Builtins that "modify" arrays build new ones.
    Array(Rc<Vec<Self>>),
    /// A hash map from content-derived keys to the original key and its value.
    Hash(Rc<IndexMap<HashKey, HashPair>>),
    /// A user-defined function together with its defining environment.
    Function(Rc<Function>),
    /// A native function from the builtin table.
    Builtin(&'static Builtin),
    /// Wraps the value of a `return` statement while it unwinds to the
    /// nearest function call or to the program.
    ReturnValue(Box<Self>),
    /// A runtime error travelling as a value.
    Error(RuntimeError),
}

/// The canonical `true`.
pub const TRUE: Object = Object::Boolean(true);
/// The canonical `false`.
pub const FALSE: Object = Object::Boolean(false);
/// The canonical null.
pub const NULL: Object = Object::Null;

/// The type tag of an [`Object`], used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    Integer,
    Boolean,
    Null,
    String,
    Array,
    Hash,
    Function,
    Builtin,
    ReturnValue,
    Error,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "INTEGER",
            Self::Boolean => "BOOLEAN",
            Self::Null => "NULL",
            Self::String => "STRING",
            Self::Array => "ARRAY",
            Self::Hash => "HASH",
            Self::Function => "FUNCTION",
            Self::Builtin => "BUILTIN",
            Self::ReturnValue => "RETURN_VALUE",
            Self::Error => "ERROR",
        };
        write!(f, "{name}")
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

/// Maps a native boolean onto the canonical [`TRUE`] or [`FALSE`].
impl From<bool> for Object {
    fn from(value: bool) -> Self {
        if value { TRUE } else { FALSE }
    }
}

impl From<&str> for Object {
    fn from(value: &str) -> Self {
        Self::String(Rc::from(value))
    }
}

impl From<Vec<Self>> for Object {
    fn from(elements: Vec<Self>) -> Self {
        Self::Array(Rc::new(elements))
    }
}

impl From<RuntimeError> for Object {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

impl Object {
    /// Returns the type tag of the value.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::object::{NULL, Object, ObjectType};
    ///
    /// assert_eq!(Object::Integer(1).object_type(), ObjectType::Integer);
    /// assert_eq!(NULL.object_type().to_string(), "NULL");
    /// ```
    #[must_use]
    pub const fn object_type(&self) -> ObjectType {
        match self {
            Self::Integer(_) => ObjectType::Integer,
            Self::Boolean(_) => ObjectType::Boolean,
            Self::Null => ObjectType::Null,
            Self::String(_) => ObjectType::String,
            Self::Array(_) => ObjectType::Array,
            Self::Hash(_) => ObjectType::Hash,
            Self::Function(_) => ObjectType::Function,
            Self::Builtin(_) => ObjectType::Builtin,
            Self::ReturnValue(_) => ObjectType::ReturnValue,
            Self::Error(_) => ObjectType::Error,
        }
    }

    /// Returns `true` if the value is an [`Object::Error`].
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    /// Only `false` and `null` are falsy; every other value, including `0`
    /// and the empty string, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Boolean(false) | Self::Null)
    }

    /// Derives the hash key of the value, if it has one.
    ///
    /// Integers, booleans and strings are hashable. Two values that are
    /// equal always derive equal keys.
    ///
    /// ## Example
    /// ```
    /// use monkey::interpreter::object::Object;
    ///
    /// let a = Object::from("foo");
    /// let b = Object::from("foo");
    ///
    /// assert_eq!(a.hash_key(), b.hash_key());
    /// assert!(Object::from(vec![]).hash_key().is_none());
    /// ```
    #[must_use]
    pub fn hash_key(&self) -> Option<HashKey> {
        match self {
            Self::Integer(value) => Some(HashKey::Integer(*value)),
            Self::Boolean(value) => Some(HashKey::Boolean(*value)),
            Self::String(value) => Some(HashKey::String(Rc::clone(value))),
            _ => None,
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Null => write!(f, "null"),
            Self::String(value) => write!(f, "{value}"),
            Self::Array(elements) => {
                write!(f, "[")?;
                write_joined(f, elements.iter())?;
                write!(f, "]")
            },
            Self::Hash(pairs) => {
                write!(f, "{{")?;
                write_joined(f, pairs.values())?;
                write!(f, "}}")
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::Builtin(_) => write!(f, "builtin function"),
            Self::ReturnValue(value) => write!(f, "{value}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}
