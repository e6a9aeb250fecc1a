//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] is a 64-bit hash of a type's canonical name. Two types are
//! the same type iff their canonical names match, so comparing hashes is
//! equivalent to comparing names and costs a single integer compare.
//!
//! # Examples
//!
//! ```
//! use spl_core::{TypeHash, primitives};
//!
//! let real = TypeHash::from_name("real");
//! assert_eq!(real, primitives::REAL);
//! assert_ne!(real, primitives::INTEGER);
//! ```

use std::fmt;
use xxhash_rust::const_xxh64;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every type hash.
const TYPE_DOMAIN: u64 = 0x2fac10b63a6cc57c;

/// A deterministic 64-bit hash identifying a type by its canonical name.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Create a type hash from a canonical type name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(TYPE_DOMAIN ^ xxh64(name.as_bytes(), 0))
    }

    /// Compile-time variant of [`TypeHash::from_name`].
    ///
    /// Produces the identical value; used for the primitive constants.
    pub const fn from_name_const(name: &str) -> Self {
        TypeHash(TYPE_DOMAIN ^ const_xxh64::xxh64(name.as_bytes(), 0))
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

/// Hashes of the primitive SPL types.
pub mod primitives {
    use super::TypeHash;

    /// Canonical name of the integer type.
    pub const INTEGER_NAME: &str = "integer";
    /// Canonical name of the real type.
    pub const REAL_NAME: &str = "real";
    /// Canonical name of the boolean type.
    pub const BOOLEAN_NAME: &str = "boolean";
    /// Canonical name of the string type.
    pub const STRING_NAME: &str = "string";
    /// Canonical name of the void type.
    pub const VOID_NAME: &str = "void";

    /// Hash for `integer`
    pub const INTEGER: TypeHash = TypeHash::from_name_const(INTEGER_NAME);
    /// Hash for `real`
    pub const REAL: TypeHash = TypeHash::from_name_const(REAL_NAME);
    /// Hash for `boolean`
    pub const BOOLEAN: TypeHash = TypeHash::from_name_const(BOOLEAN_NAME);
    /// Hash for `string`
    pub const STRING: TypeHash = TypeHash::from_name_const(STRING_NAME);
    /// Hash for `void`
    pub const VOID: TypeHash = TypeHash::from_name_const(VOID_NAME);
}
