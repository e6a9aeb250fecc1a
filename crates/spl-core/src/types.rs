//! SPL types and function signatures.

use std::fmt;
use std::sync::Arc;

use crate::{QualifiedName, TypeHash, primitives};

/// Category of an SPL type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// `integer`, `real`, `boolean`, `string` or `void`.
    Primitive,
    /// A physical unit declared by the model (e.g. `mV`, `ms`).
    Unit,
    /// A user-defined compound of units (e.g. `mV*ms`, `pA/pF`).
    UnitCompound,
}

/// An SPL type.
///
/// Types are identified by their canonical name; equality and hashing use
/// the precomputed [`TypeHash`] only. Cloning is cheap (the name is shared).
#[derive(Clone)]
pub struct SplType {
    hash: TypeHash,
    name: Arc<str>,
    kind: TypeKind,
}

impl SplType {
    /// Create a type with the given canonical name and kind.
    pub fn new(name: impl Into<Arc<str>>, kind: TypeKind) -> Self {
        let name = name.into();
        Self {
            hash: TypeHash::from_name(&name),
            name,
            kind,
        }
    }

    pub fn integer() -> Self {
        Self::new(primitives::INTEGER_NAME, TypeKind::Primitive)
    }

    pub fn real() -> Self {
        Self::new(primitives::REAL_NAME, TypeKind::Primitive)
    }

    pub fn boolean() -> Self {
        Self::new(primitives::BOOLEAN_NAME, TypeKind::Primitive)
    }

    pub fn string() -> Self {
        Self::new(primitives::STRING_NAME, TypeKind::Primitive)
    }

    pub fn void() -> Self {
        Self::new(primitives::VOID_NAME, TypeKind::Primitive)
    }

    /// Canonical name of the type.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn type_hash(&self) -> TypeHash {
        self.hash
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Whether this is a physical unit or a unit compound.
    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self.kind, TypeKind::Unit | TypeKind::UnitCompound)
    }

    /// Whether this is `integer` or `real`.
    #[inline]
    pub fn is_numeric_primitive(&self) -> bool {
        self.hash == primitives::INTEGER || self.hash == primitives::REAL
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.hash == primitives::INTEGER
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        self.hash == primitives::REAL
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        self.hash == primitives::BOOLEAN
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        self.hash == primitives::STRING
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.hash == primitives::VOID
    }
}

impl PartialEq for SplType {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for SplType {}

impl std::hash::Hash for SplType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Debug for SplType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.name, self.kind)
    }
}

/// Renders the type the way diagnostics print it.
impl fmt::Display for SplType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Where a function signature comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionOrigin {
    /// Predefined by the SPL runtime.
    Builtin,
    /// Declared by the model author.
    User,
}

/// A function signature: qualified name, positional parameter types and a
/// single return type. No variadics, no overloading by return type.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub name: QualifiedName,
    pub params: Vec<SplType>,
    pub return_type: SplType,
    pub origin: FunctionOrigin,
}

impl FunctionSignature {
    pub fn builtin(name: impl Into<QualifiedName>, params: Vec<SplType>, return_type: SplType) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            origin: FunctionOrigin::Builtin,
        }
    }

    pub fn user(name: impl Into<QualifiedName>, params: Vec<SplType>, return_type: SplType) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            origin: FunctionOrigin::User,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether both signatures share name and parameter types.
    pub fn same_shape(&self, other: &FunctionSignature) -> bool {
        self.name == other.name && self.params == other.params
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}
