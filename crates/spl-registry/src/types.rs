//! The type registry: every type name a model may refer to.
//!
//! Holds the fixed primitives plus the physical units and unit compounds
//! declared by the enclosing model. Built once through
//! [`TypeRegistryBuilder`] and immutable afterwards.

use rustc_hash::FxHashMap;
use spl_core::{RegistryError, SplType, TypeHash, TypeKind, primitives};
use tracing::debug;

/// Name of the simulation time unit, always registered.
pub const TIME_UNIT: &str = "ms";

/// Immutable lookup table from type name to [`SplType`].
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: FxHashMap<TypeHash, SplType>,
    integer: SplType,
    real: SplType,
    boolean: SplType,
    string: SplType,
    void: SplType,
}

impl TypeRegistry {
    pub fn builder() -> TypeRegistryBuilder {
        TypeRegistryBuilder::new()
    }

    /// A registry holding only the primitives and `ms`.
    pub fn with_primitives() -> Self {
        Self::from_parts(FxHashMap::default())
    }

    fn from_parts(mut types: FxHashMap<TypeHash, SplType>) -> Self {
        let integer = SplType::integer();
        let real = SplType::real();
        let boolean = SplType::boolean();
        let string = SplType::string();
        let void = SplType::void();
        for ty in [&integer, &real, &boolean, &string, &void] {
            types.insert(ty.type_hash(), ty.clone());
        }
        let time = SplType::new(TIME_UNIT, TypeKind::Unit);
        types.entry(time.type_hash()).or_insert(time);

        Self {
            types,
            integer,
            real,
            boolean,
            string,
            void,
        }
    }

    /// Look up a type by its canonical name.
    pub fn get(&self, name: &str) -> Result<&SplType, RegistryError> {
        self.types
            .get(&TypeHash::from_name(name))
            .ok_or_else(|| RegistryError::UnknownType {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(&TypeHash::from_name(name))
    }

    pub fn integer(&self) -> &SplType {
        &self.integer
    }

    pub fn real(&self) -> &SplType {
        &self.real
    }

    pub fn boolean(&self) -> &SplType {
        &self.boolean
    }

    pub fn string(&self) -> &SplType {
        &self.string
    }

    pub fn void(&self) -> &SplType {
        &self.void
    }

    /// Every registered type, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SplType> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_primitives()
    }
}

/// Collects unit names and validates them into a [`TypeRegistry`].
#[derive(Debug, Default, Clone)]
pub struct TypeRegistryBuilder {
    entries: Vec<(String, TypeKind)>,
}

impl TypeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a physical unit (e.g. `mV`).
    pub fn unit(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), TypeKind::Unit));
        self
    }

    pub fn units<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .extend(names.into_iter().map(|n| (n.into(), TypeKind::Unit)));
        self
    }

    /// Register a unit compound (e.g. `mV*ms`).
    pub fn compound_unit(mut self, name: impl Into<String>) -> Self {
        self.entries.push((name.into(), TypeKind::UnitCompound));
        self
    }

    pub fn compound_units<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .extend(names.into_iter().map(|n| (n.into(), TypeKind::UnitCompound)));
        self
    }

    /// Validate every collected name and seal the registry.
    ///
    /// `ms` may be listed by the model; it is registered exactly once either way.
    pub fn build(self) -> Result<TypeRegistry, RegistryError> {
        let mut types: FxHashMap<TypeHash, SplType> = FxHashMap::default();

        for (name, kind) in self.entries {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(RegistryError::InvalidTypeName { name });
            }
            if is_primitive_name(&name) {
                return Err(RegistryError::DuplicateType { name });
            }
            let ty = SplType::new(name, kind);
            if types.contains_key(&ty.type_hash()) {
                return Err(RegistryError::DuplicateType {
                    name: ty.name().to_string(),
                });
            }
            types.insert(ty.type_hash(), ty);
        }

        let registry = TypeRegistry::from_parts(types);
        debug!(types = registry.len(), "type registry sealed");
        Ok(registry)
    }
}

fn is_primitive_name(name: &str) -> bool {
    matches!(
        name,
        primitives::INTEGER_NAME
            | primitives::REAL_NAME
            | primitives::BOOLEAN_NAME
            | primitives::STRING_NAME
            | primitives::VOID_NAME
    )
}
