//! The builtin function registry.
//!
//! SPL ships a fixed set of predefined functions. The table is created once
//! per session from a [`TypeRegistry`] and never changes afterwards.

use rustc_hash::FxHashMap;
use spl_core::{FunctionSignature, QualifiedName, RegistryError, SplType};

use crate::types::{TIME_UNIT, TypeRegistry};

/// Builtin signatures keyed by qualified name.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    functions: FxHashMap<QualifiedName, Vec<FunctionSignature>>,
    /// Registration order, for a stable snapshot iterator.
    order: Vec<QualifiedName>,
}

impl FunctionRegistry {
    /// Create the builtin table.
    ///
    /// | name | params | returns |
    /// |---|---|---|
    /// | `print` | `string` | `void` |
    /// | `println` | | `void` |
    /// | `pow` | `real, real` | `real` |
    /// | `exp` | `real` | `real` |
    /// | `expm1` | `real` | `real` |
    /// | `random` | | `real` |
    /// | `randomInt` | | `integer` |
    /// | `Time.resolution` | | `real` |
    /// | `Time.steps` | `ms` | `integer` |
    /// | `Spiking.emitSpike` | | `real` |
    /// | `Logger.info` | `string` | `void` |
    pub fn builtins(types: &TypeRegistry) -> Result<Self, RegistryError> {
        let integer = types.integer().clone();
        let real = types.real().clone();
        let string = types.string().clone();
        let void = types.void().clone();
        let ms = types.get(TIME_UNIT)?.clone();

        let mut registry = Self {
            functions: FxHashMap::default(),
            order: Vec::new(),
        };
        registry.insert("print", vec![string.clone()], void.clone());
        registry.insert("println", vec![], void.clone());
        registry.insert("pow", vec![real.clone(), real.clone()], real.clone());
        registry.insert("exp", vec![real.clone()], real.clone());
        registry.insert("expm1", vec![real.clone()], real.clone());
        registry.insert("random", vec![], real.clone());
        registry.insert("randomInt", vec![], integer.clone());
        registry.insert("Time.resolution", vec![], real.clone());
        registry.insert("Time.steps", vec![ms], integer);
        registry.insert("Spiking.emitSpike", vec![], real);
        registry.insert("Logger.info", vec![string], void);
        Ok(registry)
    }

    fn insert(&mut self, name: &str, params: Vec<SplType>, ret: SplType) {
        let qname = QualifiedName::from_qualified_string(name);
        let signature = FunctionSignature::builtin(qname.clone(), params, ret);
        let overloads = self.functions.entry(qname.clone()).or_default();
        if overloads.is_empty() {
            self.order.push(qname);
        }
        overloads.push(signature);
    }

    /// Builtin overloads registered under a dotted name.
    pub fn get(&self, name: &str) -> Option<&[FunctionSignature]> {
        self.get_qualified(&QualifiedName::from_qualified_string(name))
    }

    pub fn get_qualified(&self, name: &QualifiedName) -> Option<&[FunctionSignature]> {
        self.functions.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of builtin signatures.
    pub fn len(&self) -> usize {
        self.functions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Read-only snapshot of every builtin, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FunctionSignature> {
        self.order
            .iter()
            .filter_map(|name| self.functions.get(name))
            .flatten()
    }
}
