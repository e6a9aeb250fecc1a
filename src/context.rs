//! Analysis session for SPL models.
//!
//! A `Context` owns the sealed registries every compilation unit of a
//! model is checked against: the type registry (primitives plus the
//! model's units), the builtin functions and the context conditions.
//!
//! # Example
//!
//! ```
//! use spl::Context;
//! use std::sync::Arc;
//!
//! let ctx = Arc::new(
//!     Context::builder()
//!         .with_units(["mV", "pA", "pF"])
//!         .with_compound_units(["pA/pF"])
//!         .build()
//!         .unwrap(),
//! );
//!
//! assert!(ctx.types().contains("mV"));
//! assert!(ctx.builtins().contains("Time.steps"));
//!
//! let unit = ctx.create_unit();
//! assert!(!unit.is_analyzed());
//! ```

use std::sync::Arc;

use spl_compiler::CheckerRegistry;
use spl_core::RegistryError;
use spl_registry::{FunctionRegistry, TypeRegistry, TypeRegistryBuilder};
use thiserror::Error;
use tracing::debug;

use crate::unit::Unit;

/// Immutable analysis session.
///
/// Cheap to share: wrap it in an `Arc` and create one [`Unit`] per
/// compilation unit, from any thread.
#[derive(Debug)]
pub struct Context {
    types: Arc<TypeRegistry>,
    builtins: Arc<FunctionRegistry>,
    checkers: Arc<CheckerRegistry>,
}

impl Context {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// A session with no model units beyond `ms` and the standard checkers.
    pub fn with_defaults() -> Result<Self, ContextError> {
        Self::builder().build()
    }

    /// Create a compilation unit bound to this session.
    pub fn create_unit(self: &Arc<Self>) -> Unit {
        Unit::new(Arc::clone(self))
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn builtins(&self) -> &FunctionRegistry {
        &self.builtins
    }

    pub fn checkers(&self) -> &CheckerRegistry {
        &self.checkers
    }
}

/// Collects the model's units and the checker list for a [`Context`].
#[derive(Debug, Default)]
pub struct ContextBuilder {
    types: TypeRegistryBuilder,
    checkers: Option<CheckerRegistry>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(mut self, name: impl Into<String>) -> Self {
        self.types = self.types.unit(name);
        self
    }

    pub fn with_units<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = self.types.units(names);
        self
    }

    pub fn with_compound_unit(mut self, name: impl Into<String>) -> Self {
        self.types = self.types.compound_unit(name);
        self
    }

    pub fn with_compound_units<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = self.types.compound_units(names);
        self
    }

    /// Replace the standard checker list.
    pub fn with_checkers(mut self, checkers: CheckerRegistry) -> Self {
        self.checkers = Some(checkers);
        self
    }

    /// Seal the registries.
    ///
    /// # Errors
    ///
    /// Returns an error if a unit name is malformed or registered twice.
    pub fn build(self) -> Result<Context, ContextError> {
        let types = self.types.build()?;
        let builtins = FunctionRegistry::builtins(&types)?;
        let checkers = self.checkers.unwrap_or_else(CheckerRegistry::standard);
        debug!(
            types = types.len(),
            builtins = builtins.len(),
            checkers = checkers.len(),
            "context sealed"
        );
        Ok(Context {
            types: Arc::new(types),
            builtins: Arc::new(builtins),
            checkers: Arc::new(checkers),
        })
    }
}

/// Errors that can occur while setting up a [`Context`].
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("failed to build registries: {0}")]
    Registry(#[from] RegistryError),
}
