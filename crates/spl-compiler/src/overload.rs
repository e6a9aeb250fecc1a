//! Function call resolution.
//!
//! A call resolves against the user functions visible from its scope and
//! the builtins of the same qualified name. Candidates are filtered by
//! arity and then by positional [`is_compatible`]. Resolution succeeds only
//! when exactly one candidate survives.

use spl_ast::{ScopeId, ScopeTree};
use spl_core::{FunctionSignature, QualifiedName, SplType};
use spl_registry::{FunctionRegistry, TypeRegistry};
use tracing::{debug, trace};

use crate::conversion::is_compatible;

/// Resolves call sites to a single [`FunctionSignature`].
#[derive(Debug, Clone, Copy)]
pub struct MethodResolver<'a> {
    types: &'a TypeRegistry,
    builtins: &'a FunctionRegistry,
}

impl<'a> MethodResolver<'a> {
    pub fn new(types: &'a TypeRegistry, builtins: &'a FunctionRegistry) -> Self {
        Self { types, builtins }
    }

    /// Find the unique function named `name` accepting `args`.
    ///
    /// Returns `None` if no candidate matches or if several do.
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn resolve<'r>(
        &self,
        name: &str,
        args: &[SplType],
        scopes: &'r ScopeTree,
        scope: ScopeId,
    ) -> Option<&'r FunctionSignature>
    where
        'a: 'r,
    {
        let candidates = self.candidates(name, scopes, scope);
        trace!(name, candidates = candidates.len(), "resolving call");

        let mut matching = candidates.into_iter().filter(|sig| {
            sig.arity() == args.len()
                && sig
                    .params
                    .iter()
                    .zip(args)
                    .all(|(param, arg)| is_compatible(param, arg))
        });

        let first = matching.next()?;
        if let Some(second) = matching.next() {
            debug!(
                name,
                first = %first,
                second = %second,
                "ambiguous call, not resolving"
            );
            return None;
        }
        Some(first)
    }

    /// Like [`resolve`](Self::resolve), with argument types given by name.
    ///
    /// An argument type name missing from the type registry resolves to `None`.
    pub fn resolve_by_names<'r>(
        &self,
        name: &str,
        arg_type_names: &[&str],
        scopes: &'r ScopeTree,
        scope: ScopeId,
    ) -> Option<&'r FunctionSignature>
    where
        'a: 'r,
    {
        let args = arg_type_names
            .iter()
            .map(|n| self.types.get(n).cloned())
            .collect::<Result<Vec<_>, _>>()
            .ok()?;
        self.resolve(name, &args, scopes, scope)
    }

    /// User functions innermost first, then builtins not shadowed by a user
    /// function of the same shape.
    fn candidates<'r>(
        &self,
        name: &str,
        scopes: &'r ScopeTree,
        scope: ScopeId,
    ) -> Vec<&'r FunctionSignature>
    where
        'a: 'r,
    {
        let qname = QualifiedName::from_qualified_string(name);
        let builtins: &'r FunctionRegistry = self.builtins;

        let mut out: Vec<&'r FunctionSignature> = Vec::new();
        let user = scopes.resolve_functions(scope, &qname.to_string());
        let builtin = builtins.get_qualified(&qname).unwrap_or(&[]);

        for sig in user.into_iter().chain(builtin.iter()) {
            if !out.iter().any(|seen| seen.same_shape(sig)) {
                out.push(sig);
            }
        }
        out
    }
}
