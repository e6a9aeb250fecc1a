//! Hierarchical name resolution.
//!
//! The scope tree is produced by the symbol-table builder before analysis.
//! Lookups walk from a scope up to the root; the innermost declaration wins.

use rustc_hash::FxHashMap;
use spl_core::{FunctionSignature, SplType};

/// Handle to a scope inside a [`ScopeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which namespace a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Variable,
    Function,
}

/// A declared variable.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableSymbol {
    pub name: String,
    pub ty: SplType,
    /// Scope the variable was declared in.
    pub scope: ScopeId,
}

/// Result of a kind-directed lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Symbol<'a> {
    Variable(&'a VariableSymbol),
    Function(&'a FunctionSignature),
}

#[derive(Debug, Default)]
struct ScopeData {
    parent: Option<ScopeId>,
    variables: FxHashMap<String, VariableSymbol>,
    /// Keyed by the dotted qualified name; overloads kept in declaration order.
    functions: FxHashMap<String, Vec<FunctionSignature>>,
}

/// Tree of lexical scopes. Index 0 is the root.
///
/// A [`ScopeId`] is only meaningful for the tree that issued it. Every method
/// taking one panics when handed an id from another, larger tree.
#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<ScopeData>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTree {
    /// Create a tree holding only the root scope.
    pub fn new() -> Self {
        Self {
            scopes: vec![ScopeData::default()],
        }
    }

    pub fn root(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Open a child scope of `parent`.
    pub fn push_scope(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(ScopeData {
            parent: Some(parent),
            ..ScopeData::default()
        });
        id
    }

    /// # Panics
    ///
    /// Panics if `scope` was not issued by this tree.
    pub fn parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.data(scope).parent
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// `scope` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, scope: ScopeId) -> impl Iterator<Item = ScopeId> + '_ {
        std::iter::successors(Some(scope), move |s| self.parent(*s))
    }

    /// Declare a variable, replacing a previous one of the same name in
    /// this scope.
    ///
    /// # Panics
    ///
    /// Panics if `scope` was not issued by this tree.
    pub fn declare_variable(&mut self, scope: ScopeId, name: impl Into<String>, ty: SplType) {
        let name = name.into();
        self.data_mut(scope).variables.insert(
            name.clone(),
            VariableSymbol { name, ty, scope },
        );
    }

    /// Declare a user function in `scope`.
    ///
    /// # Panics
    ///
    /// Panics if `scope` was not issued by this tree.
    pub fn declare_function(&mut self, scope: ScopeId, signature: FunctionSignature) {
        self.data_mut(scope)
            .functions
            .entry(signature.name.to_string())
            .or_default()
            .push(signature);
    }

    /// Resolve `name` in the given namespace, innermost scope first.
    pub fn resolve(&self, scope: ScopeId, name: &str, kind: SymbolKind) -> Option<Symbol<'_>> {
        match kind {
            SymbolKind::Variable => self.resolve_variable(scope, name).map(Symbol::Variable),
            SymbolKind::Function => self
                .resolve_functions(scope, name)
                .into_iter()
                .next()
                .map(Symbol::Function),
        }
    }

    pub fn resolve_variable(&self, scope: ScopeId, name: &str) -> Option<&VariableSymbol> {
        self.ancestors(scope)
            .find_map(|s| self.data(s).variables.get(name))
    }

    /// Every user function called `name` visible from `scope`, innermost
    /// scope first.
    pub fn resolve_functions(&self, scope: ScopeId, name: &str) -> Vec<&FunctionSignature> {
        self.ancestors(scope)
            .filter_map(|s| self.data(s).functions.get(name))
            .flatten()
            .collect()
    }

    #[track_caller]
    fn data(&self, scope: ScopeId) -> &ScopeData {
        match self.scopes.get(scope.index()) {
            Some(data) => data,
            None => panic!("scope {} does not belong to this tree", scope.index()),
        }
    }

    #[track_caller]
    fn data_mut(&mut self, scope: ScopeId) -> &mut ScopeData {
        match self.scopes.get_mut(scope.index()) {
            Some(data) => data,
            None => panic!("scope {} does not belong to this tree", scope.index()),
        }
    }
}
