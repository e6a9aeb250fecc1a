//! Compilation unit API.
//!
//! A `Unit` checks one scoped block against its [`Context`] and keeps the
//! resulting diagnostics. Code generation is only handed the block when
//! analysis found no errors.
//!
//! # Example
//!
//! ```
//! use bumpalo::Bump;
//! use spl::{AstBuilder, Context, ScopeTree, Span};
//! use std::sync::Arc;
//!
//! let ctx = Arc::new(Context::with_defaults().unwrap());
//! let scopes = ScopeTree::new();
//! let root = Some(scopes.root());
//!
//! // println()
//! let arena = Bump::new();
//! let b = AstBuilder::new(&arena);
//! let call = b.call("println", &[], Span::point(1, 1), root);
//! let block = b.block(&[b.expr_stmt(call, Span::point(1, 1), root)], Span::point(1, 1), root);
//!
//! let mut unit = ctx.create_unit();
//! unit.analyze(block, &scopes);
//! assert!(unit.diagnostics().is_empty());
//! ```

use std::path::Path;
use std::sync::Arc;

use spl_ast::{Block, ScopeTree};
use spl_compiler::CheckContext;
use spl_core::Diagnostics;
use thiserror::Error;
use tracing::{info, instrument};

use crate::codegen::{CodeGenerator, GenerateError, hand_off};
use crate::context::Context;

/// One compilation unit and its diagnostic log.
#[derive(Debug)]
pub struct Unit {
    context: Arc<Context>,
    diagnostics: Diagnostics,
    analyzed: bool,
}

impl Unit {
    pub fn new(context: Arc<Context>) -> Self {
        Self {
            context,
            diagnostics: Diagnostics::new(),
            analyzed: false,
        }
    }

    pub fn context(&self) -> &Arc<Context> {
        &self.context
    }

    /// Run every context condition over `block`.
    ///
    /// Replaces the diagnostics of any earlier analysis. Never fails;
    /// findings are in the returned log.
    ///
    /// # Panics
    ///
    /// Panics if a checked node carries no scope.
    #[instrument(skip_all, fields(stmts = block.stmts.len()))]
    #[cfg_attr(feature = "profiling", profiling::function)]
    pub fn analyze(&mut self, block: &Block<'_>, scopes: &ScopeTree) -> &Diagnostics {
        self.diagnostics.clear();
        let ctx = &self.context;
        let mut cx = CheckContext::new(ctx.types(), ctx.builtins(), scopes, &mut self.diagnostics);
        ctx.checkers().run(block, &mut cx);

        self.analyzed = true;
        info!(
            errors = self.diagnostics.error_count(),
            warnings = self.diagnostics.warning_count(),
            "analysis finished"
        );
        &self.diagnostics
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn is_analyzed(&self) -> bool {
        self.analyzed
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }

    /// Hand `block` to `generator`, writing to `output`.
    ///
    /// # Errors
    ///
    /// Refuses if the unit was not analyzed or analysis reported errors;
    /// otherwise forwards the generator's first failure.
    pub fn generate<G: CodeGenerator + ?Sized>(
        &self,
        block: &Block<'_>,
        generator: &mut G,
        output: &Path,
    ) -> Result<(), UnitError> {
        if !self.analyzed {
            return Err(UnitError::NotAnalyzed);
        }
        if self.diagnostics.has_errors() {
            return Err(UnitError::HasErrors {
                count: self.diagnostics.error_count(),
            });
        }
        hand_off(generator, block, output)?;
        Ok(())
    }

    /// Forget the previous analysis.
    pub fn clear(&mut self) {
        self.diagnostics.clear();
        self.analyzed = false;
    }
}

/// Errors from unit operations.
#[derive(Debug, Error)]
pub enum UnitError {
    #[error("Unit has not been analyzed. Call analyze() before generate().")]
    NotAnalyzed,

    #[error("Analysis reported {count} error(s); refusing to generate code")]
    HasErrors { count: usize },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
