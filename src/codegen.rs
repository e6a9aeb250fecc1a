//! Hand-off to target code generation.
//!
//! The generator itself (a template engine producing simulator source) is
//! supplied by the host. This module fixes the boundary: which nodes are
//! handed over, under which template names, and how failures come back.

use std::path::Path;

use spl_ast::{Assignment, Block, Declaration, Visitor, walk_assignment, walk_declaration};
use thiserror::Error;

/// Template rendering a single declaration.
pub const DECLARATION_TEMPLATE: &str = "spl.Declaration";
/// Template rendering a single assignment.
pub const ASSIGNMENT_TEMPLATE: &str = "spl.Assignment";
/// Template rendering a whole block.
pub const BLOCK_TEMPLATE: &str = "spl.Block";

/// Errors raised by a [`CodeGenerator`].
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to write generated code: {0}")]
    Io(#[from] std::io::Error),

    #[error("template '{template}' failed: {message}")]
    Template {
        template: &'static str,
        message: String,
    },
}

/// Renders validated nodes into target-language source.
///
/// Only called for units whose analysis reported no errors.
pub trait CodeGenerator {
    fn generate_declaration(&mut self, decl: &Declaration<'_>, output: &Path) -> Result<(), GenerateError>;

    fn generate_assignment(&mut self, assign: &Assignment<'_>, output: &Path) -> Result<(), GenerateError>;

    fn generate_block(&mut self, block: &Block<'_>, output: &Path) -> Result<(), GenerateError>;
}

/// Feed `block` to `generator`: the block itself, then every declaration
/// and assignment inside it in source order. Stops at the first failure.
pub(crate) fn hand_off<G: CodeGenerator + ?Sized>(
    generator: &mut G,
    block: &Block<'_>,
    output: &Path,
) -> Result<(), GenerateError> {
    generator.generate_block(block, output)?;

    let mut walker = HandOff {
        generator,
        output,
        result: Ok(()),
    };
    walker.visit_block(block);
    walker.result
}

struct HandOff<'g, 'p, G: CodeGenerator + ?Sized> {
    generator: &'g mut G,
    output: &'p Path,
    result: Result<(), GenerateError>,
}

impl<G: CodeGenerator + ?Sized> Visitor for HandOff<'_, '_, G> {
    fn visit_declaration(&mut self, decl: &Declaration<'_>) {
        if self.result.is_ok() {
            self.result = self.generator.generate_declaration(decl, self.output);
            walk_declaration(self, decl);
        }
    }

    fn visit_assignment(&mut self, assign: &Assignment<'_>) {
        if self.result.is_ok() {
            self.result = self.generator.generate_assignment(assign, self.output);
            walk_assignment(self, assign);
        }
    }
}
