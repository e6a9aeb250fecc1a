//! SPL registries.
//!
//! - [`TypeRegistry`]: primitives plus the units declared by the model
//! - [`FunctionRegistry`]: the predefined builtin functions
//!
//! Both are built once per session and shared read-only.

mod functions;
mod types;

pub use functions::FunctionRegistry;
pub use types::{TIME_UNIT, TypeRegistry, TypeRegistryBuilder};
