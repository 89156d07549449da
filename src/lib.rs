//! Import-path migration fixes for azul3d.org's move off Google Code.
//!
//! Each fix is a pure rewrite over one file's import declarations: the
//! external driver parses the source, hands the import list here, and
//! serializes it back if the fix reports a change. This crate carries no
//! I/O of its own.

#![deny(clippy::all, missing_docs)]

pub mod ast;
pub mod fix;
pub mod fixes;
pub mod rewrite;

/// Crate-wide error reporting types.
pub mod prelude {
	pub use color_eyre::{Result, eyre};
}
