//! Owned model of one source file's import declarations.
//!
//! Parsing and printing belong to the external driver. Fixes only need to
//! walk the declarations in a stable order and mutate `path` and `alias` in
//! place, so the model is a plain owned list under an exclusive borrow.

/// One `import` clause: a module path plus an optional local alias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportDecl {
	/// Module path named by the import.
	pub path: String,
	/// Local display name. `None` means the import is referenced by the
	/// path's default identifier.
	pub alias: Option<String>,
}
impl ImportDecl {
	/// An unaliased import of `path`.
	pub fn new(path: impl Into<String>) -> Self {
		Self { path: path.into(), alias: None }
	}

	/// An import of `path` aliased as `alias`.
	pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
		Self { path: path.into(), alias: Some(alias.into()) }
	}
}

/// The import list of one parsed source file.
///
/// Declaration order is the source order; fixes never reorder, insert, or
/// remove declarations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct File {
	imports: Vec<ImportDecl>,
}
impl File {
	/// A file with the given import declarations, in source order.
	pub fn new(imports: Vec<ImportDecl>) -> Self {
		Self { imports }
	}

	/// The declarations, in source order.
	pub fn imports(&self) -> &[ImportDecl] {
		&self.imports
	}

	/// Mutable access to the declarations, in source order.
	pub fn imports_mut(&mut self) -> &mut [ImportDecl] {
		&mut self.imports
	}
}
impl From<Vec<ImportDecl>> for File {
	fn from(imports: Vec<ImportDecl>) -> Self {
		Self::new(imports)
	}
}
