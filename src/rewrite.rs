//! The two-case import rewrite underneath every rename rule.

use crate::ast::File;

/// Rewrites every import of `old_path` to `new_path`.
///
/// Aliases are never touched, whether present or not. Returns whether any
/// declaration matched; zero matches is a no-op, not an error.
pub fn rewrite_import(file: &mut File, old_path: &str, new_path: &str) -> bool {
	rewrite(file, old_path, new_path, None)
}

/// Rewrites every import of `old_path` to `new_path`, aliasing previously
/// unaliased matches as `alias`.
///
/// Given `import "azul3d.org/v1/math"`, rewriting with
/// `("azul3d.org/v1/math", "azul3d.org/lmath.v1", "math")` yields
/// `import math "azul3d.org/lmath.v1"`. An already aliased declaration such
/// as `import sheep "azul3d.org/v1/math"` keeps its alias and becomes
/// `import sheep "azul3d.org/lmath.v1"`.
pub fn rewrite_import_with_alias(
	file: &mut File,
	old_path: &str,
	new_path: &str,
	alias: &str,
) -> bool {
	rewrite(file, old_path, new_path, Some(alias))
}

fn rewrite(file: &mut File, old_path: &str, new_path: &str, alias: Option<&str>) -> bool {
	// An empty alias is not a valid display name; treat it as absent.
	let alias = alias.filter(|alias| !alias.is_empty());
	let mut rewrote = false;

	for import in file.imports_mut() {
		if import.path != old_path {
			continue;
		}

		rewrote = true;

		if import.alias.is_none() {
			import.alias = alias.map(ToOwned::to_owned);
		}

		import.path = new_path.to_owned();
	}

	rewrote
}
