//! Rewrites azul3d.org imports from the old Google Code paths to the new
//! GitHub ones.
//!
//! <http://azul3d.org/news/2014/important-import-paths-have-changed.html>

use crate::{
	ast::File,
	fix::Fix,
	rewrite::{rewrite_import, rewrite_import_with_alias},
};

/// One deprecated path and its successor. `alias` is assigned to matched
/// imports that have none; `None` leaves aliases entirely alone.
struct Rename {
	old: &'static str,
	new: &'static str,
	alias: Option<&'static str>,
}

const RENAMES: &[Rename] = &[
	// audio package.
	Rename { old: "azul3d.org/v0/audio", new: "azul3d.org/audio.v1", alias: None },
	Rename { old: "azul3d.org/v1/audio", new: "azul3d.org/audio.v1", alias: None },
	// audio/wav package.
	Rename { old: "azul3d.org/v0/audio/wav", new: "azul3d.org/audio/wav.v1", alias: None },
	Rename { old: "azul3d.org/v1/audio/wav", new: "azul3d.org/audio/wav.v1", alias: None },
	// chippy package.
	Rename { old: "azul3d.org/v0/chippy", new: "azul3d.org/chippy.v1", alias: None },
	Rename { old: "azul3d.org/v1/chippy", new: "azul3d.org/chippy.v1", alias: None },
	// chippy win32 internal package.
	Rename {
		old: "azul3d.org/v0/chippy/wrappers/win32",
		new: "azul3d.org/chippy.v1/internal/win32",
		alias: None,
	},
	Rename {
		old: "azul3d.org/v1/chippy/wrappers/win32",
		new: "azul3d.org/chippy.v1/internal/win32",
		alias: None,
	},
	// chippy x11 internal package.
	Rename {
		old: "azul3d.org/v0/chippy/wrappers/x11",
		new: "azul3d.org/chippy.v1/internal/x11",
		alias: None,
	},
	Rename {
		old: "azul3d.org/v1/chippy/wrappers/x11",
		new: "azul3d.org/chippy.v1/internal/x11",
		alias: None,
	},
	// clock package.
	Rename { old: "azul3d.org/v0/clock", new: "azul3d.org/clock.v0", alias: None },
	Rename { old: "azul3d.org/v1/clock", new: "azul3d.org/clock.v1", alias: None },
	// gfx package.
	Rename { old: "azul3d.org/v1/gfx", new: "azul3d.org/gfx.v1", alias: None },
	// gfx/gl2 package.
	Rename { old: "azul3d.org/v1/gfx/gl2", new: "azul3d.org/gfx/gl2.v1", alias: None },
	// gfx/window package.
	Rename { old: "azul3d.org/v1/gfx/window", new: "azul3d.org/gfx/window.v1", alias: None },
	// keyboard package.
	Rename { old: "azul3d.org/v0/chippy/keyboard", new: "azul3d.org/keyboard.v1", alias: None },
	Rename { old: "azul3d.org/v1/keyboard", new: "azul3d.org/keyboard.v1", alias: None },
	// mouse package.
	Rename { old: "azul3d.org/v0/chippy/mouse", new: "azul3d.org/mouse.v1", alias: None },
	Rename { old: "azul3d.org/v1/mouse", new: "azul3d.org/mouse.v1", alias: None },
	// math package. The new package name no longer matches the path tail, so
	// unaliased imports gain an explicit `math` alias.
	Rename { old: "azul3d.org/v0/math", new: "azul3d.org/lmath.v1", alias: Some("math") },
	Rename { old: "azul3d.org/v1/math", new: "azul3d.org/lmath.v1", alias: Some("math") },
	// native/gl package.
	Rename { old: "azul3d.org/v0/native/gl", new: "azul3d.org/native/gl.v1", alias: None },
	Rename { old: "azul3d.org/v1/native/gl", new: "azul3d.org/native/gl.v1", alias: None },
	// native/gles1 package.
	Rename { old: "azul3d.org/v0/native/gles1", new: "azul3d.org/native/gles1.v1", alias: None },
	Rename { old: "azul3d.org/v1/native/gles1", new: "azul3d.org/native/gles1.v1", alias: None },
	// native/gles2 package.
	Rename { old: "azul3d.org/v0/native/gles2", new: "azul3d.org/native/gles2.v1", alias: None },
	Rename { old: "azul3d.org/v1/native/gles2", new: "azul3d.org/native/gles2.v1", alias: None },
	// native/al package.
	Rename { old: "azul3d.org/v0/native/al", new: "azul3d.org/native/al.v1", alias: None },
	Rename { old: "azul3d.org/v1/native/al", new: "azul3d.org/native/al.v1", alias: None },
	// native/freetype package.
	Rename {
		old: "azul3d.org/v0/native/freetype",
		new: "azul3d.org/native/freetype.v1",
		alias: None,
	},
	Rename {
		old: "azul3d.org/v1/native/freetype",
		new: "azul3d.org/native/freetype.v1",
		alias: None,
	},
];

/// Applies every rename in the table until the file stops changing.
///
/// Each pass tries every rename in table order, then repeats while a pass
/// rewrote anything, so a rename whose target is itself a deprecated path in
/// a later table revision still converges within one call. Returns whether
/// any pass changed the file. Termination relies on the table being acyclic;
/// a table with a rewrite cycle would spin here forever.
pub fn apply(file: &mut File) -> bool {
	let mut changed = false;

	loop {
		let mut pass_changed = false;

		for rename in RENAMES {
			let rewrote = match rename.alias {
				Some(alias) => rewrite_import_with_alias(file, rename.old, rename.new, alias),
				None => rewrite_import(file, rename.old, rename.new),
			};

			pass_changed |= rewrote;
		}

		if !pass_changed {
			break;
		}

		changed = true;
	}

	changed
}

/// Registration descriptor for this fix.
pub fn fix() -> Fix {
	Fix {
		name: "azulnewversions",
		date: "2014-7-10",
		apply,
		description: "Updates import paths from old Google Code paths to new GitHub ones.\n\n\
			http://azul3d.org/news/2014/important-import-paths-have-changed.html\n",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ast::ImportDecl;

	#[test]
	fn rewrites_multiple_rules_in_one_call() {
		let mut file = File::from(vec![
			ImportDecl::new("azul3d.org/v0/audio"),
			ImportDecl::new("azul3d.org/v1/chippy"),
		]);

		assert!(apply(&mut file));
		assert_eq!(file.imports()[0].path, "azul3d.org/audio.v1");
		assert_eq!(file.imports()[1].path, "azul3d.org/chippy.v1");
	}

	#[test]
	fn leaves_unknown_paths_alone() {
		let original = vec![ImportDecl::new("azul3d.org/v2/math")];
		let mut file = File::from(original.clone());

		assert!(!apply(&mut file));
		assert_eq!(file.imports(), original.as_slice());
	}

	#[test]
	fn no_deprecated_path_survives_an_apply() {
		let mut file = File::from(
			RENAMES.iter().map(|rename| ImportDecl::new(rename.old)).collect::<Vec<_>>(),
		);

		assert!(apply(&mut file));

		for import in file.imports() {
			assert!(
				RENAMES.iter().all(|rename| rename.old != import.path),
				"deprecated path survived: {}",
				import.path
			);
		}
	}

	#[test]
	fn table_has_no_rewrite_cycles() {
		// The fixed-point loop terminates only while this holds.
		for rename in RENAMES {
			assert!(
				RENAMES.iter().all(|other| other.old != rename.new),
				"rename target {} is itself a deprecated path",
				rename.new
			);
		}
	}

	#[test]
	fn math_rename_aliases_only_unaliased_imports() {
		let mut file = File::from(vec![
			ImportDecl::new("azul3d.org/v1/math"),
			ImportDecl::aliased("azul3d.org/v0/math", "sheep"),
		]);

		assert!(apply(&mut file));
		assert_eq!(file.imports()[0].path, "azul3d.org/lmath.v1");
		assert_eq!(file.imports()[0].alias, Some("math".to_owned()));
		assert_eq!(file.imports()[1].path, "azul3d.org/lmath.v1");
		assert_eq!(file.imports()[1].alias, Some("sheep".to_owned()));
	}
}
