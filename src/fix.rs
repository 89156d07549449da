//! Fix descriptors and the registry surface the external driver consumes.
//!
//! The driver owns dispatch: it decides which files to parse, which fixes to
//! run, and what to do when one reports a change. This module only defines
//! what a fix looks like and keeps the shipped ones in one place.

use once_cell::sync::Lazy;

use crate::{ast::File, prelude::*};

/// Every fix this crate ships, in registration order.
pub static BUILTIN: Lazy<Registry> = Lazy::new(Registry::builtin);

/// One registered rewrite rule: its identity plus its entry point.
#[derive(Clone, Copy, Debug)]
pub struct Fix {
	/// Unique rule name, used by the driver for selection and reporting.
	pub name: &'static str,
	/// Date the rule was introduced, `YYYY-M-D`.
	pub date: &'static str,
	/// Entry point. Returns whether the file was mutated.
	pub apply: fn(&mut File) -> bool,
	/// Human-readable description shown by the driver.
	pub description: &'static str,
}

/// Ordered collection of fixes.
#[derive(Debug, Default)]
pub struct Registry {
	fixes: Vec<Fix>,
}
impl Registry {
	/// A registry preloaded with every fix this crate ships.
	pub fn builtin() -> Self {
		Self { fixes: vec![crate::fixes::azul_new_versions::fix()] }
	}

	/// Adds `fix` to the registry.
	///
	/// Fix names identify rules to the driver, so a duplicate name is
	/// rejected rather than shadowed.
	pub fn register(&mut self, fix: Fix) -> Result<()> {
		if self.fixes.iter().any(|existing| existing.name == fix.name) {
			return Err(eyre::eyre!("A fix named `{}` is already registered.", fix.name));
		}

		self.fixes.push(fix);

		Ok(())
	}

	/// Looks up a fix by name.
	pub fn get(&self, name: &str) -> Option<&Fix> {
		self.fixes.iter().find(|fix| fix.name == name)
	}

	/// All registered fixes, in registration order.
	pub fn iter(&self) -> impl Iterator<Item = &Fix> {
		self.fixes.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn builtin_registry_exposes_azulnewversions() {
		let registry = Registry::builtin();
		let fix = registry.get("azulnewversions").expect("Built-in fix.");

		assert_eq!(fix.date, "2014-7-10");
		assert!(fix.description.contains("import paths"));
	}

	#[test]
	fn duplicate_fix_names_are_rejected() {
		let mut registry = Registry::builtin();
		let duplicate = *registry.get("azulnewversions").expect("Built-in fix.");

		assert!(registry.register(duplicate).is_err());
		assert_eq!(registry.iter().count(), 1);
	}

	#[test]
	fn lookup_misses_return_none() {
		assert!(BUILTIN.get("nosuchfix").is_none());
	}
}
