//! Built-in rewrite rules, one module per fix.

pub mod azul_new_versions;
