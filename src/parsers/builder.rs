//! Package model construction from parsed source files
//!
//! [`PackageBuilder`] accumulates declarations from any number of files
//! believed to belong to one logical package (the walker enforces that by
//! only feeding files from the selected package name) and finalizes them
//! into a [`Package`], or nothing if the scan yielded no declarations.

use crate::error::{Result, ScanError};
use crate::models::package::{go_exported, Declaration, Package};
use crate::parsers::go_source::SourceFile;
use tree_sitter::Node;

/// Incremental builder for one package model
pub struct PackageBuilder {
    name: String,
    visibility: fn(&str) -> bool,
    files_scanned: usize,
    types: Vec<Declaration>,
    funcs: Vec<Declaration>,
    values: Vec<Declaration>,
}

impl PackageBuilder {
    /// Create a builder using Go's export-by-case visibility rule
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_visibility(name, go_exported)
    }

    /// Create a builder with a custom visibility predicate
    pub fn with_visibility(name: impl Into<String>, visibility: fn(&str) -> bool) -> Self {
        Self {
            name: name.into(),
            visibility,
            files_scanned: 0,
            types: Vec::new(),
            funcs: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Scan one file's package-level declarations into the model.
    ///
    /// Types go to `types`, functions and methods to `funcs`, `var` and
    /// `const` specs to `values`, each in source order with no
    /// deduplication.
    pub fn scan_file(&mut self, file: &SourceFile) -> Result<()> {
        self.files_scanned += 1;
        let src = file.source.as_bytes();
        let root = file.tree.root_node();
        let mut cursor = root.walk();
        for node in root.named_children(&mut cursor) {
            match node.kind() {
                "function_declaration" | "method_declaration" => {
                    let name = Self::name_field(&node, src, file)?;
                    self.funcs.push(Declaration::new(name, self.visibility));
                }
                "type_declaration" => {
                    let mut specs = node.walk();
                    for spec in node.named_children(&mut specs) {
                        if matches!(spec.kind(), "type_spec" | "type_alias") {
                            let name = Self::name_field(&spec, src, file)?;
                            self.types.push(Declaration::new(name, self.visibility));
                        }
                    }
                }
                "var_declaration" | "const_declaration" => {
                    self.scan_value_specs(&node, src, file)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Consume the builder, yielding the model or `None` when no file was
    /// scanned or no declarations were found
    pub fn finalize(self) -> Option<Package> {
        if self.files_scanned == 0 {
            return None;
        }
        let pkg = Package {
            name: self.name,
            types: self.types,
            funcs: self.funcs,
            values: self.values,
        };
        if pkg.is_empty() {
            return None;
        }
        Some(pkg)
    }

    // A var_spec or const_spec names one or more identifiers; every one is
    // a separate value declaration.
    fn scan_value_specs(&mut self, decl: &Node, src: &[u8], file: &SourceFile) -> Result<()> {
        let spec_kind = if decl.kind() == "var_declaration" {
            "var_spec"
        } else {
            "const_spec"
        };
        let mut specs = decl.walk();
        for spec in decl.named_children(&mut specs) {
            if spec.kind() != spec_kind {
                continue;
            }
            let mut names = spec.walk();
            for ident in spec.children_by_field_name("name", &mut names) {
                if !ident.is_named() {
                    continue;
                }
                let name = Self::node_text(&ident, src, file)?;
                self.values.push(Declaration::new(name, self.visibility));
            }
        }
        Ok(())
    }

    fn name_field<'a>(node: &Node, src: &'a [u8], file: &SourceFile) -> Result<&'a str> {
        let name = node.child_by_field_name("name").ok_or_else(|| {
            ScanError::scan(&file.path, format!("{} without a name", node.kind()))
        })?;
        Self::node_text(&name, src, file)
    }

    fn node_text<'a>(node: &Node, src: &'a [u8], file: &SourceFile) -> Result<&'a str> {
        node.utf8_text(src)
            .map_err(|e| ScanError::scan(&file.path, format!("invalid UTF-8 in identifier: {e}")))
    }
}
