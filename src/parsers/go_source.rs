//! Go source parsing using tree-sitter
//!
//! [`GoParser`] wraps the tree-sitter Go grammar behind a small interface:
//! parse one source string, or parse every matching file in a directory and
//! group the results by declared package name. The syntax trees themselves
//! are opaque to the rest of the crate; only the declaration scanner in
//! [`super::builder`] looks inside them.

use crate::error::{Result, ScanError};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Parser, Tree};

/// One parsed Go source file
#[derive(Debug)]
pub struct SourceFile {
    /// Path the source was read from
    pub path: PathBuf,
    /// Raw source text, kept alive for node text extraction
    pub source: String,
    pub(crate) tree: Tree,
}

impl SourceFile {
    /// The package name declared by this file's `package` clause, if any
    pub fn package_name(&self) -> Option<&str> {
        let root = self.tree.root_node();
        let mut cursor = root.walk();
        for child in root.named_children(&mut cursor) {
            if child.kind() != "package_clause" {
                continue;
            }
            let mut inner = child.walk();
            for node in child.named_children(&mut inner) {
                if node.kind() == "package_identifier" {
                    return node.utf8_text(self.source.as_bytes()).ok();
                }
            }
        }
        None
    }
}

/// All files in one directory declaring the same package name
pub struct PackageFiles {
    /// Declared package name
    pub name: String,
    /// Files in directory-enumeration order
    pub files: Vec<SourceFile>,
}

/// Parser for Go source files
pub struct GoParser {
    parser: Parser,
}

impl GoParser {
    /// Create a parser with the Go grammar loaded
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&tree_sitter_go::language())?;
        Ok(Self { parser })
    }

    /// Parse a single source string.
    ///
    /// A tree containing syntax errors is treated as a parse failure; the
    /// walk never works with partially valid files.
    pub fn parse_source(&mut self, path: impl Into<PathBuf>, source: String) -> Result<SourceFile> {
        let path = path.into();
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ScanError::parse(&path, "parser returned no tree"))?;
        if tree.root_node().has_error() {
            return Err(ScanError::parse(&path, "syntax errors in file"));
        }
        Ok(SourceFile { path, source, tree })
    }

    /// Parse every `.go` file in `dir` accepted by `filter`, grouped by
    /// declared package name.
    ///
    /// Files are read in directory-enumeration order and groups preserve the
    /// order in which each package name was first seen. Any read or parse
    /// failure aborts with the offending file's path.
    pub fn parse_dir(
        &mut self,
        dir: &Path,
        filter: impl Fn(&str) -> bool,
    ) -> Result<Vec<PackageFiles>> {
        let mut groups: Vec<PackageFiles> = Vec::new();
        let entries = fs::read_dir(dir).map_err(|e| ScanError::file_read(dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| ScanError::file_read(dir, e))?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if !file_name.ends_with(".go") || !filter(&file_name) {
                continue;
            }
            let file_type = entry
                .file_type()
                .map_err(|e| ScanError::file_read(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            let path = entry.path();
            let source = fs::read_to_string(&path).map_err(|e| ScanError::file_read(&path, e))?;
            let file = self.parse_source(&path, source)?;
            let name = file
                .package_name()
                .ok_or_else(|| ScanError::parse(&path, "missing package clause"))?
                .to_string();
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.files.push(file),
                None => groups.push(PackageFiles {
                    name,
                    files: vec![file],
                }),
            }
        }
        Ok(groups)
    }
}
