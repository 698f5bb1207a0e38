//! Repo-local architectural lint for the roster service's hexagonal layout.
//!
//! The `roster` crate keeps its entities, ports and use cases in `domain`,
//! drives them from `inbound` HTTP handlers and satisfies their driven ports
//! in `outbound` adapters. The composition root (`server`) and the request
//! middleware sit outside the hexagon. This lint checks that:
//!
//! - `domain` reaches neither adapters, the composition root nor the
//!   middleware, and pulls in no web or operating-system crates
//! - `inbound` adapters never import `outbound` modules or the crates that
//!   back them
//! - `outbound` adapters never import `inbound` modules or the web stack
//!
//! Run it with `cargo run -p architecture-lint`.

use std::collections::BTreeSet;
use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use syn::visit::Visit;
use thiserror::Error;

/// Crate name used when sources refer to themselves by absolute path.
const CRATE_NAME: &str = "roster";

/// Top-level modules of the `roster` crate that the lint understands.
const KNOWN_MODULES: [&str; 5] = ["domain", "inbound", "outbound", "server", "middleware"];

/// A single boundary violation discovered by the linter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// File path relative to `backend/src`.
    pub file: Utf8PathBuf,
    /// Human-readable description of the violated rule.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.message)
    }
}

/// Failure modes returned by the architecture lint.
#[derive(Debug, Error)]
pub enum ArchitectureLintError {
    /// Filesystem traversal or reading failed.
    #[error("I/O error while linting architecture ({path}): {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: io::Error,
    },
    /// Rust source parsing failed or the file sits outside a known layer.
    #[error("failed to lint {file}: {message}")]
    Parse { file: Utf8PathBuf, message: String },
    /// One or more boundary violations were found.
    #[error("architecture boundary violations:\n{}", render_violations(.0))]
    Violations(Vec<Violation>),
}

fn render_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| format!("- {violation}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Lint the backend crate sources on disk.
///
/// `backend_dir` must be the directory holding the roster crate's
/// `Cargo.toml`; sources are read from its `src/` directory.
pub fn lint_backend_sources(backend_dir: &Utf8Path) -> Result<(), ArchitectureLintError> {
    let src_dir = backend_dir.join("src");
    let sources = collect_lint_sources(&src_dir)?;
    lint_sources(&sources)
}

/// Lint the provided Rust sources. Intended for unit and behaviour tests.
pub fn lint_sources(sources: &[LintSource]) -> Result<(), ArchitectureLintError> {
    let mut violations = Vec::new();

    for source in sources {
        let layer = ModuleLayer::infer_from_path(&source.file).ok_or_else(|| {
            ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: "unable to infer module layer from file path".to_owned(),
            }
        })?;
        let parsed =
            syn::parse_file(&source.contents).map_err(|err| ArchitectureLintError::Parse {
                file: source.file.clone(),
                message: err.to_string(),
            })?;
        violations.extend(lint_parsed_source(&source.file, layer, &parsed));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ArchitectureLintError::Violations(violations))
    }
}

/// A Rust source file to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintSource {
    /// Path relative to `backend/src`.
    pub file: Utf8PathBuf,
    pub contents: String,
}

impl LintSource {
    pub fn new(file: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            contents: contents.into(),
        }
    }
}

/// The architectural layer inferred from a file path under `backend/src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ModuleLayer {
    Domain,
    Inbound,
    Outbound,
}

impl ModuleLayer {
    const LINTED: [Self; 3] = [Self::Domain, Self::Inbound, Self::Outbound];

    fn infer_from_path(relative_path: &Utf8Path) -> Option<Self> {
        let first = relative_path.components().next()?.as_str();
        Self::LINTED
            .into_iter()
            .find(|layer| layer.dir_name() == first)
    }

    const fn dir_name(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
        }
    }

    fn forbidden_module_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Domain => BTreeSet::from(["inbound", "middleware", "outbound", "server"]),
            Self::Inbound => BTreeSet::from(["outbound", "server"]),
            Self::Outbound => BTreeSet::from(["inbound", "middleware", "server"]),
        }
    }

    fn forbidden_crate_roots(self) -> BTreeSet<&'static str> {
        match self {
            Self::Domain => BTreeSet::from([
                "actix_service",
                "actix_web",
                "actix_web_prom",
                "cap_std",
                "sysinfo",
                "utoipa",
                "utoipa_swagger_ui",
            ]),
            Self::Inbound => BTreeSet::from(["cap_std", "sysinfo"]),
            Self::Outbound => BTreeSet::from([
                "actix_service",
                "actix_web",
                "actix_web_prom",
                "utoipa",
                "utoipa_swagger_ui",
            ]),
        }
    }
}

fn lint_parsed_source(file: &Utf8Path, layer: ModuleLayer, parsed: &syn::File) -> Vec<Violation> {
    let forbidden_modules = layer.forbidden_module_roots();
    let forbidden_crates = layer.forbidden_crate_roots();
    let layer_name = layer.dir_name();

    let mut collector = PathCollector::default();
    collector.visit_file(parsed);

    let mut messages = BTreeSet::new();
    for segments in &collector.paths {
        if let Some(root) = internal_module_root(segments)
            .and_then(|root| forbidden_modules.get(root).copied())
        {
            messages.insert(format!(
                "{layer_name} module must not depend on crate::{root}"
            ));
        }

        if let Some(root) = external_crate_root(segments)
            .and_then(|root| forbidden_crates.get(root).copied())
        {
            messages.insert(format!(
                "{layer_name} module must not depend on external crate `{root}`"
            ));
        }
    }

    messages
        .into_iter()
        .map(|message| Violation {
            file: file.to_path_buf(),
            message,
        })
        .collect()
}

fn is_relative_module_segment(segment: &str) -> bool {
    matches!(segment, "crate" | "self" | "super")
}

fn internal_module_root(segments: &[String]) -> Option<&str> {
    let first = segments.first()?.as_str();
    if KNOWN_MODULES.contains(&first) {
        return Some(first);
    }
    let start_index = if is_relative_module_segment(first) {
        segments
            .iter()
            .position(|segment| !is_relative_module_segment(segment.as_str()))?
    } else if first == CRATE_NAME {
        1
    } else {
        return None;
    };
    segments.get(start_index).map(String::as_str)
}

fn external_crate_root(segments: &[String]) -> Option<&str> {
    let root = segments.first()?.as_str();
    if is_relative_module_segment(root) || root == CRATE_NAME {
        return None;
    }
    Some(root)
}

#[derive(Default)]
struct PathCollector {
    paths: BTreeSet<Vec<String>>,
}

impl PathCollector {
    fn record_path(&mut self, path: &syn::Path) {
        let segments = path
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect::<Vec<_>>();
        if !segments.is_empty() {
            self.paths.insert(segments);
        }
    }

    fn record_use_tree(&mut self, tree: &syn::UseTree, mut prefix: Vec<String>) {
        match tree {
            syn::UseTree::Path(path) => {
                prefix.push(path.ident.to_string());
                self.record_use_tree(&path.tree, prefix);
            }
            syn::UseTree::Name(name) => {
                prefix.push(name.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Rename(rename) => {
                prefix.push(rename.ident.to_string());
                self.paths.insert(prefix);
            }
            syn::UseTree::Glob(_) => {
                prefix.push("*".to_owned());
                self.paths.insert(prefix);
            }
            syn::UseTree::Group(group) => {
                for item in &group.items {
                    self.record_use_tree(item, prefix.clone());
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for PathCollector {
    fn visit_path(&mut self, node: &'ast syn::Path) {
        self.record_path(node);
        syn::visit::visit_path(self, node);
    }

    fn visit_item_use(&mut self, node: &'ast syn::ItemUse) {
        self.record_use_tree(&node.tree, Vec::new());
    }
}

fn collect_lint_sources(src_dir: &Utf8Path) -> Result<Vec<LintSource>, ArchitectureLintError> {
    let io_error = |path: &Utf8Path| {
        let path = path.to_path_buf();
        move |source: io::Error| ArchitectureLintError::Io { path, source }
    };
    let root = Dir::open_ambient_dir(src_dir, ambient_authority()).map_err(io_error(src_dir))?;

    let mut sources = Vec::new();
    for layer in ModuleLayer::LINTED {
        let name = layer.dir_name();
        let is_dir = root
            .metadata(name)
            .map(|metadata| metadata.is_dir())
            .unwrap_or(false);
        if !is_dir {
            continue;
        }
        let relative = Utf8PathBuf::from(name);
        let dir = root
            .open_dir(name)
            .map_err(io_error(&src_dir.join(name)))?;
        collect_sources_under(src_dir, &dir, &relative, &mut sources)?;
    }
    sources.sort_by(|left, right| left.file.cmp(&right.file));
    Ok(sources)
}

fn collect_sources_under(
    src_dir: &Utf8Path,
    dir: &Dir,
    relative: &Utf8Path,
    sources: &mut Vec<LintSource>,
) -> Result<(), ArchitectureLintError> {
    let io_error =
        |path: Utf8PathBuf| move |source: io::Error| ArchitectureLintError::Io { path, source };
    let entries = dir.entries().map_err(io_error(src_dir.join(relative)))?;
    for entry in entries {
        let entry = entry.map_err(io_error(src_dir.join(relative)))?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            return Err(ArchitectureLintError::Parse {
                file: relative.to_path_buf(),
                message: format!("non UTF-8 file name {file_name:?}"),
            });
        };
        let child = relative.join(name);
        let file_type = entry.file_type().map_err(io_error(src_dir.join(&child)))?;

        if file_type.is_dir() {
            let nested = entry.open_dir().map_err(io_error(src_dir.join(&child)))?;
            collect_sources_under(src_dir, &nested, &child, sources)?;
            continue;
        }

        if child.extension() != Some("rs") {
            continue;
        }
        let contents = dir
            .read_to_string(name)
            .map_err(io_error(src_dir.join(&child)))?;
        sources.push(LintSource::new(child, contents));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
