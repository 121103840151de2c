//! Cargo manifest based module resolver
//!
//! Classifies a source file into the Cargo target it is compiled into, using
//! the nearest `Cargo.toml` with a `[package]` section.

use crate::{
    error::{Error, Result},
    interfaces::ModuleResolver,
    types::{CrateTarget, TargetKind},
};
use cargo_toml::{Manifest, Product};
use lsp_types::Url;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name Cargo gives every build script target
const BUILD_SCRIPT_TARGET: &str = "build-script-build";

#[derive(Debug, Default, Clone, Copy)]
pub struct CargoModuleResolver;

impl CargoModuleResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the target of a file on disk.
    ///
    /// `Ok(None)` means the file belongs to a package but to none of its
    /// targets (a helper outside `src/`, say).
    pub fn resolve_path(&self, file_path: &Path) -> Result<Option<CrateTarget>> {
        let Some((manifest_path, manifest)) = Self::find_package_manifest(file_path)? else {
            return Ok(file_stem(file_path)
                .filter(|_| is_rust_file(file_path))
                .map(|name| CrateTarget::new(name, TargetKind::Standalone)));
        };

        let project_root = manifest_path
            .parent()
            .ok_or_else(|| Error::ParseError("Cannot determine project root".to_string()))?;

        if let Some(target) = explicit_target(&manifest, project_root, file_path) {
            return Ok(Some(target));
        }
        Ok(conventional_target(&manifest, project_root, file_path))
    }

    /// The nearest manifest above `start_path` that declares a package.
    /// Virtual workspace manifests are skipped.
    pub fn find_package_manifest(start_path: &Path) -> Result<Option<(PathBuf, Manifest)>> {
        let mut current = start_path.parent();

        while let Some(dir) = current {
            let cargo_toml = dir.join("Cargo.toml");
            if cargo_toml.is_file() {
                let contents = std::fs::read_to_string(&cargo_toml)?;
                let manifest = Manifest::from_str(&contents).map_err(|e| {
                    Error::ParseError(format!("Failed to parse {}: {e}", cargo_toml.display()))
                })?;
                if manifest.package.is_some() {
                    debug!("Using manifest {:?} for {:?}", cargo_toml, start_path);
                    return Ok(Some((cargo_toml, manifest)));
                }
            }
            current = dir.parent();
        }

        Ok(None)
    }
}

impl ModuleResolver for CargoModuleResolver {
    fn resolve_target(&self, uri: &Url) -> Option<CrateTarget> {
        let file_path = uri.to_file_path().ok()?;
        match self.resolve_path(&file_path) {
            Ok(target) => target,
            Err(e) => {
                warn!("Failed to resolve target of {}: {}", uri, e);
                None
            }
        }
    }
}

/// Targets declared with an explicit `path` in the manifest
fn explicit_target(manifest: &Manifest, project_root: &Path, file_path: &Path) -> Option<CrateTarget> {
    let declared = |product: &Product| {
        product
            .path
            .as_ref()
            .is_some_and(|path| project_root.join(path) == file_path)
    };
    let named = |product: &Product| product.name.clone().or_else(|| file_stem(file_path));

    if manifest.lib.as_ref().is_some_and(|lib| declared(lib)) {
        let package_name = package_name(manifest)?;
        return Some(CrateTarget::new(
            default_lib_name(manifest, &package_name),
            TargetKind::Lib,
        ));
    }

    let groups = [
        (&manifest.bin, TargetKind::Bin),
        (&manifest.example, TargetKind::Example),
        (&manifest.test, TargetKind::Test),
        (&manifest.bench, TargetKind::Bench),
    ];
    for (products, kind) in groups {
        if let Some(product) = products.iter().find(|&product| declared(product)) {
            return named(product).map(|name| CrateTarget::new(name, kind));
        }
    }

    None
}

/// Targets Cargo discovers from the standard package layout
fn conventional_target(manifest: &Manifest, project_root: &Path, file_path: &Path) -> Option<CrateTarget> {
    let relative = file_path.strip_prefix(project_root).ok()?;
    let components: Vec<&str> = relative.iter().filter_map(|c| c.to_str()).collect();
    let package_name = package_name(manifest)?;

    match components.as_slice() {
        ["build.rs"] => Some(CrateTarget::new(BUILD_SCRIPT_TARGET, TargetKind::Build)),
        ["src", "lib.rs"] => Some(CrateTarget::new(
            default_lib_name(manifest, &package_name),
            TargetKind::Lib,
        )),
        ["src", "main.rs"] => Some(CrateTarget::new(package_name, TargetKind::Bin)),
        ["src", "bin", file] => stem_of(file).map(|name| CrateTarget::new(name, TargetKind::Bin)),
        ["src", "bin", dir, "main.rs"] => Some(CrateTarget::new(*dir, TargetKind::Bin)),
        ["src", ..] => owning_src_target(manifest, project_root, package_name),
        [dir, rest @ ..] => {
            let kind = match *dir {
                "examples" => TargetKind::Example,
                "tests" => TargetKind::Test,
                "benches" => TargetKind::Bench,
                _ => return None,
            };
            match rest {
                [file] => stem_of(file).map(|name| CrateTarget::new(name, kind)),
                [target_dir, "main.rs"] => Some(CrateTarget::new(*target_dir, kind)),
                _ => None,
            }
        }
        [] => None,
    }
}

/// Module files under `src/` belong to the library if there is one,
/// otherwise to the default binary
fn owning_src_target(manifest: &Manifest, project_root: &Path, package_name: String) -> Option<CrateTarget> {
    if manifest.lib.is_some() || project_root.join("src/lib.rs").is_file() {
        return Some(CrateTarget::new(
            default_lib_name(manifest, &package_name),
            TargetKind::Lib,
        ));
    }
    if project_root.join("src/main.rs").is_file() {
        return Some(CrateTarget::new(package_name, TargetKind::Bin));
    }
    None
}

fn package_name(manifest: &Manifest) -> Option<String> {
    manifest.package.as_ref().map(|package| package.name.clone())
}

fn default_lib_name(manifest: &Manifest, package_name: &str) -> String {
    manifest
        .lib
        .as_ref()
        .and_then(|lib| lib.name.clone())
        .unwrap_or_else(|| package_name.replace('-', "_"))
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

fn stem_of(file: &str) -> Option<String> {
    file.strip_suffix(".rs").map(str::to_string)
}

fn is_rust_file(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("rs")
}
