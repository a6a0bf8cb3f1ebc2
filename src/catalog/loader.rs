//! Catalog loading from JSON files.

use super::builtin::builtin_catalog;
use super::error::{CatalogError, Result};
use super::registry::{Catalog, CatalogData};
use std::fs;
use std::path::{Path, PathBuf};

/// Default catalog location: ~/.arcana/catalog.json
pub fn default_catalog_path() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(CatalogError::NoHomeDir)?;
    Ok(home_dir.join(".arcana").join("catalog.json"))
}

/// Parse and validate a catalog from a JSON string
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let data: CatalogData = serde_json::from_str(json)?;
    Catalog::new(data)
}

/// Read and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let json = fs::read_to_string(path)?;
    let catalog = parse_catalog(&json)?;
    tracing::debug!(
        path = %path.display(),
        weapons = catalog.weapons().len(),
        upgrades = catalog.weapon_upgrades().len(),
        stats = catalog.stats().len(),
        characters = catalog.characters().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Load a catalog from `path` (or the default location), falling back to
/// the built-in content when the file is missing or invalid.
pub fn load_catalog_or_builtin(path: Option<&Path>) -> Result<Catalog> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_catalog_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!(error = %e, "using built-in catalog");
                return builtin_catalog();
            }
        },
    };
    if !path.exists() {
        tracing::warn!(path = %path.display(), "catalog file missing; using built-in catalog");
        return builtin_catalog();
    }
    match load_catalog(&path) {
        Ok(catalog) => Ok(catalog),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "using built-in catalog");
            builtin_catalog()
        }
    }
}

/// Write catalog data as pretty JSON, creating parent directories
pub fn save_catalog_data(data: &CatalogData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}
