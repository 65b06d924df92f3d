//! # Catalog Loading
//!
//! Picks the catalog source at startup. The catalog is read once and is
//! immutable for the rest of the process.

use std::path::Path;

use tabletreat_core::{CatalogProvider, StaticCatalog};
use tracing::info;

use crate::error::StartupError;

/// Loads the catalog from `path`, or the embedded sample when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<StaticCatalog, StartupError> {
    let Some(path) = path else {
        let catalog = StaticCatalog::sample();
        info!(restaurants = catalog.restaurants().len(), "using embedded sample catalog");
        return Ok(catalog);
    };

    let json = std::fs::read_to_string(path).map_err(|source| StartupError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = StaticCatalog::from_json(&json).map_err(|source| StartupError::CatalogInvalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), restaurants = catalog.restaurants().len(), "catalog loaded");
    Ok(catalog)
}
