//! The car catalog: data model, loader and queries.
//!
//! The document is read once at start-up into a [`CatalogState`], which is
//! shared read-only by every worker for the rest of the process.

pub mod loader;
pub mod model;
pub mod query;

pub use {
    loader::{load_catalog_from_path, LoadError},
    model::Catalog,
    query::SearchFilter,
};

use std::path::Path;

/// Outcome of the one load attempt made at start-up.
///
/// A failed load is kept as is and handed back on every lookup; there is no
/// partial catalog.
#[derive(Debug)]
pub struct CatalogState {
    loaded: Result<Catalog, LoadError>,
}

impl CatalogState {
    pub fn load(path: &Path) -> Self {
        let loaded = load_catalog_from_path(path);

        match &loaded {
            Ok(catalog) => tracing::info!(
                path = %path.display(),
                brands = catalog.brands.len(),
                models = catalog.brands.iter().map(|b| b.models.len()).sum::<usize>(),
                "Catalog loaded",
            ),
            Err(LoadError::MalformedData { detail }) => tracing::error!(
                path = %path.display(),
                detail = %detail,
                "Catalog is not valid JSON",
            ),
            Err(err) => tracing::error!(path = %path.display(), error = %err, "Catalog failed to load"),
        }

        Self { loaded }
    }

    /// The catalog, or a copy of the load error to report.
    pub fn catalog(&self) -> Result<&Catalog, LoadError> {
        self.loaded.as_ref().map_err(Clone::clone)
    }
}

impl From<Result<Catalog, LoadError>> for CatalogState {
    fn from(loaded: Result<Catalog, LoadError>) -> Self {
        Self { loaded }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_is_handed_back_every_time() {
        let state = CatalogState::load(Path::new("/nonexistent/cars/data.json"));

        for _ in 0..2 {
            assert_eq!(
                state.catalog().unwrap_err(),
                LoadError::SourceNotFound {
                    name: "data.json".into()
                }
            );
        }
    }

    #[test]
    fn loaded_catalog_is_shared() {
        let state = CatalogState::from(loader::parse_catalog(br#"{"brands":[{"name":"Kia"}]}"#));

        assert!(std::ptr::eq(state.catalog().unwrap(), state.catalog().unwrap()));
        assert_eq!(state.catalog().unwrap().brands[0].name, "Kia");
    }
}
