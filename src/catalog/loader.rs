use {
    crate::catalog::model::Catalog,
    serde_json::error::Category,
    std::{fs, io, path::Path},
};

/// Why the catalog could not be obtained.
///
/// The display form is what clients see, so it never includes the full path
/// or the parser's position information.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error("{name} file not found")]
    SourceNotFound { name: String },

    #[error("Invalid JSON format")]
    MalformedData { detail: String },

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl LoadError {
    fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                LoadError::SourceNotFound {
                    name: path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string()),
                }
            }
            _ => LoadError::Unknown(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Io => LoadError::Unknown(err.to_string()),
            Category::Syntax | Category::Data | Category::Eof => LoadError::MalformedData {
                detail: err.to_string(),
            },
        }
    }
}

/// Read and parse the catalog document at `path`.
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog, LoadError> {
    let bytes = fs::read(path).map_err(|err| LoadError::from_io(path, err))?;

    parse_catalog(&bytes)
}

pub fn parse_catalog(bytes: &[u8]) -> Result<Catalog, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}
