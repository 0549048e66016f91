//! Model file loader
//!
//! Reads model declarations from a TOML file:
//!
//! ```toml
//! [[model]]
//! type_name = "Post"
//! table_name = "blog_posts"   # optional
//!
//! [[model.fields]]
//! name = "ID"
//! native_type = "i64"
//! tag = "id,primary_key,auto"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tablesmith::ModelDef;

/// Model file errors
#[derive(Debug, thiserror::Error)]
pub enum ModelFileError {
    #[error("failed to read model file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse model file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("model file {} declares no models", path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, Deserialize)]
struct ModelFile {
    #[serde(default)]
    model: Vec<ModelDef>,
}

/// Parse model declarations from TOML text, keeping file order
pub fn parse_models(contents: &str) -> Result<Vec<ModelDef>, toml::de::Error> {
    let file: ModelFile = toml::from_str(contents)?;
    Ok(file.model)
}

/// Load model declarations from a TOML file
///
/// A file that parses but declares no `[[model]]` is an error.
pub fn load_models(path: &Path) -> Result<Vec<ModelDef>, ModelFileError> {
    let contents = fs::read_to_string(path).map_err(|source| ModelFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let models = parse_models(&contents).map_err(|source| ModelFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if models.is_empty() {
        return Err(ModelFileError::Empty {
            path: path.to_path_buf(),
        });
    }

    log::debug!("Loaded {} model(s) from {}", models.len(), path.display());
    Ok(models)
}
