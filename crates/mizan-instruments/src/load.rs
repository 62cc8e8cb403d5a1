//! Loading module definitions from JSON files on disk.

use std::path::Path;

use mizan_core::models::module::AssessmentModule;
use tracing::{debug, warn};

use crate::error::InstrumentError;
use crate::validate::validate_module;

pub fn load_module_file(path: &Path) -> Result<AssessmentModule, InstrumentError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InstrumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let module: AssessmentModule =
        serde_json::from_str(&contents).map_err(|source| InstrumentError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), module_id = %module.id(), "module loaded");
    Ok(module)
}

/// Load a module file and reject it if strict validation finds a problem.
pub fn load_module_strict(path: &Path) -> Result<AssessmentModule, InstrumentError> {
    let module = load_module_file(path)?;
    match validate_module(&module).into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(module),
    }
}

/// Load every `*.json` file in `dir`, ordered by file name.
///
/// Validation problems are logged, not fatal: the engine degrades
/// gracefully on malformed content.
pub fn load_module_dir(dir: &Path) -> Result<Vec<AssessmentModule>, InstrumentError> {
    let io_err = |source: std::io::Error| InstrumentError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut modules = Vec::with_capacity(paths.len());
    for path in paths {
        let module = load_module_file(&path)?;
        for issue in validate_module(&module) {
            warn!(path = %path.display(), "{issue}");
        }
        modules.push(module);
    }
    Ok(modules)
}
