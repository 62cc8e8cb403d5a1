//! Where assessment modules come from: the built-in registry, or a content
//! directory named by the config.

use std::path::Path;
use std::sync::Arc;

use mizan_core::models::module::AssessmentModule;
use mizan_instruments::load::load_module_dir;

pub enum Catalog {
    Builtin,
    Directory(Vec<Arc<AssessmentModule>>),
}

impl Catalog {
    pub fn open(content_dir: Option<&Path>) -> eyre::Result<Self> {
        let Some(dir) = content_dir else {
            return Ok(Self::Builtin);
        };
        let modules = load_module_dir(dir)?;
        tracing::info!(dir = %dir.display(), modules = modules.len(), "content directory loaded");
        Ok(Self::Directory(modules.into_iter().map(Arc::new).collect()))
    }

    pub fn modules(&self) -> Vec<Arc<AssessmentModule>> {
        match self {
            Self::Builtin => mizan_instruments::all_modules()
                .iter()
                .filter_map(|m| m.module())
                .collect(),
            Self::Directory(modules) => modules.clone(),
        }
    }

    pub fn module(&self, id: &str) -> eyre::Result<Arc<AssessmentModule>> {
        match self {
            Self::Builtin => Ok(mizan_instruments::load_module(id)?),
            Self::Directory(modules) => modules
                .iter()
                .find(|m| m.id() == id)
                .cloned()
                .ok_or_else(|| eyre::eyre!("module '{id}' not found in content directory")),
        }
    }
}
