//! mizan-instruments
//!
//! The assessment engine and the built-in module registry. Pure in-memory
//! logic: question visibility, response normalization, pattern scoring,
//! crisis detection and the session state machine.

pub mod completeness;
pub mod crisis;
pub mod error;
pub mod flow;
pub mod intensity;
pub mod load;
pub mod modules;
pub mod patterns;
pub mod resources;
pub mod summary;
pub mod validate;
pub mod visibility;

use std::sync::Arc;

use mizan_core::models::module::{AssessmentModule, ModuleInfo};

use error::InstrumentError;

/// Trait implemented by each built-in assessment module.
pub trait ModuleDefinition: Send + Sync {
    /// Unique identifier (e.g., "anxiety", "depression").
    fn id(&self) -> &str;

    /// The parsed module, or `None` if its embedded content is malformed.
    fn module(&self) -> Option<Arc<AssessmentModule>>;

    /// `(disorder_id | "module", asset path)` pairs.
    fn hero_images(&self) -> &[(&str, &str)];

    fn metadata(&self) -> Option<ModuleInfo> {
        self.module().map(|m| m.module.clone())
    }

    /// Hero image for a disorder, falling back to the module's image.
    fn hero_image(&self, disorder_id: Option<&str>) -> Option<&str> {
        let key = disorder_id.unwrap_or("module");
        let images = self.hero_images();
        images
            .iter()
            .find(|(id, _)| *id == key)
            .or_else(|| images.iter().find(|(id, _)| *id == "module"))
            .map(|(_, path)| *path)
    }
}

/// Return all registered modules.
pub fn all_modules() -> Vec<Box<dyn ModuleDefinition>> {
    vec![
        Box::new(modules::anxiety::Anxiety),
        Box::new(modules::depression::Depression),
    ]
}

/// Look up a module definition by ID.
pub fn get_module(id: &str) -> Option<Box<dyn ModuleDefinition>> {
    all_modules().into_iter().find(|m| m.id() == id)
}

pub fn module_ids() -> Vec<String> {
    all_modules().iter().map(|m| m.id().to_string()).collect()
}

/// Load a built-in module's content by ID.
pub fn load_module(id: &str) -> Result<Arc<AssessmentModule>, InstrumentError> {
    get_module(id)
        .and_then(|m| m.module())
        .ok_or_else(|| InstrumentError::UnknownModule(id.to_string()))
}

/// Display metadata of every built-in module that parses.
pub fn module_metadata() -> Vec<ModuleInfo> {
    all_modules().iter().filter_map(|m| m.metadata()).collect()
}

/// Whether `disorder_id` exists in built-in module `module_id`.
pub fn validate_disorder(module_id: &str, disorder_id: &str) -> bool {
    load_module(module_id).is_ok_and(|m| m.disorder(disorder_id).is_some())
}

/// Hero image path for a built-in module or one of its disorders.
pub fn hero_image(module_id: &str, disorder_id: Option<&str>) -> Option<String> {
    let module = get_module(module_id)?;
    module.hero_image(disorder_id).map(str::to_string)
}
