pub mod anxiety;
pub mod depression;

use std::sync::Arc;

use mizan_core::models::module::AssessmentModule;

/// Parse an embedded module definition. A parse failure is logged and the
/// module is treated as absent.
pub(crate) fn parse_builtin(id: &str, json: &str) -> Option<Arc<AssessmentModule>> {
    match AssessmentModule::from_json(json) {
        Ok(module) => Some(Arc::new(module)),
        Err(e) => {
            tracing::error!(module_id = id, error = %e, "built-in module failed to parse");
            None
        }
    }
}
