use tera::{Context, Tera};
use tracing::debug;

use crate::error::ExportError;
use crate::report::ReportContext;

/// Built-in Arabic plain-text report.
pub const DEFAULT_REPORT_TEMPLATE: &str = include_str!("../templates/report.txt");

/// Render a Tera template against a report context.
///
/// `template_content` is the raw template string (Jinja2 syntax). The
/// context's fields become the template variables.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &ReportContext,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    debug!(
        template = template_name,
        module_id = %report.module_id,
        bytes = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}

/// Render the built-in report.
pub fn render_report(report: &ReportContext) -> Result<String, ExportError> {
    render_template("report.txt", DEFAULT_REPORT_TEMPLATE, report)
}
