use tera::{Context, Tera};

use psicotest_core::models::report::TestReport;

use crate::error::ExportError;
use crate::templates;

/// Render a Tera template with a TestReport.
///
/// The `template_content` is the raw template string (Jinja2 syntax). The
/// report fields become the template context variables, together with
/// `instrument_name` and `completed_on`. Templates whose name ends in
/// `.html` are autoescaped.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &TestReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![".html", ".htm"]);
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let context = report_context(report)?;
    let rendered = tera.render(template_name, &context)?;

    tracing::debug!(
        template = template_name,
        report_id = %report.id,
        bytes = rendered.len(),
        "report rendered"
    );
    Ok(rendered)
}

pub fn render_markdown(report: &TestReport) -> Result<String, ExportError> {
    render_template(templates::MARKDOWN_NAME, templates::MARKDOWN, report)
}

pub fn render_html(report: &TestReport) -> Result<String, ExportError> {
    render_template(templates::HTML_NAME, templates::HTML, report)
}

fn report_context(report: &TestReport) -> Result<Context, ExportError> {
    // Convert the report to a Tera context via serde_json
    let value = serde_json::to_value(report)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    context.insert("instrument_name", report.instrument.display_name());
    context.insert(
        "completed_on",
        &report.completed_at.strftime("%d/%m/%Y %H:%M UTC").to_string(),
    );
    Ok(context)
}
