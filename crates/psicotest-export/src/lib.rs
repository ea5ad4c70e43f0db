//! psicotest-export
//!
//! Markdown, HTML and DOCX renditions of evaluated test reports.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
pub mod templates;

use psicotest_core::models::report::TestReport;

use error::ExportError;
use styles::DocumentStyles;

/// Render the built-in Markdown report and convert it to a DOCX document.
pub fn export_docx(report: &TestReport, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let markdown = render::render_markdown(report)?;
    docx::generate_docx(&markdown, styles)
}
