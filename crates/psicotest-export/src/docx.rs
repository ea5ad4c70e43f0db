use std::io::Cursor;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType, Table,
    TableCell, TableRow,
};

use psicotest_core::models::interpretation::SeverityTier;

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Twentieths of a point per inch, the unit of OOXML page margins.
const TWIPS_PER_INCH: f64 = 1440.0;

/// Generate a DOCX document from rendered Markdown-ish template output.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` → DOCX Heading 1
/// - `## Heading` → DOCX Heading 2
/// - `### Heading` → DOCX Heading 3
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `**bold**` → bold run
/// - `| a | b |` rows → table (separator rows are dropped, first row bold)
/// - `---` or `***` → page break
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = (styles.margin_inches * TWIPS_PER_INCH).round() as i32;
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut table_rows: Vec<Vec<String>> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with('|') {
            if let Some(cells) = table_cells(trimmed) {
                table_rows.push(cells);
            }
            continue;
        }
        if !table_rows.is_empty() {
            docx = docx.add_table(build_table(&std::mem::take(&mut table_rows), styles));
        }

        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if let Some(text) = trimmed.strip_prefix("### ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading3", styles));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2", styles));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1", styles));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if trimmed == "---" || trimmed == "***" {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }
    if !table_rows.is_empty() {
        docx = docx.add_table(build_table(&table_rows, styles));
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Split a pipe-table row into trimmed cells. Alignment rows such as
/// `|---|:--:|` yield `None`.
fn table_cells(line: &str) -> Option<Vec<String>> {
    let inner = line.trim_matches('|');
    let cells: Vec<String> = inner.split('|').map(|c| c.trim().to_string()).collect();

    let is_separator = cells
        .iter()
        .all(|c| !c.is_empty() && c.chars().all(|ch| matches!(ch, '-' | ':')));
    if is_separator { None } else { Some(cells) }
}

fn build_table(rows: &[Vec<String>], styles: &DocumentStyles) -> Table {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, cells)| {
            let cells = cells
                .iter()
                .map(|text| {
                    let mut run = body_run(text, styles);
                    if index == 0 {
                        run = run.bold();
                    } else if styles.tier_colors
                        && let Some(tier) = SeverityTier::ALL
                            .iter()
                            .find(|t| t.label() == text.as_str())
                    {
                        run = run.color(tier.color().trim_start_matches('#'));
                    }
                    TableCell::new().add_paragraph(Paragraph::new().add_run(run))
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();
    Table::new(rows)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }

        let after_start = &remaining[start + 2..];
        match after_start.find("**") {
            Some(end) => {
                runs.push(body_run(&after_start[..end], styles).bold());
                remaining = &after_start[end + 2..];
            }
            None => {
                // Unclosed marker: keep the asterisks as literal text
                runs.push(body_run(&remaining[start..], styles));
                return runs;
            }
        }
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }

    runs
}
