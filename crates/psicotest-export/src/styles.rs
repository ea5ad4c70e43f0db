use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text and table cells.
    pub body_font: String,

    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,

    /// Color table cells holding a severity label with that tier's color.
    pub tier_colors: bool,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
            margin_inches: 1.0,
            tier_colors: true,
        }
    }
}
