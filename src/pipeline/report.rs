//! Report generation

use crate::utils::format_utils::label_column;
use super::context::InvocationContext;

/// Formats the fixed-layout summary of an invocation
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn new() -> Self {
        ReportGenerator
    }

    /// Build the report text
    ///
    /// ```text
    /// ROI Size:           512x512
    /// Processed Box:      Region 14
    /// ```
    ///
    /// followed by one line for a written or failed export.
    pub fn generate(&self, context: &InvocationContext) -> String {
        let mut report = String::new();

        report.push_str(&format!("{}{}x{}\n",
                                 label_column("ROI Size:"), context.roi_size, context.roi_size));
        report.push_str(&format!("{}{}{}\n",
                                 label_column("Processed Box:"), context.overlay_name, context.overlay_count));

        if let Some(line) = context.export.report_line() {
            report.push_str(&line);
            report.push('\n');
        }

        report
    }
}
