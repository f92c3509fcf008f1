//! Text formatting utilities
//!
//! Helpers for the fixed-layout report and user-facing messages.

/// Width of the label column in reports
pub const LABEL_WIDTH: usize = 20;

/// Join items with commas and a final "or"
///
/// `["tif", "png", "jpg"]` becomes `"tif, png, or jpg"`; two items are
/// joined as `"a or b"`.
pub fn join_with_or<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|item| item.as_ref()).collect();
            format!("{}, or {}", head.join(", "), last.as_ref())
        }
    }
}

/// Left-justify `label` in the report's label column
pub fn label_column(label: &str) -> String {
    format!("{:<width$}", label, width = LABEL_WIDTH)
}
