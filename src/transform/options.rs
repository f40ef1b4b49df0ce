use crate::model::SelectOption;

/// Split a comma-delimited choice list into select options `option-0`, `option-1`, ...
///
/// Labels are trimmed and blank entries dropped; positions count kept labels only.
pub fn parse_options(source: &str) -> Vec<SelectOption> {
    source
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .enumerate()
        .map(|(index, label)| SelectOption {
            id: format!("option-{}", index),
            label: label.to_string(),
        })
        .collect()
}
