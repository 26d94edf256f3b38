use ceptgen_common::schema::Selector;

/// Scheme prefix of accessibility-tree selectors. CodeceptJS has no
/// addressing mode for these, so they are never emitted.
pub const ARIA_PREFIX: &str = "aria/";

/// Render a value as a JavaScript string literal (JSON escaping rules).
pub fn js_literal(value: &str) -> String {
    serde_json::Value::String(value.to_owned()).to_string()
}

/// Pick the selector literal to emit for a step.
///
/// Accessibility selectors are excluded outright. When the flow carries a
/// preferred attribute, the first surviving group mentioning it wins;
/// preference is best-effort and falls back to the unfiltered survivors.
/// Only the first string of a group is ever consulted.
///
/// Returns `None` when nothing usable remains; the caller skips the step and
/// records a diagnostic.
pub fn resolve(selectors: &[Selector], preferred_attribute: Option<&str>) -> Option<String> {
    let non_aria: Vec<&Selector> = selectors
        .iter()
        .filter(|group| {
            group
                .first()
                .is_some_and(|value| !value.starts_with(ARIA_PREFIX))
        })
        .collect();

    if let Some(attribute) = preferred_attribute {
        let preferred = non_aria
            .iter()
            .find(|group| group.first().is_some_and(|value| value.contains(attribute)));
        if let Some(group) = preferred {
            return group.first().map(js_literal);
        }
    }

    non_aria.first().and_then(|group| group.first()).map(js_literal)
}

/// Flat comma-joined rendering of a selector list, for diagnostics.
pub fn describe(selectors: &[Selector]) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for group in selectors {
        match group {
            Selector::Single(value) => parts.push(value),
            Selector::Parts(values) => parts.extend(values.iter().map(String::as_str)),
        }
    }
    parts.join(",")
}
