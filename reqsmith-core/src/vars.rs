use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([^}]+)\}\}").expect("valid regex"));

/// Substitutes `{{name}}` placeholders from a flat variable map.
///
/// The name is trimmed of surrounding whitespace before lookup, so
/// `{{ host }}` and `{{host}}` resolve identically. A name with no entry in
/// the map is left in place verbatim, braces included. Replacement is a
/// single pass: values are never re-scanned, so a variable whose value
/// contains `{{...}}` does not expand further.
pub fn resolve(input: &str, vars: &HashMap<String, String>) -> String {
    if vars.is_empty() || !input.contains("{{") {
        return input.to_string();
    }

    PLACEHOLDER_RE
        .replace_all(input, |caps: &regex::Captures<'_>| {
            let name = caps[1].trim();
            match vars.get(name) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
