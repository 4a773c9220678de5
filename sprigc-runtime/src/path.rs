use serde_json::Value;

use crate::re::BAIL_RE;

/// Compile a dotted property path into a getter over a runtime value.
///
/// `None` when the path contains anything outside the identifier/dot/`$`
/// character class; such strings are full expressions and belong to an
/// expression evaluator, not this resolver.
pub fn parse_path(path: &str) -> Option<impl Fn(&Value) -> Option<Value>> {
    if BAIL_RE.is_match(path) {
        return None;
    }
    let segments: Vec<String> = path.split('.').map(str::to_string).collect();
    Some(move |value: &Value| {
        let mut current = value;
        for segment in &segments {
            current = current.get(segment)?;
        }
        Some(current.clone())
    })
}
