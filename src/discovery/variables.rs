use std::collections::HashMap;

const PLACEHOLDER_OPEN: &str = "$(";
const PLACEHOLDER_CLOSE: char = ')';

/// Named substitutions for `$(name)` placeholders. Keys are stored lower-cased
/// and lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableMap {
    values: HashMap<String, String>,
}

impl VariableMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.values.insert(name.as_ref().to_lowercase(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(&name.to_lowercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for VariableMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = VariableMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

/// Replaces every `$(name)` in `value` whose name is known to `variables`.
///
/// A placeholder runs from `$(` to the first `)` after it and needs a
/// non-empty name, so nested placeholders are not supported: in
/// `$(a$(b)` the name is `a$(b`. Unknown names, `$()` and an unterminated
/// `$(` are copied through unchanged.
pub fn substitute(value: &str, variables: &VariableMap) -> String {
    let mut resolved = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find(PLACEHOLDER_OPEN) {
        resolved.push_str(&rest[..start]);
        let after_open = &rest[start + PLACEHOLDER_OPEN.len()..];

        let Some(close) = after_open.find(PLACEHOLDER_CLOSE) else {
            resolved.push_str(&rest[start..]);
            return resolved;
        };

        let name = &after_open[..close];
        if name.is_empty() {
            resolved.push_str(PLACEHOLDER_OPEN);
            rest = after_open;
            continue;
        }

        match variables.get(name) {
            Some(replacement) => resolved.push_str(replacement),
            None => resolved.push_str(&rest[start..start + PLACEHOLDER_OPEN.len() + close + 1]),
        }
        rest = &after_open[close + 1..];
    }

    resolved.push_str(rest);
    resolved
}
