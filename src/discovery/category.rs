use std::path::Path;

/// Names of the directories strictly between `root` and `dir`, outermost
/// first, joined by `separator`. Empty when `dir` sits directly under `root`.
pub fn derive_category(dir: &Path, root: &Path, separator: &str) -> String {
    let mut segments = Vec::new();
    let mut current = dir.parent();

    while let Some(ancestor) = current {
        if ancestor == root {
            break;
        }
        if let Some(name) = ancestor.file_name() {
            segments.push(name.to_string_lossy().into_owned());
        }
        current = ancestor.parent();
    }

    segments.reverse();
    segments.join(separator)
}

/// Prefixes a derived category with the scan root's name. A case directly
/// under the root is categorised by the root name alone.
pub fn qualified_category(root_name: &str, category: &str, separator: &str) -> String {
    if category.is_empty() {
        root_name.to_string()
    } else {
        format!("{root_name}{separator}{category}")
    }
}
