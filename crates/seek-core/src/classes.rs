//! CSS class list helpers

/// Join class names, skipping empty entries and duplicates.
///
/// Caller overrides come first so they read naturally next to the base
/// classes in the rendered markup.
#[must_use]
pub fn merge_classes<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut merged: Vec<&str> = Vec::new();
    for class in classes.into_iter().flatten() {
        for name in class.split_whitespace() {
            if !merged.contains(&name) {
                merged.push(name);
            }
        }
    }
    merged.join(" ")
}
