//! Custom assertions for chapter output

/// Assert that `content` has a heading line exactly equal to `heading`
pub fn assert_has_heading(content: &str, heading: &str) {
    assert!(
        content.lines().any(|line| line == heading),
        "Expected heading {heading:?}, got:\n{content}"
    );
}

/// Assert that no line of `content` mentions `name`
pub fn assert_not_mentioned(content: &str, name: &str) {
    assert!(
        !content.contains(name),
        "Expected {name:?} to be absent, got:\n{content}"
    );
}

/// Headings in order of appearance
pub fn headings(content: &str) -> Vec<&str> {
    content.lines().filter(|line| line.starts_with('#')).collect()
}
