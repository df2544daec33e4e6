//! Directive result types

use rustc_hash::FxHashSet;

/// Qualified names excluded from one file's documentation.
///
/// Names are bare (`Client`, `connect`) for top-level declarations and
/// `Class.member` for class members. Lookups are exact string matches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    names: FxHashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, qualified_name: &str) -> bool {
        self.names.contains(qualified_name)
    }

    /// Check a class member under its `Class.member` name
    pub fn contains_member(&self, class_name: &str, member_name: &str) -> bool {
        self.names.contains(&format!("{}.{}", class_name, member_name))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order (for logging and tests)
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// What the leading comment block asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `# doc: module ignore`
    SkipFile,
    /// Names to leave out (possibly none)
    Exclude(ExclusionSet),
}

impl Directive {
    pub fn none() -> Self {
        Directive::Exclude(ExclusionSet::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_lookup_is_exact() {
        let set: ExclusionSet = ["Client", "Pool.close"].into_iter().collect();

        assert!(set.contains("Client"));
        assert!(set.contains_member("Pool", "close"));
        assert!(!set.contains_member("Pool", "clos"));
        assert!(!set.contains("Pool"));
        assert!(!set.contains("Client.connect"));
    }

    #[test]
    fn test_sorted_names() {
        let set: ExclusionSet = ["b", "a.c", "a"].into_iter().collect();
        assert_eq!(set.sorted(), vec!["a", "a.c", "b"]);
    }
}
