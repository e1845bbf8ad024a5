// src/crawl/classify.rs
// =============================================================================
// This module decides what a discovered child reference IS:
// - a Leaf: a final file resource we want to mirror, or
// - a Branch: a nested directory to recurse into.
//
// The decision is behind the `Classifier` trait so the traversal never
// hard-codes a listing format. The default implementation works off the
// shape HTML indexes give us: files end with the target extension,
// directories end with a slash.
// =============================================================================

/// A discovered reference, tagged by what the crawler should do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Final file resource (matches the target extension).
    Leaf(String),
    /// Nested directory to recurse into.
    Branch(String),
}

/// Classifies a child reference, or ignores it entirely (`None`).
pub trait Classifier: Send + Sync {
    fn classify(&self, child: &str) -> Option<Link>;
}

/// Classifier for suffix-named files under slash-terminated directories.
pub struct SuffixClassifier {
    suffix: String,
}

impl SuffixClassifier {
    /// Builds a classifier for one file extension.
    /// Accepts "rs" or ".rs" interchangeably.
    pub fn new(extension: &str) -> Self {
        Self {
            suffix: format!(".{}", extension.trim_start_matches('.')),
        }
    }
}

impl Classifier for SuffixClassifier {
    fn classify(&self, child: &str) -> Option<Link> {
        if child.ends_with(&self.suffix) {
            Some(Link::Leaf(child.to_string()))
        } else if child.ends_with('/') {
            Some(Link::Branch(child.to_string()))
        } else {
            // Wrong extension and not a directory: not ours to mirror.
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_suffix_is_leaf() {
        let classifier = SuffixClassifier::new("rs");
        assert_eq!(
            classifier.classify("https://example.com/dir/a.rs"),
            Some(Link::Leaf("https://example.com/dir/a.rs".to_string()))
        );
    }

    #[test]
    fn test_trailing_slash_is_branch() {
        let classifier = SuffixClassifier::new("rs");
        assert_eq!(
            classifier.classify("https://example.com/dir/sub/"),
            Some(Link::Branch("https://example.com/dir/sub/".to_string()))
        );
    }

    #[test]
    fn test_other_extension_is_ignored() {
        let classifier = SuffixClassifier::new("rs");
        assert_eq!(classifier.classify("https://example.com/dir/readme.txt"), None);
    }

    #[test]
    fn test_dotted_extension_accepted() {
        let classifier = SuffixClassifier::new(".rs");
        assert!(matches!(
            classifier.classify("https://example.com/a.rs"),
            Some(Link::Leaf(_))
        ));
    }

    #[test]
    fn test_suffix_must_include_the_dot() {
        // "doors" must not count as a ".rs" file
        let classifier = SuffixClassifier::new("rs");
        assert_eq!(classifier.classify("https://example.com/doors"), None);
    }
}
