//! Conformance testing and value extraction.

use crate::pattern::Pattern;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// One slice of the input per parameter, in template order.
    Conforms(Vec<&'a str>),
    DoesNotConform,
}

impl<'a> MatchResult<'a> {
    pub fn conforms(&self) -> bool {
        matches!(self, MatchResult::Conforms(_))
    }

    pub fn into_values(self) -> Option<Vec<&'a str>> {
        match self {
            MatchResult::Conforms(values) => Some(values),
            MatchResult::DoesNotConform => None,
        }
    }
}

impl Pattern {
    /// Returns true when `input` matches every literal of the template, in
    /// order, and nothing else.
    pub fn matches(&self, input: &str) -> bool {
        self.regex().is_match(input)
    }

    /// The substrings bound to each parameter, or `None` when `input` does
    /// not conform.
    pub fn extract<'a>(&self, input: &'a str) -> Option<Vec<&'a str>> {
        self.match_extract(input).into_values()
    }

    pub fn match_extract<'a>(&self, input: &'a str) -> MatchResult<'a> {
        let Some(caps) = self.regex().captures(input) else {
            tracing::trace!(template = self.template(), input, "input does not conform");
            return MatchResult::DoesNotConform;
        };

        let values = caps
            .iter()
            .skip(1)
            .map(|m| m.map_or("", |m| m.as_str()))
            .collect();

        MatchResult::Conforms(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_parameter() {
        let pattern = Pattern::new("api.example.com/users/(username)/repos").unwrap();
        assert!(pattern.matches("api.example.com/users/jverkoey/repos"));
        assert_eq!(
            pattern.extract("api.example.com/users/jverkoey/repos"),
            Some(vec!["jverkoey"])
        );
    }

    #[test]
    fn test_multiple_parameters() {
        let pattern = Pattern::new("api.example.com/repos/(owner)/(repo)/issues").unwrap();
        assert_eq!(
            pattern.match_extract("api.example.com/repos/jverkoey/sockit/issues"),
            MatchResult::Conforms(vec!["jverkoey", "sockit"])
        );
    }

    #[test]
    fn test_missing_literal() {
        let pattern = Pattern::new("api.example.com/users/(username)/repos").unwrap();
        assert_eq!(
            pattern.match_extract("api.example.com/users/jverkoey"),
            MatchResult::DoesNotConform
        );
        assert!(!pattern.matches("api.example.com/people/jverkoey/repos"));
    }

    #[test]
    fn test_trailing_characters() {
        let pattern = Pattern::new("users/(name)/repos").unwrap();
        assert!(!pattern.matches("users/jverkoey/repos/extra"));
    }

    #[test]
    fn test_leading_characters() {
        let pattern = Pattern::new("users/(name)").unwrap();
        assert!(!pattern.matches("/users/jverkoey"));
    }

    #[test]
    fn test_literal_only() {
        let pattern = Pattern::new("example.com/about").unwrap();
        assert_eq!(pattern.extract("example.com/about"), Some(vec![]));
        assert!(!pattern.matches("example.com/about/"));
        assert!(!pattern.matches("example.com"));
    }

    #[test]
    fn test_empty_template() {
        let pattern = Pattern::new("").unwrap();
        assert!(pattern.matches(""));
        assert!(!pattern.matches("x"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let pattern = Pattern::new("a.b?c=(value)&[x]").unwrap();
        assert_eq!(pattern.extract("a.b?c=42&[x]"), Some(vec!["42"]));
        assert!(!pattern.matches("aXb?c=42&[x]"));
    }

    #[test]
    fn test_trailing_parameter_takes_remainder() {
        let pattern = Pattern::new("example.com/(path)").unwrap();
        assert_eq!(pattern.extract("example.com/a/b/c"), Some(vec!["a/b/c"]));
        assert_eq!(pattern.extract("example.com/"), Some(vec![""]));
    }

    #[test]
    fn test_leading_parameter() {
        let pattern = Pattern::new("(user)@example.com").unwrap();
        assert_eq!(pattern.extract("jverkoey@example.com"), Some(vec!["jverkoey"]));
    }

    #[test]
    fn test_parameter_is_lazy() {
        let pattern = Pattern::new("(a)/(b)").unwrap();
        assert_eq!(pattern.extract("x/y/z"), Some(vec!["x", "y/z"]));
    }

    #[test]
    fn test_parameter_extends_past_false_boundary() {
        // The first "/b" cannot be the boundary because ".c" must follow.
        let pattern = Pattern::new("(a)/b.c").unwrap();
        assert_eq!(pattern.extract("x/b/b.c"), Some(vec!["x/b"]));
    }

    #[test]
    fn test_empty_captures() {
        let pattern = Pattern::new("users/(name)/repos").unwrap();
        assert_eq!(pattern.extract("users//repos"), Some(vec![""]));
    }

    #[test]
    fn test_whole_input_single_parameter() {
        let pattern = Pattern::new("(everything)").unwrap();
        assert_eq!(pattern.extract("a/b (c)"), Some(vec!["a/b (c)"]));
        assert_eq!(pattern.extract(""), Some(vec![""]));
    }

    #[test]
    fn test_adjacent_parameters() {
        let pattern = Pattern::new("(first)(second)").unwrap();
        assert_eq!(pattern.extract("abc"), Some(vec!["", "abc"]));
    }

    #[test]
    fn test_multiline_input() {
        let pattern = Pattern::new("begin\n(body)\nend").unwrap();
        assert_eq!(pattern.extract("begin\nline1\nline2\nend"), Some(vec!["line1\nline2"]));
    }

    #[test]
    fn test_extraction_length_matches_arity() {
        let pattern = Pattern::new("(a)-(b)-(c)").unwrap();
        let values = pattern.extract("1-2-3").unwrap();
        assert_eq!(values.len(), pattern.arity());
    }
}
