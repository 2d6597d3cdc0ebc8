pub const SEPARATOR: char = '/';
pub const PARAM_MARKER: char = ':';

/// One `/`-delimited slice of a route path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Param(&'a str),
}

impl<'a> Segment<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.strip_prefix(PARAM_MARKER) {
            Some(name) => Segment::Param(name),
            None => Segment::Literal(raw),
        }
    }

    /// Segment text with the parameter marker removed.
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Literal(text) | Segment::Param(text) => text,
        }
    }
}

/// Removes exactly one leading separator, if there is one.
pub fn strip_leading_separator(path: &str) -> &str {
    path.strip_prefix(SEPARATOR).unwrap_or(path)
}

/// Splits a route path into segments after stripping one leading separator.
///
/// Empty segments are kept: `"//a"` yields `["", "a"]` and `"/"` yields `[""]`.
pub fn split_segments(path: &str) -> Vec<Segment<'_>> {
    strip_leading_separator(path)
        .split(SEPARATOR)
        .map(Segment::parse)
        .collect()
}

/// Parameter names in the order they appear, duplicates included.
pub fn extract_parameters(segments: &[Segment<'_>]) -> Vec<String> {
    segments
        .iter()
        .filter_map(|segment| match *segment {
            Segment::Param(name) => Some(name.to_string()),
            Segment::Literal(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/blog", "blog")]
    #[case("blog", "blog")]
    #[case("//blog", "/blog")]
    #[case("", "")]
    fn strips_one_separator(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(strip_leading_separator(path), expected);
    }

    #[test]
    fn keeps_empty_segments() {
        assert_eq!(split_segments("/"), vec![Segment::Literal("")]);
        assert_eq!(
            split_segments("//a"),
            vec![Segment::Literal(""), Segment::Literal("a")]
        );
        assert_eq!(
            split_segments("a//:b"),
            vec![Segment::Literal("a"), Segment::Literal(""), Segment::Param("b")]
        );
    }

    #[test]
    fn bare_marker_is_an_empty_param() {
        assert_eq!(Segment::parse(":"), Segment::Param(""));
        assert_eq!(Segment::parse(":").text(), "");
    }

    #[rstest]
    #[case("/test", vec![])]
    #[case("/test/:id", vec!["id"])]
    #[case("/test/:id/test/:test_id", vec!["id", "test_id"])]
    #[case("/:a/x/:a", vec!["a", "a"])]
    fn extracts_params_in_order(#[case] path: &str, #[case] expected: Vec<&str>) {
        assert_eq!(extract_parameters(&split_segments(path)), expected);
    }
}
