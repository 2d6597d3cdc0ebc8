use crate::config::NamingConfig;
use crate::config::naming::{format_template_params, generate_template_name};
use crate::utils::case::{CaseConverter, ConvertCase};
use crate::utils::path::{Segment, extract_parameters, split_segments};
use serde::Serialize;

/// Names derived from a route path for scaffolding a page.
///
/// `build("/blog/:slug")` gives:
///
/// | field             | value            |
/// |-------------------|------------------|
/// | `filename`        | `blog.[slug]`    |
/// | `template_name`   | `BlogSlug`       |
/// | `template_params` | `, slug string`  |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDescriptor {
    /// Segments joined by `.`, parameters rendered as `[name]`
    pub filename: String,
    /// Every segment converted to the template case and concatenated
    pub template_name: String,
    /// `", a, b string"`, or empty when the path has no parameters
    pub template_params: String,
}

#[derive(Debug, Clone)]
pub struct PathDescriptorBuilder<C = ConvertCase> {
    converter: C,
    template_case: String,
    param_type: String,
}

impl PathDescriptorBuilder {
    pub fn new() -> Self {
        Self::with_converter(ConvertCase)
    }
}

impl Default for PathDescriptorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CaseConverter> PathDescriptorBuilder<C> {
    pub fn with_converter(converter: C) -> Self {
        let naming = NamingConfig::default();
        Self {
            converter,
            template_case: naming.template_case().to_string(),
            param_type: naming.param_type().to_string(),
        }
    }

    /// Applies the template case and parameter type from `naming`.
    pub fn naming(mut self, naming: &NamingConfig) -> Self {
        self.template_case = naming.template_case().to_string();
        self.param_type = naming.param_type().to_string();
        self
    }

    pub fn build(&self, path: &str) -> PathDescriptor {
        let segments = split_segments(path);
        let params = extract_parameters(&segments);

        let filename = segments
            .iter()
            .map(|segment| match segment {
                Segment::Param(name) => format!("[{}]", name),
                Segment::Literal(text) => text.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");

        let template_name = generate_template_name(
            segments.iter().map(Segment::text),
            &self.template_case,
            &self.converter,
        );

        PathDescriptor {
            filename,
            template_name,
            template_params: format_template_params(&params, &self.param_type),
        }
    }
}

/// Builds a descriptor with the default naming rules and the given converter.
pub fn build<C: CaseConverter>(path: &str, converter: C) -> PathDescriptor {
    PathDescriptorBuilder::with_converter(converter).build(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn describe(path: &str) -> PathDescriptor {
        PathDescriptorBuilder::new().build(path)
    }

    #[rstest]
    #[case("/blog/:slug", "blog.[slug]", "BlogSlug", ", slug string")]
    #[case("about", "about", "About", "")]
    #[case(
        "/blog/:slug/comments/:id",
        "blog.[slug].comments.[id]",
        "BlogSlugCommentsId",
        ", slug, id string"
    )]
    #[case("/", "", "", "")]
    #[case("", "", "", "")]
    #[case("//a", ".a", "A", "")]
    #[case("a//b", "a..b", "AB", "")]
    #[case("/:", "[]", "", ",  string")]
    #[case("/:id/:id", "[id].[id]", "IdId", ", id, id string")]
    fn builds_descriptors(
        #[case] path: &str,
        #[case] filename: &str,
        #[case] template_name: &str,
        #[case] template_params: &str,
    ) {
        let descriptor = describe(path);
        assert_eq!(descriptor.filename, filename);
        assert_eq!(descriptor.template_name, template_name);
        assert_eq!(descriptor.template_params, template_params);
    }

    #[rstest]
    #[case("/a/b/c")]
    #[case("/:x/y")]
    #[case("//")]
    #[case("a/")]
    fn filename_keeps_segment_count(#[case] path: &str) {
        let stripped = path.strip_prefix('/').unwrap_or(path);
        let descriptor = describe(path);
        assert_eq!(
            descriptor.filename.split('.').count(),
            stripped.split('/').count()
        );
    }

    #[test]
    fn literal_paths_swap_separators() {
        let descriptor = describe("/docs/getting-started/install");
        assert_eq!(descriptor.filename, "docs.getting-started.install");
        assert_eq!(descriptor.template_params, "");
    }

    #[test]
    fn uses_injected_converter() {
        let calls = std::cell::RefCell::new(Vec::new());
        let converter = |style: &str, text: &str| {
            calls.borrow_mut().push(style.to_string());
            text.to_uppercase()
        };

        let descriptor = build("/blog/:slug", converter);
        assert_eq!(descriptor.template_name, "BLOGSLUG");
        assert_eq!(*calls.borrow(), vec!["pascal", "pascal"]);
    }

    #[test]
    fn naming_overrides_case_and_type() {
        let naming = NamingConfig {
            template_case: Some("snake".to_string()),
            param_type: Some("int".to_string()),
            ..NamingConfig::default()
        };
        let descriptor = PathDescriptorBuilder::new()
            .naming(&naming)
            .build("/user/:id");
        assert_eq!(descriptor.template_name, "userid");
        assert_eq!(descriptor.template_params, ", id int");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(describe("/blog/:slug")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "filename": "blog.[slug]",
                "templateName": "BlogSlug",
                "templateParams": ", slug string",
            })
        );
    }
}
