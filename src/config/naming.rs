use crate::utils::case::CaseConverter;

/// Joins segment texts into one identifier, each converted to `case`.
///
/// Used both for template names built from route paths and for component
/// names parsed back from page filenames, so the two always agree.
pub fn generate_template_name<'a, C>(
    parts: impl IntoIterator<Item = &'a str>,
    case: &str,
    converter: &C,
) -> String
where
    C: CaseConverter + ?Sized,
{
    parts
        .into_iter()
        .map(|part| converter.convert(case, part))
        .collect()
}

/// Renders the parameter list appended to a template signature.
///
/// A single type annotation covers the whole list: `, slug, id string`.
pub fn format_template_params(params: &[String], param_type: &str) -> String {
    if params.is_empty() {
        return String::new();
    }

    format!(", {} {}", params.join(", "), param_type)
}
