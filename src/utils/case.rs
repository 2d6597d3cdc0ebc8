use convert_case::{Case, Casing};

/// Converts a token into a named casing style ("pascal", "snake", ...).
///
/// Anything with the shape `Fn(style, text) -> String` is a converter, so
/// callers can inject a closure where [`ConvertCase`] does not fit.
pub trait CaseConverter {
    fn convert(&self, style: &str, text: &str) -> String;
}

/// Default converter backed by `convert_case`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertCase;

impl CaseConverter for ConvertCase {
    fn convert(&self, style: &str, text: &str) -> String {
        convert_to_case(text, style)
    }
}

impl<F> CaseConverter for F
where
    F: Fn(&str, &str) -> String,
{
    fn convert(&self, style: &str, text: &str) -> String {
        self(style, text)
    }
}

pub fn convert_to_case(input: &str, case: &str) -> String {
    match case.to_lowercase().as_str() {
        "camel" | "camelcase" => input.to_case(Case::Camel),
        "pascal" | "pascalcase" => input.to_case(Case::Pascal),
        "snake" | "snake_case" => input.to_case(Case::Snake),
        "kebab" | "kebab-case" => input.to_case(Case::Kebab),
        "title" | "title_case" => input.to_case(Case::Title),
        "lower" | "lowercase" => input.to_lowercase(),
        "upper" | "uppercase" => input.to_uppercase(),
        _ => input.to_string(), // unknown style, leave untouched
    }
}

pub fn sanitize_identifier(name: &str) -> String {
    let mut result = String::new();
    let mut chars = name.chars().peekable();

    // Identifiers must start with a letter or underscore
    if let Some(&first) = chars.peek()
        && !first.is_alphabetic()
        && first != '_'
    {
        result.push('_');
    }

    for c in chars {
        if c.is_alphanumeric() || c == '_' {
            result.push(c);
        } else {
            result.push('_');
        }
    }

    result
}
