pub mod naming;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE_EXTENSION: &str = "templ";

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Config {
    /// Directory holding the page templates
    pub pages_path: PathBuf,
    /// Extension of page template files, without the dot (default: "templ")
    pub template_extension: Option<String>,
    pub naming: NamingConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct NamingConfig {
    /// Case for template/component names (default: "pascal")
    pub template_case: Option<String>,
    /// Type annotation closing the template parameter list (default: "string")
    pub param_type: Option<String>,
    /// Case for generated enum fields (default: "snake")
    pub field_case: Option<String>,
    /// Name of the generated page enum (default: "Page")
    pub enum_name: Option<String>,
}

impl Config {
    pub fn from_toml_str(source: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config = toml::from_str(source).map_err(|e| format!("Invalid config: {}", e))?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        Self::from_toml_str(&source)
    }

    pub fn template_extension(&self) -> &str {
        self.template_extension
            .as_deref()
            .unwrap_or(DEFAULT_TEMPLATE_EXTENSION)
            .trim_start_matches('.')
    }
}

impl NamingConfig {
    pub fn template_case(&self) -> &str {
        self.template_case.as_deref().unwrap_or("pascal")
    }

    pub fn param_type(&self) -> &str {
        self.param_type.as_deref().unwrap_or("string")
    }

    pub fn field_case(&self) -> &str {
        self.field_case.as_deref().unwrap_or("snake")
    }

    pub fn enum_name(&self) -> &str {
        self.enum_name.as_deref().unwrap_or("Page")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.pages_path, PathBuf::new());
        assert_eq!(config.template_extension(), "templ");
        assert_eq!(config.naming.template_case(), "pascal");
        assert_eq!(config.naming.param_type(), "string");
        assert_eq!(config.naming.field_case(), "snake");
        assert_eq!(config.naming.enum_name(), "Page");
    }

    #[test]
    fn reads_naming_table() {
        let config = Config::from_toml_str(
            r#"
            pages_path = "web/pages"
            template_extension = ".page"

            [naming]
            param_type = "int"
            enum_name = "Route"
            "#,
        )
        .unwrap();

        assert_eq!(config.pages_path, PathBuf::from("web/pages"));
        assert_eq!(config.template_extension(), "page");
        assert_eq!(config.naming.param_type(), "int");
        assert_eq!(config.naming.enum_name(), "Route");
        assert_eq!(config.naming.template_case(), "pascal");
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = Config::from_toml_str("pages_path = [").unwrap_err();
        assert!(err.to_string().starts_with("Invalid config"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
