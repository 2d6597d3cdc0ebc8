mod config;
mod descriptor;
mod generators;
mod parser;
mod utils;

pub use config::{Config, NamingConfig, naming};
pub use descriptor::{PathDescriptor, PathDescriptorBuilder, build};
pub use generators::{CodeGenerator, rust::PageLinksGenerator};
pub use parser::{
    PageRoute, file_has_handler, handler_name, has_handler, parse_route_from_filename,
    scan_pages_folder,
};
pub use utils::case::{CaseConverter, ConvertCase};
pub use utils::{case, path};

/// Describe a route path with the default `convert_case` backed converter.
pub fn describe_path(path: &str) -> PathDescriptor {
    build(path, ConvertCase)
}

/// Scan the pages directory and generate the typed page enum for it
pub fn generate_page_links(config: &Config) -> Result<String, Box<dyn std::error::Error>> {
    let scan = parser::scan_pages(config, &ConvertCase)?;
    let routes = scan.routes;
    let rust_code = PageLinksGenerator::generate(&routes, &config.naming)?;

    println!("cargo:rerun-if-changed={}", config.pages_path.display());
    for route in &scan.duplicates {
        println!(
            "cargo:warning=Duplicate page route skipped: {} ({})",
            route.path,
            route.template_path.display()
        );
    }
    for (route, existing_route) in generators::rust::duplicate_variants(&routes) {
        println!(
            "cargo:warning=Duplicate variant name '{}' for pages: {} and {}",
            route.component,
            route.template_path.display(),
            existing_route.template_path.display()
        );
    }
    println!(
        "cargo:warning=Generated page links for {} pages in {}",
        routes.len(),
        config.pages_path.display()
    );

    Ok(rust_code)
}
