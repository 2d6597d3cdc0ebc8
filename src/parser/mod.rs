mod handlers;

pub use handlers::{file_has_handler, handler_name, has_handler};

use crate::config::Config;
use crate::config::naming::generate_template_name;
use crate::utils::case::CaseConverter;
use crate::utils::path::{PARAM_MARKER, SEPARATOR};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageRoute {
    pub path: String,
    /// Template file, relative to the pages directory
    pub template_path: PathBuf,
    pub component: String,
    pub get_handler: String,
    pub post_handler: String,
    pub delete_handler: String,
    pub has_post: bool,
    pub has_delete: bool,
    pub params: Vec<String>,
}

pub fn scan_pages_folder<C>(
    config: &Config,
    converter: &C,
) -> Result<Vec<PageRoute>, Box<dyn std::error::Error>>
where
    C: CaseConverter + ?Sized,
{
    let scan = scan_pages(config, converter)?;
    Ok(scan.routes)
}

/// Result of walking the pages directory.
#[derive(Debug, Default)]
pub(crate) struct PageScan {
    /// Routes kept, sorted by route path
    pub routes: Vec<PageRoute>,
    /// Later pages that resolved to an already taken route path
    pub duplicates: Vec<PageRoute>,
}

pub(crate) fn scan_pages<C>(
    config: &Config,
    converter: &C,
) -> Result<PageScan, Box<dyn std::error::Error>>
where
    C: CaseConverter + ?Sized,
{
    let pages_dir = &config.pages_path;
    let mut files = collect_page_files(pages_dir, config.template_extension()).map_err(|e| {
        format!(
            "Failed to read pages directory {}: {}",
            pages_dir.display(),
            e
        )
    })?;
    files.sort();

    let mut scan = PageScan::default();
    let mut seen = HashSet::new();

    for file in files {
        let relative = file.strip_prefix(pages_dir)?.to_path_buf();
        let mut route = parse_route_from_filename(&relative, config, converter);

        route.has_post = file_has_handler(&file, &route.component, "POST");
        route.has_delete = file_has_handler(&file, &route.component, "DELETE");

        tracing::debug!(
            path = %route.path,
            template = %route.template_path.display(),
            component = %route.component,
            "parsed page"
        );

        // First file in path order wins
        if seen.insert(route.path.clone()) {
            scan.routes.push(route);
        } else {
            tracing::warn!(
                path = %route.path,
                template = %route.template_path.display(),
                "duplicate page route skipped"
            );
            scan.duplicates.push(route);
        }
    }

    scan.routes.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(scan)
}

/// Page files under `dir`; symlinked directories are not descended into.
fn collect_page_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;

        if entry.file_type().is_file()
            && entry.path().extension().and_then(|s| s.to_str()) == Some(extension)
        {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Turns a page template filename such as `blog.[slug].templ` into a route.
///
/// Only the file name is used; parent directories do not contribute to the
/// route path. Handler presence is left unset, see [`scan_pages_folder`].
pub fn parse_route_from_filename<C>(filename: &Path, config: &Config, converter: &C) -> PageRoute
where
    C: CaseConverter + ?Sized,
{
    let base = filename
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let suffix = format!(".{}", config.template_extension());
    let base = base.strip_suffix(suffix.as_str()).unwrap_or(base);

    let mut params = Vec::new();
    let mut route_parts = Vec::new();
    let mut name_parts = Vec::new();

    for (i, segment) in base.split('.').enumerate() {
        if let Some(param) = segment
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
        {
            params.push(param.to_string());
            route_parts.push(format!("{}{}", PARAM_MARKER, param));
            name_parts.push(param);
        } else {
            // A leading index segment is the directory root
            if i == 0 && segment == "index" {
                route_parts.push(String::new());
            } else {
                route_parts.push(segment.to_string());
            }
            name_parts.push(segment);
        }
    }

    let component = generate_template_name(name_parts, config.naming.template_case(), converter);

    PageRoute {
        path: clean_route_path(&route_parts),
        template_path: filename.to_path_buf(),
        get_handler: handler_name(&component, "GET"),
        post_handler: handler_name(&component, "POST"),
        delete_handler: handler_name(&component, "DELETE"),
        component,
        has_post: false,
        has_delete: false,
        params,
    }
}

fn clean_route_path(parts: &[String]) -> String {
    let mut path = format!("{}{}", SEPARATOR, parts.join("/"));
    path = path.replace("//", "/");

    if path != "/" && path.ends_with(SEPARATOR) {
        path.pop();
    }

    path
}
