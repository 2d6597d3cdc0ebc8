use std::fs;
use std::path::Path;

/// Name of the handler a page declares for `method`, e.g. `BlogSlugPOST`.
pub fn handler_name(component: &str, method: &str) -> String {
    format!("{}{}", component, method.to_uppercase())
}

/// Whether a page source declares `func <Component><METHOD>`.
pub fn has_handler(source: &str, component: &str, method: &str) -> bool {
    let pattern = format!("func {}", handler_name(component, method));

    source.match_indices(&pattern).any(|(start, _)| {
        // BlogPOST must not match inside BlogPOSTS
        source[start + pattern.len()..]
            .chars()
            .next()
            .is_none_or(|next| !next.is_alphanumeric() && next != '_')
    })
}

/// Reads the page file and looks for the handler; unreadable files have none.
pub fn file_has_handler(file_path: &Path, component: &str, method: &str) -> bool {
    match fs::read_to_string(file_path) {
        Ok(source) => has_handler(&source, component, method),
        Err(e) => {
            tracing::debug!(path = %file_path.display(), error = %e, "page file unreadable");
            false
        }
    }
}
