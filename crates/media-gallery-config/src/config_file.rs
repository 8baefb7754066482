use std::path::Path;

const CONFIG_FILE: &str = ".media-gallery.toml";

/// Load config file content from CWD first, then the platform config directory
///
/// Searches for:
/// 1. `.media-gallery.toml` in the current working directory
/// 2. `config.toml` in the application config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    if let Some(content) = read_if_present(Path::new(CONFIG_FILE)) {
        return Some(content);
    }

    match crate::paths::app_config_path() {
        Ok(path) => read_if_present(&path),
        Err(e) => {
            log::debug!("No config directory available: {}", e);
            None
        }
    }
}

fn read_if_present(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}
