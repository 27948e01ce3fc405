//! Configuration loading and root folder resolution
//!
//! The root folder holds everything the service owns on disk: the SQLite
//! database (`outreach.db`) and the bundled guide template document
//! (`guide-template.docx`).

use crate::Result;
use std::path::PathBuf;

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "outreach.db";

/// Bundled guide template file name inside the root folder
pub const GUIDE_TEMPLATE_FILE: &str = "guide-template.docx";

/// Default HTTP port for the outreach desk
pub const DEFAULT_PORT: u16 = 5731;

/// Root folder resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable `OUTREACH_ROOT_FOLDER`
/// 3. TOML config file (`root_folder` key)
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_root_folder(cli_arg: Option<&str>) -> PathBuf {
    // Priority 1: Command-line argument
    if let Some(path) = cli_arg {
        return PathBuf::from(path);
    }

    // Priority 2: Environment variable
    if let Ok(path) = std::env::var("OUTREACH_ROOT_FOLDER") {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }

    // Priority 3: TOML config file
    if let Some(config_path) = find_config_file() {
        if let Ok(toml_content) = std::fs::read_to_string(&config_path) {
            if let Ok(config) = toml::from_str::<toml::Value>(&toml_content) {
                if let Some(root_folder) = config.get("root_folder").and_then(|v| v.as_str()) {
                    return PathBuf::from(root_folder);
                }
            }
        }
    }

    // Priority 4: OS-dependent compiled default
    default_root_folder()
}

/// Resolve listen port: `OUTREACH_PORT` env var, else compiled default
pub fn resolve_port(cli_arg: Option<u16>) -> u16 {
    if let Some(port) = cli_arg {
        return port;
    }
    std::env::var("OUTREACH_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Locate the user or system config file, if one exists
fn find_config_file() -> Option<PathBuf> {
    let user_config = dirs::config_dir().map(|d| d.join("outreach").join("config.toml"));
    if let Some(path) = user_config {
        if path.exists() {
            return Some(path);
        }
    }

    if cfg!(target_os = "linux") {
        let system_config = PathBuf::from("/etc/outreach/config.toml");
        if system_config.exists() {
            return Some(system_config);
        }
    }

    None
}

/// Get OS-dependent default root folder path
fn default_root_folder() -> PathBuf {
    if cfg!(target_os = "windows") {
        dirs::data_local_dir()
            .map(|d| d.join("outreach"))
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData\\outreach"))
    } else if cfg!(target_os = "macos") {
        dirs::data_dir()
            .map(|d| d.join("outreach"))
            .unwrap_or_else(|| PathBuf::from("/Library/Application Support/outreach"))
    } else {
        dirs::data_local_dir()
            .map(|d| d.join("outreach"))
            .unwrap_or_else(|| PathBuf::from("/var/lib/outreach"))
    }
}

/// Ensure the root folder directory exists, creating it if missing
pub fn ensure_root_folder(root: &PathBuf) -> Result<()> {
    if !root.exists() {
        std::fs::create_dir_all(root)?;
        tracing::info!("Created root folder: {}", root.display());
    }
    Ok(())
}

/// Database path inside the root folder
pub fn database_path(root: &std::path::Path) -> PathBuf {
    root.join(DATABASE_FILE)
}

/// Guide template path inside the root folder
pub fn guide_template_path(root: &std::path::Path) -> PathBuf {
    root.join(GUIDE_TEMPLATE_FILE)
}
