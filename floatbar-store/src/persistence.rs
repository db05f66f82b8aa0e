//! File persistence helpers.
//!
//! Every write replaces the whole file: data goes to a unique temporary
//! sibling first and is then renamed over the target, so concurrent writers
//! resolve to last-writer-wins and readers never see a partial record.

use serde::{Serialize, de::DeserializeOwned};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

use crate::error::StoreError;

/// Application directory name under the platform config and cache roots.
const APP_DIR: &str = "floatbar";

/// Distinguishes temp files written by concurrent saves in one process.
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - Linux: `~/.config/floatbar`
/// - macOS: `~/Library/Application Support/floatbar`
/// - Windows: `%APPDATA%\floatbar`
pub fn default_config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|c| c.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default cache directory.
///
/// - Linux: `~/.cache/floatbar`
/// - macOS: `~/Library/Caches/floatbar`
/// - Windows: `%LOCALAPPDATA%\floatbar`
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|c| c.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default settings file path.
pub fn default_settings_path() -> PathBuf {
    default_config_dir().join("settings.json")
}

/// Returns the default directory for per-post records.
pub fn default_posts_dir() -> PathBuf {
    default_cache_dir().join("posts")
}

// ============================================================================
// Security: File Permissions
// ============================================================================

/// Sets restrictive permissions on Unix systems.
#[cfg(unix)]
async fn set_mode(path: &Path, mode: u32) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = tokio::fs::metadata(path).await?.permissions();
    perms.set_mode(mode);
    tokio::fs::set_permissions(path, perms).await?;

    debug!(path = %path.display(), mode = format!("{mode:o}"), "Set restrictive permissions");
    Ok(())
}

/// No-op for non-Unix systems.
#[cfg(not(unix))]
async fn set_mode(_path: &Path, _mode: u32) -> Result<(), StoreError> {
    Ok(())
}

// ============================================================================
// File Operations
// ============================================================================

/// Ensures a directory exists. Newly created directories are owner-only.
pub async fn ensure_dir(path: &Path) -> Result<(), StoreError> {
    if tokio::fs::metadata(path).await.is_err() {
        debug!(path = %path.display(), "Creating directory");
        tokio::fs::create_dir_all(path).await?;
        set_mode(path, 0o700).await?;
    }
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id()))
}

/// Writes `contents` to `temp_path`, restricts it and renames it over `path`.
///
/// On error the temp file may be left behind; the caller removes it.
async fn replace_with_temp(temp_path: &Path, path: &Path, contents: &[u8]) -> Result<(), StoreError> {
    tokio::fs::write(temp_path, contents).await?;
    set_mode(temp_path, 0o600).await?;
    tokio::fs::rename(temp_path, path).await?;
    Ok(())
}

/// Saves data to a JSON file, replacing it atomically.
///
/// Creates parent directories if they don't exist and sets owner-only
/// permissions on Unix.
pub async fn save_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), StoreError> {
    debug!(path = %path.display(), "Saving JSON file");

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent).await?;
    }

    let json = serde_json::to_string_pretty(data)?;

    let temp_path = temp_path_for(path);
    if let Err(e) = replace_with_temp(&temp_path, path, json.as_bytes()).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    debug!(path = %path.display(), "JSON file saved");
    Ok(())
}

/// Loads data from a JSON file.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    debug!(path = %path.display(), "Loading JSON file");

    // Bytes, not a string: invalid UTF-8 is a damaged record, not an I/O failure.
    let content = tokio::fs::read(path).await?;
    let data = serde_json::from_slice(&content)?;

    Ok(data)
}

/// Loads data from a JSON file, returning `None` if the file does not exist.
pub async fn load_json_opt<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    match load_json(path).await {
        Ok(data) => Ok(Some(data)),
        Err(StoreError::Io(e)) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Removes a file, treating a missing file as success.
///
/// Returns true if a file was removed.
pub async fn remove_if_exists(path: &Path) -> Result<bool, StoreError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// Tests
// ============================================================================
