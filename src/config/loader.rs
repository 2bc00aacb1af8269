//! マージ設定ファイルの読み込み

use std::path::Path;

use super::{
    ConfigError,
    MergeSettings,
};

/// Name of the settings file looked up at the workspace root.
pub const CONFIG_FILE_NAME: &str = ".po-merge.json";

/// カタログのルートディレクトリから `.po-merge.json` を読み込む
///
/// Missing fields fall back to [`MergeSettings::default`]. Validation is left to the caller.
///
/// # Returns
/// - `Ok(Some(settings))`: file found and parsed
/// - `Ok(None)`: no settings file at `workspace_root`
///
/// # Errors
/// - the file exists but cannot be read
/// - the file is not valid JSON for [`MergeSettings`]
pub(super) fn load_from_workspace(
    workspace_root: &Path,
) -> Result<Option<MergeSettings>, ConfigError> {
    let config_path = workspace_root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)
        .map_err(|source| ConfigError::Read { path: config_path.clone(), source })?;
    let settings: MergeSettings = serde_json::from_str(&content)
        .map_err(|source| ConfigError::Parse { path: config_path, source })?;

    Ok(Some(settings))
}
