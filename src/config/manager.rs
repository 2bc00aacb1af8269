//! マージ設定の管理

use std::path::PathBuf;

use super::{
    ConfigError,
    MergeSettings,
    loader,
};
use crate::fuzzy::Matcher;

/// Holds the validated merge settings of a catalog workspace.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: MergeSettings,

    /// ワークスペースのルートパス
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// Creates a manager with default settings and no workspace.
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: MergeSettings::default(), workspace_root: None }
    }

    /// 設定を読み込む
    ///
    /// Reads `.po-merge.json` from `workspace_root` when given, otherwise uses defaults.
    /// The settings are only replaced if the new ones validate.
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading merge settings for workspace: {:?}", workspace_root);

        let settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(MergeSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            MergeSettings::default()
        };

        settings.validate().map_err(ConfigError::Invalid)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Merge settings loaded: {:?}", self.current_settings);

        Ok(())
    }

    /// Replaces the current settings after validating them.
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn update_settings(&mut self, new_settings: MergeSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating merge settings: {:?}", new_settings);

        new_settings.validate().map_err(ConfigError::Invalid)?;

        self.current_settings = new_settings;
        Ok(())
    }

    /// Current settings.
    #[must_use]
    pub const fn get_settings(&self) -> &MergeSettings {
        &self.current_settings
    }

    /// Workspace the settings were loaded from.
    #[must_use]
    pub const fn workspace_root(&self) -> Option<&PathBuf> {
        self.workspace_root.as_ref()
    }

    /// 現在の設定に基づく matcher（fuzzy matching 無効時は `None`）
    #[must_use]
    pub const fn matcher(&self) -> Option<Matcher> {
        self.current_settings.matcher()
    }
}
