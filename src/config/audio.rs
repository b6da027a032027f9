/// 音频配置

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use super::{ConfigResult, ConfigError};

/// 音频配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// 是否启用爆炸音效
    pub enabled: bool,

    /// 爆炸音效文件（wav / mp3 / ogg / flac）
    pub sound_path: Option<PathBuf>,

    /// 音量 (0.0 - 1.0)
    pub volume: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound_path: None,
            volume: 1.0,
        }
    }
}

impl AudioConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if !(0.0..=1.0).contains(&self.volume) {
            return Err(ConfigError::ValidationError("Invalid volume".to_string()));
        }
        Ok(())
    }

    /// 实际要播放的文件；未启用或未配置时为 None
    pub fn active_sound(&self) -> Option<&PathBuf> {
        if self.enabled {
            self.sound_path.as_ref()
        } else {
            None
        }
    }
}
