use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 运行时配置
///
/// 物理按帧计数推进（没有 delta time），因此 `target_fps` 直接决定动画速度；
/// 所有速度与衰减常量都是按约 60Hz 调校的。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// 目标帧率
    pub target_fps: u32,

    /// 运行的最大帧数（None = 一直运行）
    pub max_frames: Option<u64>,

    /// 每隔多少帧写一次 PNG 快照（None = 不写）
    pub snapshot_every: Option<u64>,

    /// 快照输出目录
    pub snapshot_dir: PathBuf,

    /// 随机种子（None = 使用系统熵）
    pub seed: Option<u64>,
}

impl_default!(RuntimeConfig {
    target_fps: 60,
    max_frames: None,
    snapshot_every: None,
    snapshot_dir: PathBuf::from("frames"),
    seed: None,
});

impl RuntimeConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.target_fps == 0 || self.target_fps > 1000 {
            return Err(ConfigError::ValidationError(
                "Invalid target FPS".to_string(),
            ));
        }
        if self.snapshot_every == Some(0) {
            return Err(ConfigError::ValidationError(
                "Snapshot interval must be at least one frame".to_string(),
            ));
        }
        Ok(())
    }
}
