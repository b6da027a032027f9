use super::{ConfigError, ConfigResult};
use crate::impl_default;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 倒计时目标时间的格式（本地时间，无时区）
pub const COUNTDOWN_TARGET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 默认的烟花调色板（RGB）
pub const DEFAULT_PALETTE: [[u8; 3]; 8] = [
    [255, 50, 50],
    [255, 150, 50],
    [255, 255, 50],
    [50, 255, 50],
    [50, 255, 255],
    [50, 50, 255],
    [255, 50, 255],
    [255, 255, 255],
];

/// 生成配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// 同时活跃的烟花上限
    pub max_fireworks: usize,
    /// 同时活跃的流星上限
    pub max_shooting_stars: usize,
    /// 每帧生成烟花的概率
    pub firework_chance: f64,
    /// 每帧生成流星的概率
    pub shooting_star_chance: f64,
}

impl_default!(SpawnConfig {
    max_fireworks: 8,
    max_shooting_stars: 3,
    firework_chance: 0.03,
    shooting_star_chance: 0.01,
});

impl SpawnConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, p) in [
            ("firework_chance", self.firework_chance),
            ("shooting_star_chance", self.shooting_star_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be within [0, 1], got {}",
                    name, p
                )));
            }
        }
        Ok(())
    }
}

/// 爆炸配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// 第一圈粒子数
    pub primary_count: usize,
    /// 第二圈粒子数
    pub secondary_count: usize,
    /// 调色板
    pub palette: Vec<[u8; 3]>,
}

impl_default!(BurstConfig {
    primary_count: 150,
    secondary_count: 75,
    palette: DEFAULT_PALETTE.to_vec(),
});

impl BurstConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.palette.is_empty() {
            return Err(ConfigError::ValidationError(
                "Burst palette must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// 倒计时配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// 是否刷新倒计时文字
    pub enabled: bool,
    /// 目标时间，本地时间，格式 `YYYY-MM-DDTHH:MM:SS`
    pub target: String,
}

impl_default!(CountdownConfig {
    enabled: true,
    target: "2025-01-01T00:00:00".to_string(),
});

impl CountdownConfig {
    /// 解析目标时间
    pub fn target_time(&self) -> ConfigResult<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.target, COUNTDOWN_TARGET_FORMAT).map_err(|e| {
            ConfigError::ValidationError(format!(
                "Invalid countdown target '{}': {}",
                self.target, e
            ))
        })
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.target_time().map(|_| ())
    }
}
