use super::{ConfigError, ConfigResult};
use crate::impl_default;
use serde::{Deserialize, Serialize};

/// 绘制表面配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// 宽度（像素）
    pub width: u32,

    /// 高度（像素）
    pub height: u32,

    /// 每帧覆盖的黑色半透明背景的 alpha，产生拖尾效果
    pub background_fade: f32,
}

impl_default!(SurfaceConfig {
    width: 1280,
    height: 720,
    background_fade: 0.15,
});

impl SurfaceConfig {
    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ValidationError(format!(
                "Invalid surface size {}x{}",
                self.width, self.height
            )));
        }
        if !(0.0..=1.0).contains(&self.background_fade) {
            return Err(ConfigError::ValidationError(
                "Invalid background fade".to_string(),
            ));
        }
        Ok(())
    }
}
