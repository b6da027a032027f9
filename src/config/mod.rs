/// 统一配置系统
///
/// 提供TOML/JSON配置文件、环境变量和运行时动态调整
use crate::impl_default;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub mod audio;
pub mod effects;
pub mod graphics;
pub mod performance;

pub use audio::AudioConfig;
pub use effects::{BurstConfig, CountdownConfig, SpawnConfig, DEFAULT_PALETTE};
pub use graphics::SurfaceConfig;
pub use performance::RuntimeConfig;

/// 默认配置文件名
pub const CONFIG_FILE_NAME: &str = "fireworks.toml";

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    /// 文件读取错误
    #[error("Config file error: {0}")]
    FileError(#[from] std::io::Error),
    /// 解析错误
    #[error("Config parse error: {0}")]
    ParseError(String),
    /// 验证错误
    #[error("Config validation error: {0}")]
    ValidationError(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// 配置来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// 从文件加载
    File(PathBuf),
    /// 内置默认值
    Default,
}

/// 动画主配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowConfig {
    /// 绘制表面
    pub surface: SurfaceConfig,

    /// 生成规则
    pub spawn: SpawnConfig,

    /// 爆炸
    pub burst: BurstConfig,

    /// 音频
    pub audio: AudioConfig,

    /// 倒计时
    pub countdown: CountdownConfig,

    /// 运行时
    pub runtime: RuntimeConfig,

    /// 日志配置
    pub logging: LoggingConfig,
}

impl ShowConfig {
    /// 从TOML文件加载配置
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_toml_str(&content)
    }

    /// 从TOML字符串解析配置
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 从JSON文件加载配置
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::FileError)?;
        Self::from_json_str(&content)
    }

    /// 从JSON字符串解析配置
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// 按扩展名加载配置文件（`.json` 走 JSON，其余按 TOML 解析）
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// 保存为TOML文件
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 保存为JSON文件
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;
        fs::write(path, content).map_err(ConfigError::FileError)
    }

    /// 从环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = env::var("FIREWORKS_WIDTH") {
            if let Ok(width) = val.parse() {
                self.surface.width = width;
            }
        }
        if let Ok(val) = env::var("FIREWORKS_HEIGHT") {
            if let Ok(height) = val.parse() {
                self.surface.height = height;
            }
        }
        if let Ok(val) = env::var("FIREWORKS_TARGET_FPS") {
            if let Ok(fps) = val.parse() {
                self.runtime.target_fps = fps;
            }
        }
        if let Ok(val) = env::var("FIREWORKS_SEED") {
            if let Ok(seed) = val.parse() {
                self.runtime.seed = Some(seed);
            }
        }
        if let Ok(val) = env::var("FIREWORKS_SOUND") {
            if !val.is_empty() {
                self.audio.sound_path = Some(PathBuf::from(val));
            }
        }
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        self.surface.validate()?;
        self.spawn.validate()?;
        self.burst.validate()?;
        self.audio.validate()?;
        self.countdown.validate()?;
        self.runtime.validate()?;
        Ok(())
    }

    /// 用户配置目录下的配置文件路径
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fireworks_show").join(CONFIG_FILE_NAME))
    }

    /// 自动查找并加载配置文件
    ///
    /// 按以下顺序查找：
    /// 1. ./fireworks.toml
    /// 2. <用户配置目录>/fireworks_show/fireworks.toml
    /// 3. 使用默认配置
    ///
    /// 只有文件不存在时才继续查找下一个；文件存在但读取或解析失败会直接返回错误。
    /// 日志系统依赖配置里的级别，所以这里不打印日志，而是把来源返回给调用方。
    pub fn load_or_default() -> ConfigResult<(Self, ConfigSource)> {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        candidates.extend(Self::user_config_path());
        Self::load_first(&candidates)
    }

    /// 加载第一个存在的配置文件，都不存在时使用默认配置
    fn load_first(candidates: &[PathBuf]) -> ConfigResult<(Self, ConfigSource)> {
        for path in candidates {
            match Self::from_toml_file(path) {
                Ok(config) => return Ok((config, ConfigSource::File(path.clone()))),
                Err(ConfigError::FileError(e)) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e),
            }
        }
        Ok((Self::default(), ConfigSource::Default))
    }
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别
    pub level: LogLevel,
}

impl_default!(LoggingConfig {
    level: LogLevel::Info,
});

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// 跟踪
    Trace,
    /// 调试
    Debug,
    /// 信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
}

impl LogLevel {
    /// 作为 `EnvFilter` 指令使用的字符串
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}
