//! 统一错误处理模块
//!
//! 提供动画运行时范围内的错误类型定义
//!
//! ## 错误类型分层
//!
//! - **配置错误** (`config::ConfigError`): 配置文件读取、解析、验证
//! - **协作者错误** (`AudioError`, `RenderError`): 声音与绘制表面的初始化和输出
//!
//! 帧内（tick）的所有操作都是全函数，不会返回错误；这里的错误只出现在启动阶段
//! 或快照输出等外部 I/O 上。`ShowError` 统一承载这些错误。

use crate::config::ConfigError;
use thiserror::Error;

/// 运行时核心错误类型
#[derive(Error, Debug)]
pub enum ShowError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 绘制表面错误
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("Failed to write snapshot {path}: {reason}")]
    Snapshot { path: String, reason: String },
}

/// 音频系统错误
///
/// 只在打开设备或加载音效时产生。调用方把它降级为警告并改用静音播放器，
/// 所以它不会出现在 `ShowError` 中；播放期间的失败由播放器自行记录并忽略。
#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to open audio output device: {0}")]
    NoDevice(String),

    #[error("Failed to load sound {path}: {source}")]
    Load {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode sound: {0}")]
    Decode(String),
}

/// 结果类型别名
pub type ShowResult<T> = Result<T, ShowError>;
pub type RenderResult<T> = Result<T, RenderError>;
pub type AudioResult<T> = Result<T, AudioError>;
