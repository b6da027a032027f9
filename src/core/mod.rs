//! 核心模块
//!
//! 包含运行时的核心功能：
//! - `engine` - `Show` 主结构、运行循环和日志初始化
//! - `error` - 错误类型定义
//! - `pacer` - 帧节拍器

#[macro_use]
pub mod macros;
pub mod engine;
pub mod error;
pub mod pacer;

// 重新导出错误类型
pub use error::{AudioError, AudioResult, RenderError, RenderResult, ShowError, ShowResult};

// 重新导出主要类型
pub use engine::{init_logging, Show};
pub use pacer::FramePacer;
