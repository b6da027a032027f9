//! 音频模块
//!
//! 烟花爆炸时触发一次音效。所有烟花共享同一个音效资源，语义是
//! “重置到开头再播放”：即使上一次还没播完，也从头重新开始。
//! 底层使用 rodio 库实现跨平台音频播放；没有设备或没有音效文件时退化为静音。
//!
//! 播放失败只记录日志，不会打断动画帧。

pub mod player;

pub use player::RodioSoundPlayer;

use crate::config::AudioConfig;

/// 音效播放协作者
pub trait SoundPlayer {
    /// 从头播放音效
    fn restart(&mut self);
}

/// 静音播放器
///
/// 只统计被触发的次数。
#[derive(Debug, Default, Clone)]
pub struct SilentPlayer {
    restarts: u64,
}

impl SilentPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// 被触发的次数
    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}

impl SoundPlayer for SilentPlayer {
    fn restart(&mut self) {
        self.restarts += 1;
    }
}

/// 根据配置创建播放器
///
/// 打开失败时记录警告并返回静音播放器。
pub fn open_sound_player(config: &AudioConfig) -> Box<dyn SoundPlayer> {
    let Some(path) = config.active_sound() else {
        tracing::debug!(target: "audio", "No explosion sound configured, running silent");
        return Box::new(SilentPlayer::new());
    };

    match RodioSoundPlayer::open(path, config.volume) {
        Ok(player) => {
            tracing::info!(target: "audio", "Explosion sound loaded from {}", path.display());
            Box::new(player)
        }
        Err(e) => {
            tracing::warn!(target: "audio", "Audio unavailable, running silent: {}", e);
            Box::new(SilentPlayer::new())
        }
    }
}
