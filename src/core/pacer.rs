//! 帧节拍器
//!
//! 宿主的“每次刷新回调一次”原语：按目标帧率睡眠到下一帧。不计算 delta time，
//! 动画按帧推进；落后超过一帧时不补帧，直接从当前时刻重新计时。

use std::thread;
use std::time::{Duration, Instant};

/// 固定间隔的帧节拍器
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_duration: Duration,
    next_frame: Instant,
}

impl FramePacer {
    pub fn new(target_fps: u32) -> Self {
        let frame_duration = Duration::from_nanos(1_000_000_000 / target_fps.max(1) as u64);
        Self {
            frame_duration,
            next_frame: Instant::now() + frame_duration,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// 等待到下一帧的时刻
    ///
    /// 返回是否真的睡眠过（false 表示这一帧已经超时）。
    pub fn wait(&mut self) -> bool {
        let now = Instant::now();
        let slept = if now < self.next_frame {
            thread::sleep(self.next_frame - now);
            true
        } else {
            false
        };

        self.next_frame += self.frame_duration;
        let now = Instant::now();
        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration() {
        let pacer = FramePacer::new(50);
        assert_eq!(pacer.frame_duration(), Duration::from_millis(20));
    }

    #[test]
    fn test_waits_at_least_one_frame() {
        let mut pacer = FramePacer::new(200);
        let start = Instant::now();
        pacer.wait();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(9));
    }

    #[test]
    fn test_late_frame_does_not_burst() {
        let mut pacer = FramePacer::new(100);
        thread::sleep(Duration::from_millis(50));
        assert!(!pacer.wait());
        // 重新计时后下一帧需要等待
        assert!(pacer.wait());
    }
}
