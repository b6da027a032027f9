//! 场景循环
//!
//! 持有烟花、流星和脱离的粒子三个种群，每帧生成、推进、剔除并绘制。

pub mod manager;

pub use manager::{Scene, SceneStats};
