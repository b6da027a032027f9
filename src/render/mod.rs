//! 渲染模块
//!
//! - `surface` - 绘制表面 trait、画笔和合成模式
//! - `gradient` - 颜色渐变
//! - `raster` - 软件光栅化表面（可写 PNG 快照）
//! - `recording` - 记录绘制调用的表面
//! - `particles` - 粒子、烟花和流星

pub mod gradient;
pub mod particles;
pub mod raster;
pub mod recording;
pub mod surface;

pub use gradient::{ColorGradient, ColorStop, LinearGradient};
pub use particles::{Firework, Particle, ShootingStar, Trail};
pub use raster::RasterSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{rgb8, BlendMode, DrawSurface, Paint};
