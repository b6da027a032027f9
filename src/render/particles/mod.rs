//! 粒子类实体
//!
//! ## 结构
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Firework (emitter)                           │
//! │   - 上升：5 点轨迹，每帧逼近目标高度 2%          │
//! │   - 引爆：150 + 75 个 Particle，两种颜色         │
//! │                                              │
//! │  Particle                                    │
//! │   - 摩擦 0.95，重力 0.3，alpha 每帧 -0.01       │
//! │                                              │
//! │  ShootingStar (streak)                        │
//! │   - 直线运动，20 点渐隐尾巴，和烟花互不相关       │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! 所有运动都按帧计数，没有 delta time。

pub mod emitter;
pub mod particle;
pub mod streak;
pub mod trail;

pub use emitter::Firework;
pub use particle::Particle;
pub use streak::ShootingStar;
pub use trail::Trail;
