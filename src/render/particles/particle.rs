//! 爆炸粒子

use crate::render::surface::{rgb8, BlendMode, DrawSurface};
use glam::Vec2;
use rand::Rng;

/// 每帧速度保留比例
pub const FRICTION: f32 = 0.95;
/// 每帧向下的速度增量
pub const GRAVITY: f32 = 0.3;
/// 每帧 alpha 衰减
pub const ALPHA_DECAY: f32 = 0.01;

/// 发光粒子
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    /// RGB 颜色
    pub color: [u8; 3],
    /// 1 → 0
    pub alpha: f32,
    /// 半径
    pub size: f32,
    /// 剩余帧数
    pub life: i32,
}

impl Particle {
    /// 在 `position` 创建粒子，初速度随机，寿命 80..130 帧，半径 2..5
    pub fn new<R: Rng + ?Sized>(position: Vec2, color: [u8; 3], rng: &mut R) -> Self {
        Self {
            position,
            velocity: Vec2::new(rng.gen_range(-7.5..7.5), rng.gen_range(-7.5..7.5)),
            color,
            alpha: 1.0,
            size: rng.gen_range(2.0..5.0),
            life: rng.gen_range(80..130),
        }
    }

    /// 指定初速度
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn update(&mut self) {
        self.velocity *= FRICTION;
        self.velocity.y += GRAVITY;
        self.position += self.velocity;
        self.alpha -= ALPHA_DECAY;
        self.life -= 1;
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.fill_circle(
            self.position,
            self.size,
            rgb8(self.color, self.alpha),
            BlendMode::Lighter,
        );
    }

    /// 可以被移除
    pub fn is_decayed(&self) -> bool {
        self.alpha <= 0.0 || self.life <= 0
    }
}
