//! 烟花：先沿一条弯曲轨迹上升，到达目标高度后炸开成两圈粒子。

use super::particle::Particle;
use super::trail::Trail;
use crate::audio::SoundPlayer;
use crate::config::BurstConfig;
use crate::render::surface::{BlendMode, DrawSurface, Paint};
use glam::{Vec2, Vec4};
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

/// 上升轨迹保留的点数
pub const TRAIL_LENGTH: usize = 5;
/// 距目标高度小于该值时引爆
pub const EXPLODE_DISTANCE: f32 = 10.0;
/// 每帧走完剩余距离的比例
pub const APPROACH_RATE: f32 = 0.02;
/// 轨迹水平分量瞄准的半径
pub const AIM_RADIUS: f32 = 50.0;

/// 第一圈粒子速度
pub const PRIMARY_SPEED: Range<f32> = 8.0..12.0;
/// 第二圈粒子速度
pub const SECONDARY_SPEED: Range<f32> = 6.0..9.0;

const BRIGHTNESS: f32 = 0.5;
const TRAIL_WIDTH: f32 = 2.0;
const CORE_RADIUS: f32 = 3.0;
const FALLBACK_COLOR: [u8; 3] = [255, 255, 255];

/// 烟花
#[derive(Debug, Clone)]
pub struct Firework {
    pub position: Vec2,
    /// 引爆高度（从顶部量起）
    pub target_y: f32,
    /// 构造时确定的轨迹角度，之后不再变化
    pub angle: f32,
    pub should_explode: bool,
    brightness: f32,
    trail: Trail,
    particles: Vec<Particle>,
}

impl Firework {
    /// 在表面底部随机位置创建烟花
    ///
    /// 目标高度在表面高度的 30%–50% 之间。角度的水平分量是每个实例随机的，
    /// 所以各烟花的弯曲方向并不一致。
    pub fn new<R: Rng + ?Sized>(surface_size: Vec2, rng: &mut R) -> Self {
        let x = rng.gen::<f32>() * surface_size.x;
        let y = surface_size.y;
        let target_y = surface_size.y * 0.3 + rng.gen::<f32>() * surface_size.y * 0.2;
        let angle = (target_y - y).atan2((rng.gen::<f32>() - 0.5) * 30.0);

        Self {
            position: Vec2::new(x, y),
            target_y,
            angle,
            should_explode: false,
            brightness: BRIGHTNESS,
            trail: Trail::new(TRAIL_LENGTH),
            particles: Vec::new(),
        }
    }

    pub fn update(&mut self) {
        self.trail.push(self.position);

        let dy = self.target_y - self.position.y;
        let dx = self.angle.cos() * AIM_RADIUS - self.position.x;
        self.position.x += dx * APPROACH_RATE;
        self.position.y += dy * APPROACH_RATE;

        if dy.abs() < EXPLODE_DISTANCE {
            self.should_explode = true;
        }
    }

    /// 炸开：两圈均匀分布的粒子追加到自身的粒子集合，并重新播放音效
    pub fn explode<R: Rng + ?Sized>(
        &mut self,
        burst: &BurstConfig,
        rng: &mut R,
        sound: &mut dyn SoundPlayer,
    ) {
        let primary = burst.palette.choose(rng).copied().unwrap_or(FALLBACK_COLOR);
        self.ring(burst.primary_count, primary, PRIMARY_SPEED, rng);

        let secondary = burst.palette.choose(rng).copied().unwrap_or(FALLBACK_COLOR);
        self.ring(burst.secondary_count, secondary, SECONDARY_SPEED, rng);

        tracing::debug!(
            target: "scene",
            x = self.position.x,
            y = self.position.y,
            particles = self.particles.len(),
            "Firework exploded"
        );
        sound.restart();
    }

    fn ring<R: Rng + ?Sized>(&mut self, count: usize, color: [u8; 3], speed: Range<f32>, rng: &mut R) {
        self.particles.reserve(count);
        for i in 0..count {
            let angle = i as f32 * TAU / count as f32;
            let velocity = Vec2::from_angle(angle) * rng.gen_range(speed.clone());
            self.particles
                .push(Particle::new(self.position, color, rng).with_velocity(velocity));
        }
    }

    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let path = self.trail.path_or(self.position);
        surface.stroke_path(
            &path,
            TRAIL_WIDTH,
            &Paint::Solid(Vec4::new(1.0, 1.0, 1.0, self.brightness)),
            BlendMode::SourceOver,
        );
        surface.fill_circle(
            self.position,
            CORE_RADIUS,
            Vec4::new(1.0, 1.0, 1.0, (self.brightness + 0.5).min(1.0)),
            BlendMode::SourceOver,
        );
    }

    /// 推进并绘制自身的粒子，先移除已衰减的
    ///
    /// 在场景里引爆后粒子会立即交给 `Scene::debris`，所以这里通常是空集合。
    pub fn update_particles(&mut self, surface: &mut dyn DrawSurface) {
        self.particles.retain(|p| !p.is_decayed());
        for particle in &mut self.particles {
            particle.update();
            particle.draw(surface);
        }
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// 交出粒子集合的所有权
    pub fn take_particles(&mut self) -> Vec<Particle> {
        std::mem::take(&mut self.particles)
    }
}
