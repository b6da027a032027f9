//! 流星：沿固定角度匀速直线运动，拖着一条渐隐的尾巴穿过表面一次。

use super::trail::Trail;
use crate::render::gradient::LinearGradient;
use crate::render::surface::{BlendMode, DrawSurface, Paint};
use glam::{Vec2, Vec4};
use rand::Rng;
use std::f32::consts::PI;

/// 尾巴保留的点数
pub const TRAIL_LENGTH: usize = 20;

/// 流星
#[derive(Debug, Clone)]
pub struct ShootingStar {
    pub position: Vec2,
    pub angle: f32,
    pub speed: f32,
    pub brightness: f32,
    /// 描边宽度
    pub width: f32,
    alive: bool,
    trail: Trail,
}

impl ShootingStar {
    /// 从表面顶边左侧 30% 的范围内出发，朝右下方飞
    pub fn new<R: Rng + ?Sized>(surface_width: f32, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * surface_width * 0.3, 0.0),
            angle: PI / 4.0 + rng.gen::<f32>() * PI / 8.0,
            speed: rng.gen_range(15.0..25.0),
            brightness: rng.gen_range(0.5..1.0),
            width: rng.gen_range(1.0..3.0),
            alive: true,
            trail: Trail::new(TRAIL_LENGTH),
        }
    }

    /// 前进一步；越过右边或下边后死亡
    ///
    /// 只检查右边和下边：流星总是朝右下方飞，不会从左边或上边离开。
    pub fn update(&mut self, bounds: Vec2) {
        self.position += Vec2::from_angle(self.angle) * self.speed;
        self.trail.push(self.position);

        if self.position.x > bounds.x || self.position.y > bounds.y {
            self.alive = false;
        }
    }

    /// 从当前位置（亮）到最旧的尾巴点（透明）渐变描边
    pub fn draw(&self, surface: &mut dyn DrawSurface) {
        let path = self.trail.path_or(self.position);
        let tail = self.trail.oldest().unwrap_or(self.position);
        let gradient = LinearGradient::new(self.position, tail)
            .add_stop(0.0, Vec4::new(1.0, 1.0, 1.0, self.brightness))
            .add_stop(1.0, Vec4::new(1.0, 1.0, 1.0, 0.0));

        surface.stroke_path(&path, self.width, &Paint::Linear(gradient), BlendMode::Lighter);
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::recording::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_star_ranges() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let star = ShootingStar::new(1000.0, &mut rng);
            assert_eq!(star.position.y, 0.0);
            assert!((0.0..300.0).contains(&star.position.x));
            assert!(star.angle >= PI / 4.0 && star.angle <= PI / 4.0 + PI / 8.0);
            assert!((15.0..25.0).contains(&star.speed));
            assert!(star.is_alive());
        }
    }

    #[test]
    fn test_leaving_left_edge_keeps_it_alive() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut star = ShootingStar::new(100.0, &mut rng);
        star.angle = PI;
        star.speed = 50.0;
        star.position = Vec2::new(10.0, 10.0);
        star.update(Vec2::new(100.0, 100.0));
        assert!(star.position.x < 0.0);
        assert!(star.is_alive());
    }

    #[test]
    fn test_draw_gradient_runs_head_to_tail() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut star = ShootingStar::new(800.0, &mut rng);
        let bounds = Vec2::new(800.0, 600.0);
        for _ in 0..3 {
            star.update(bounds);
        }
        let mut surface = RecordingSurface::new(800, 600);
        star.draw(&mut surface);

        match &surface.commands()[0] {
            DrawCommand::StrokePath {
                points,
                paint: Paint::Linear(gradient),
                blend,
                ..
            } => {
                assert_eq!(points.len(), 3);
                assert_eq!(gradient.start, star.position);
                assert_eq!(gradient.end, points[0]);
                assert_eq!(*blend, BlendMode::Lighter);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn dies_exactly_when_past_right_or_bottom(
            seed in any::<u64>(),
            width in 50.0f32..2000.0,
            height in 50.0f32..2000.0,
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut star = ShootingStar::new(width, &mut rng);
            let bounds = Vec2::new(width, height);
            let mut died = false;
            for _ in 0..500 {
                star.update(bounds);
                let outside = star.position.x > width || star.position.y > height;
                if died {
                    // 死亡后不会复活
                    prop_assert!(!star.is_alive());
                } else {
                    prop_assert_eq!(star.is_alive(), !outside);
                    died = outside;
                }
                prop_assert!(star.trail().len() <= TRAIL_LENGTH);
            }
            prop_assert!(died);
        }
    }
}
