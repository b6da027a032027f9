//! 场景循环
//!
//! 每帧一次 `tick`：
//!
//! 1. 黑色半透明矩形覆盖整个表面（拖尾）
//! 2. 烟花未满上限时按概率生成一个
//! 3. 流星未满上限时按概率生成一个
//! 4. 流星：移除已死亡的，其余更新并绘制
//! 5. 烟花：该引爆的引爆并移出活跃集合，粒子交给场景继续演化；
//!    其余先推进自身粒子再更新并绘制自身。然后推进脱离的粒子
//!
//! 新生成的实体追加在集合末尾，同一帧内就会被处理。移除采用先标记再压缩
//! （`retain`），不会跳过紧跟在被移除元素后面的实体。

use crate::audio::SoundPlayer;
use crate::config::{BurstConfig, SpawnConfig};
use crate::render::particles::{Firework, Particle, ShootingStar};
use crate::render::surface::{BlendMode, DrawSurface};
use glam::{Vec2, Vec4};
use rand::Rng;

/// 场景统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneStats {
    /// 已执行的帧数
    pub frame: u64,
    /// 活跃烟花数
    pub fireworks: usize,
    /// 活跃流星数
    pub shooting_stars: usize,
    /// 存活粒子数（含仍挂在烟花上的）
    pub particles: usize,
    /// 累计生成的烟花
    pub fireworks_spawned: u64,
    /// 累计引爆的烟花
    pub fireworks_exploded: u64,
    /// 累计生成的流星
    pub shooting_stars_spawned: u64,
}

/// 场景
pub struct Scene {
    spawn: SpawnConfig,
    burst: BurstConfig,
    background_fade: f32,
    fireworks: Vec<Firework>,
    shooting_stars: Vec<ShootingStar>,
    /// 引爆后脱离烟花、继续演化的粒子
    debris: Vec<Particle>,
    stats: SceneStats,
}

impl Scene {
    pub fn new(spawn: SpawnConfig, burst: BurstConfig, background_fade: f32) -> Self {
        Self {
            fireworks: Vec::with_capacity(spawn.max_fireworks),
            shooting_stars: Vec::with_capacity(spawn.max_shooting_stars),
            debris: Vec::new(),
            spawn,
            burst,
            background_fade,
            stats: SceneStats::default(),
        }
    }

    /// 执行一帧
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn DrawSurface,
        rng: &mut R,
        sound: &mut dyn SoundPlayer,
    ) {
        let size = surface.size();
        surface.fill_rect(
            Vec2::ZERO,
            size,
            Vec4::new(0.0, 0.0, 0.0, self.background_fade),
            BlendMode::SourceOver,
        );

        self.maybe_spawn(size, rng);
        self.update_shooting_stars(surface, size);
        self.update_fireworks(surface, rng, sound);
        self.update_debris(surface);

        self.stats.frame += 1;
    }

    fn maybe_spawn<R: Rng + ?Sized>(&mut self, size: Vec2, rng: &mut R) {
        if self.fireworks.len() < self.spawn.max_fireworks
            && rng.gen_bool(self.spawn.firework_chance.clamp(0.0, 1.0))
        {
            self.fireworks.push(Firework::new(size, rng));
            self.stats.fireworks_spawned += 1;
            tracing::debug!(target: "scene", active = self.fireworks.len(), "Firework launched");
        }

        if self.shooting_stars.len() < self.spawn.max_shooting_stars
            && rng.gen_bool(self.spawn.shooting_star_chance.clamp(0.0, 1.0))
        {
            self.shooting_stars.push(ShootingStar::new(size.x, rng));
            self.stats.shooting_stars_spawned += 1;
            tracing::debug!(target: "scene", active = self.shooting_stars.len(), "Shooting star spawned");
        }
    }

    fn update_shooting_stars(&mut self, surface: &mut dyn DrawSurface, bounds: Vec2) {
        self.shooting_stars.retain(ShootingStar::is_alive);
        for star in &mut self.shooting_stars {
            star.update(bounds);
            star.draw(surface);
        }
    }

    fn update_fireworks<R: Rng + ?Sized>(
        &mut self,
        surface: &mut dyn DrawSurface,
        rng: &mut R,
        sound: &mut dyn SoundPlayer,
    ) {
        let burst = &self.burst;
        let debris = &mut self.debris;
        let mut exploded = 0;

        self.fireworks.retain_mut(|firework| {
            if firework.should_explode {
                firework.explode(burst, rng, sound);
                debris.append(&mut firework.take_particles());
                exploded += 1;
                return false;
            }

            firework.update_particles(surface);
            firework.update();
            firework.draw(surface);
            true
        });

        self.stats.fireworks_exploded += exploded;
    }

    fn update_debris(&mut self, surface: &mut dyn DrawSurface) {
        self.debris.retain(|p| !p.is_decayed());
        for particle in &mut self.debris {
            particle.update();
            particle.draw(surface);
        }
    }

    /// 表面尺寸变化：只清空流星，烟花和粒子保持不变
    pub fn on_resize(&mut self) {
        let cleared = self.shooting_stars.len();
        self.shooting_stars.clear();
        tracing::debug!(target: "scene", cleared, "Shooting stars cleared on resize");
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting_stars
    }

    /// 脱离烟花后仍存活的粒子
    pub fn debris(&self) -> &[Particle] {
        &self.debris
    }

    /// 存活粒子总数
    pub fn particle_count(&self) -> usize {
        self.debris.len() + self.fireworks.iter().map(|f| f.particles().len()).sum::<usize>()
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            fireworks: self.fireworks.len(),
            shooting_stars: self.shooting_stars.len(),
            particles: self.particle_count(),
            ..self.stats
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::SilentPlayer;
    use crate::render::recording::{DrawCommand, RecordingSurface};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn always_spawn() -> SpawnConfig {
        SpawnConfig {
            firework_chance: 1.0,
            shooting_star_chance: 1.0,
            ..Default::default()
        }
    }

    fn scene(spawn: SpawnConfig) -> Scene {
        Scene::new(spawn, BurstConfig::default(), 0.15)
    }

    #[test]
    fn test_background_fade_is_first_command() {
        let mut scene = scene(SpawnConfig::default());
        let mut surface = RecordingSurface::new(640, 480);
        let mut rng = StdRng::seed_from_u64(1);
        scene.tick(&mut surface, &mut rng, &mut SilentPlayer::new());

        assert_eq!(
            surface.commands()[0],
            DrawCommand::FillRect {
                origin: Vec2::ZERO,
                size: Vec2::new(640.0, 480.0),
                color: Vec4::new(0.0, 0.0, 0.0, 0.15),
                blend: BlendMode::SourceOver,
            }
        );
    }

    #[test]
    fn test_spawned_entities_are_processed_same_tick() {
        let mut scene = scene(always_spawn());
        let mut surface = RecordingSurface::new(640, 480);
        let mut rng = StdRng::seed_from_u64(2);
        scene.tick(&mut surface, &mut rng, &mut SilentPlayer::new());

        assert_eq!(scene.fireworks().len(), 1);
        assert_eq!(scene.shooting_stars().len(), 1);
        assert_eq!(scene.fireworks()[0].trail().len(), 1);
        assert_eq!(scene.shooting_stars()[0].trail().len(), 1);

        // 背景 → 流星 → 烟花（轨迹 + 核心）
        let commands = surface.commands();
        assert_eq!(commands.len(), 4);
        assert!(matches!(commands[1], DrawCommand::StrokePath { blend: BlendMode::Lighter, .. }));
        assert!(matches!(commands[2], DrawCommand::StrokePath { blend: BlendMode::SourceOver, .. }));
        assert!(matches!(commands[3], DrawCommand::FillCircle { .. }));
    }

    #[test]
    fn test_caps_are_respected() {
        let mut scene = scene(always_spawn());
        let mut surface = RecordingSurface::new(640, 480);
        let mut rng = StdRng::seed_from_u64(3);
        let mut sound = SilentPlayer::new();
        for _ in 0..50 {
            scene.tick(&mut surface, &mut rng, &mut sound);
            surface.clear();
            assert!(scene.fireworks().len() <= 8);
            assert!(scene.shooting_stars().len() <= 3);
        }
        assert_eq!(scene.fireworks().len(), 8);
    }

    #[test]
    fn test_explosion_moves_particles_to_debris() {
        let mut scene = scene(SpawnConfig {
            firework_chance: 1.0,
            shooting_star_chance: 0.0,
            max_fireworks: 1,
            ..Default::default()
        });
        let mut surface = RecordingSurface::new(640, 480);
        let mut rng = StdRng::seed_from_u64(4);
        let mut sound = SilentPlayer::new();

        let mut frames = 0;
        while scene.stats().fireworks_exploded == 0 {
            scene.tick(&mut surface, &mut rng, &mut sound);
            surface.clear();
            frames += 1;
            assert!(frames < 1000);
        }

        assert_eq!(sound.restarts(), 1);
        // 同一帧内脱离的粒子已经被推进一次
        assert_eq!(scene.debris().len(), 225);
        assert!(scene.debris().iter().all(|p| (p.alpha - 0.99).abs() < 1e-5));
    }

    #[test]
    fn test_debris_eventually_decays() {
        let mut scene = scene(SpawnConfig {
            firework_chance: 1.0,
            shooting_star_chance: 0.0,
            max_fireworks: 1,
            ..Default::default()
        });
        let mut surface = RecordingSurface::new(640, 480);
        let mut rng = StdRng::seed_from_u64(5);
        let mut sound = SilentPlayer::new();
        while scene.stats().fireworks_exploded == 0 {
            scene.tick(&mut surface, &mut rng, &mut sound);
            surface.clear();
        }

        // 停止生成，粒子最多 130 帧后全部移除
        scene.spawn.firework_chance = 0.0;
        scene.fireworks.clear();
        for _ in 0..131 {
            scene.tick(&mut surface, &mut rng, &mut sound);
            surface.clear();
        }
        assert!(scene.debris().is_empty());
        assert_eq!(scene.particle_count(), 0);
    }

    #[test]
    fn test_resize_only_clears_shooting_stars() {
        let mut scene = scene(always_spawn());
        let mut surface = RecordingSurface::new(640, 480);
        let mut rng = StdRng::seed_from_u64(6);
        let mut sound = SilentPlayer::new();
        for _ in 0..300 {
            scene.tick(&mut surface, &mut rng, &mut sound);
            surface.clear();
        }
        let fireworks = scene.fireworks().len();
        let particles = scene.particle_count();
        assert!(fireworks > 0);
        assert!(!scene.shooting_stars().is_empty());

        scene.on_resize();

        assert!(scene.shooting_stars().is_empty());
        assert_eq!(scene.fireworks().len(), fireworks);
        assert_eq!(scene.particle_count(), particles);
    }

    #[test]
    fn test_dead_star_removed_on_next_tick() {
        let mut scene = scene(SpawnConfig {
            firework_chance: 0.0,
            shooting_star_chance: 1.0,
            max_shooting_stars: 1,
            ..Default::default()
        });
        let mut surface = RecordingSurface::new(100, 100);
        let mut rng = StdRng::seed_from_u64(7);
        let mut sound = SilentPlayer::new();

        let mut died_at = None;
        for frame in 0..100 {
            scene.tick(&mut surface, &mut rng, &mut sound);
            surface.clear();
            if scene.shooting_stars().iter().any(|s| !s.is_alive()) {
                died_at = Some(frame);
                break;
            }
        }
        assert!(died_at.is_some());
        let spawned = scene.stats().shooting_stars_spawned;

        // 生成检查在移除之前：这一帧移除死亡的流星，但不补位
        scene.tick(&mut surface, &mut rng, &mut sound);
        assert_eq!(scene.stats().shooting_stars_spawned, spawned);
        assert!(scene.shooting_stars().is_empty());

        scene.tick(&mut surface, &mut rng, &mut sound);
        assert_eq!(scene.stats().shooting_stars_spawned, spawned + 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn populations_never_exceed_caps(seed in any::<u64>(), frames in 1usize..400) {
            let mut scene = scene(SpawnConfig {
                firework_chance: 0.5,
                shooting_star_chance: 0.5,
                ..Default::default()
            });
            let mut surface = RecordingSurface::new(320, 240);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut sound = SilentPlayer::new();
            for _ in 0..frames {
                scene.tick(&mut surface, &mut rng, &mut sound);
                surface.clear();
                prop_assert!(scene.fireworks().len() <= 8);
                prop_assert!(scene.shooting_stars().len() <= 3);
            }
            let stats = scene.stats();
            prop_assert_eq!(stats.frame, frames as u64);
            prop_assert_eq!(stats.fireworks_exploded, sound.restarts());
        }
    }
}
