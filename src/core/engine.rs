//! 运行时主入口
//!
//! 定义 `Show` 结构和主运行循环

use crate::audio::{open_sound_player, SoundPlayer};
use crate::config::{LogLevel, ShowConfig};
use crate::countdown::{Countdown, LogDisplay, TextDisplay};
use crate::render::raster::RasterSurface;
use crate::render::surface::DrawSurface;
use crate::scene::{Scene, SceneStats};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;

use super::error::{RenderResult, ShowResult};
use super::pacer::FramePacer;

/// 初始化日志系统
///
/// 配置tracing日志框架。设置了`RUST_LOG`环境变量时以它为准，
/// 否则使用配置文件中的级别。重复调用是安全的。
pub fn init_logging(level: LogLevel) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_filter()));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 动画主结构
///
/// `Show` 把场景循环和它的协作者组装在一起：
/// - 绘制表面（`S`）
/// - 爆炸音效
/// - 倒计时和文字显示
/// - 随机数源
///
/// # 示例
///
/// ```no_run
/// use fireworks_show::config::ShowConfig;
/// use fireworks_show::core::Show;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut config = ShowConfig::default();
///     config.runtime.max_frames = Some(600);
///     Show::from_config(config)?.run()?;
///     Ok(())
/// }
/// ```
pub struct Show<S: DrawSurface> {
    config: ShowConfig,
    scene: Scene,
    surface: S,
    sound: Box<dyn SoundPlayer>,
    countdown: Option<Countdown>,
    display: Box<dyn TextDisplay>,
    rng: StdRng,
}

impl<S: DrawSurface> Show<S> {
    /// 由已经构造好的协作者组装
    pub fn with_parts(
        config: ShowConfig,
        surface: S,
        sound: Box<dyn SoundPlayer>,
        display: Box<dyn TextDisplay>,
    ) -> ShowResult<Self> {
        config.validate()?;

        let countdown = if config.countdown.enabled {
            Some(Countdown::from_config(&config.countdown)?)
        } else {
            None
        };
        let rng = match config.runtime.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let scene = Scene::new(
            config.spawn.clone(),
            config.burst.clone(),
            config.surface.background_fade,
        );

        Ok(Self {
            config,
            scene,
            surface,
            sound,
            countdown,
            display,
            rng,
        })
    }

    /// 执行一帧：场景循环，然后刷新倒计时
    pub fn tick(&mut self) {
        self.scene
            .tick(&mut self.surface, &mut self.rng, self.sound.as_mut());
        if let Some(countdown) = &self.countdown {
            countdown.refresh(self.display.as_mut());
        }
    }

    /// 宿主窗口尺寸变化
    ///
    /// 表面跟随新尺寸，流星被清空；烟花和粒子不受影响。
    /// 尺寸至少为 1 像素。
    pub fn resize(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        tracing::info!(target: "show", width, height, "Surface resized");
        self.surface.resize(width, height);
        self.config.surface.width = width;
        self.config.surface.height = height;
        self.scene.on_resize();
    }

    pub fn stats(&self) -> SceneStats {
        self.scene.stats()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &ShowConfig {
        &self.config
    }
}

impl Show<RasterSurface> {
    /// 按配置创建软件光栅化的动画
    pub fn from_config(config: ShowConfig) -> ShowResult<Self> {
        let surface = RasterSurface::new(config.surface.width, config.surface.height)?;
        let sound = open_sound_player(&config.audio);
        Self::with_parts(config, surface, sound, Box::new(LogDisplay::new()))
    }

    /// 第 `frame` 帧快照的路径
    pub fn snapshot_path(&self, frame: u64) -> PathBuf {
        self.config
            .runtime
            .snapshot_dir
            .join(format!("frame_{:06}.png", frame))
    }

    /// 把当前表面写成 PNG
    pub fn save_snapshot(&self, frame: u64) -> RenderResult<PathBuf> {
        let path = self.snapshot_path(frame);
        self.surface.save_png(&path)?;
        Ok(path)
    }

    /// 运行主循环
    ///
    /// 设置了 `max_frames` 时运行到该帧数后返回，否则一直运行。
    /// 快照写入失败只记录警告，不中断动画。
    pub fn run(&mut self) -> ShowResult<()> {
        let runtime = self.config.runtime.clone();
        if runtime.snapshot_every.is_some() {
            fs::create_dir_all(&runtime.snapshot_dir)?;
        }

        tracing::info!(
            target: "show",
            width = self.config.surface.width,
            height = self.config.surface.height,
            fps = runtime.target_fps,
            "Show starting"
        );

        let mut pacer = FramePacer::new(runtime.target_fps);
        loop {
            let frame = self.scene.stats().frame;
            if runtime.max_frames.is_some_and(|max| frame >= max) {
                break;
            }

            self.tick();
            let frame = frame + 1;

            if let Some(every) = runtime.snapshot_every {
                if frame % every == 0 {
                    match self.save_snapshot(frame) {
                        Ok(path) => {
                            tracing::debug!(target: "render", "Snapshot written to {}", path.display())
                        }
                        Err(e) => tracing::warn!(target: "render", "Snapshot skipped: {}", e),
                    }
                }
            }

            pacer.wait();
        }

        let stats = self.stats();
        tracing::info!(
            target: "show",
            frames = stats.frame,
            launched = stats.fireworks_spawned,
            exploded = stats.fireworks_exploded,
            shooting_stars = stats.shooting_stars_spawned,
            "Show finished"
        );
        Ok(())
    }
}
