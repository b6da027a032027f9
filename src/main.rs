use clap::Parser;
use fireworks_show::config::{ConfigSource, ShowConfig};
use fireworks_show::core::{init_logging, Show, ShowResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fireworks")]
#[command(about = "Fireworks, shooting stars and a countdown, rendered frame by frame", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (TOML or JSON); defaults to ./fireworks.toml or the user config dir
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(short, long)]
    frames: Option<u64>,

    /// Surface width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Surface height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Seed for a reproducible show
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write a PNG snapshot every N frames
    #[arg(long)]
    snapshot_every: Option<u64>,

    /// Snapshot output directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Explosion sound file
    #[arg(long)]
    sound: Option<PathBuf>,

    /// Target frames per second
    #[arg(long)]
    fps: Option<u32>,
}

impl Cli {
    fn apply(self, config: &mut ShowConfig) {
        if let Some(frames) = self.frames {
            config.runtime.max_frames = Some(frames);
        }
        if let Some(width) = self.width {
            config.surface.width = width;
        }
        if let Some(height) = self.height {
            config.surface.height = height;
        }
        if let Some(seed) = self.seed {
            config.runtime.seed = Some(seed);
        }
        if let Some(every) = self.snapshot_every {
            config.runtime.snapshot_every = Some(every);
        }
        if let Some(out) = self.out {
            config.runtime.snapshot_dir = out;
        }
        if let Some(sound) = self.sound {
            config.audio.sound_path = Some(sound);
        }
        if let Some(fps) = self.fps {
            config.runtime.target_fps = fps;
        }
    }
}

fn run(cli: Cli) -> ShowResult<()> {
    let (mut config, source) = match &cli.config {
        Some(path) => (ShowConfig::from_file(path)?, ConfigSource::File(path.clone())),
        None => ShowConfig::load_or_default()?,
    };
    config.apply_env_overrides();
    cli.apply(&mut config);

    init_logging(config.logging.level);
    match &source {
        ConfigSource::File(path) => tracing::info!(target: "show", "Config loaded from {}", path.display()),
        ConfigSource::Default => tracing::info!(target: "show", "Using default config"),
    }

    Show::from_config(config)?.run()
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Fireworks show failed: {}", e);
        std::process::exit(1);
    }
}
