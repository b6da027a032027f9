//! # Fireworks Show
//!
//! A night-sky animation loop built with Rust: rockets rise toward aim points and
//! burst into two-ring showers of particles, shooting stars streak across the sky,
//! and a countdown ticks toward a target date.
//!
//! ## Features
//!
//! - **Scene Loop**: Per-frame spawn, update, cull and draw of three populations
//! - **Software Rendering**: Premultiplied RGBA raster with source-over and additive blending
//! - **Audio**: Explosion sound restarted on every burst, via rodio
//! - **Countdown**: Days/hours/minutes/seconds to a local target time
//! - **Configuration**: TOML/JSON config files with environment overrides
//!
//! ## Architecture Design
//!
//! Entities know nothing about the host. Everything they touch is passed in:
//! - **Surface**: [`render::DrawSurface`] receives fills and strokes
//! - **Sound**: [`audio::SoundPlayer`] is restarted on explosion
//! - **Randomness**: any `rand::Rng`, so seeded runs are reproducible
//!
//! ### Example
//!
//! ```
//! use fireworks_show::audio::SilentPlayer;
//! use fireworks_show::config::ShowConfig;
//! use fireworks_show::render::RecordingSurface;
//! use fireworks_show::scene::Scene;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let config = ShowConfig::default();
//! let mut scene = Scene::new(config.spawn, config.burst, config.surface.background_fade);
//! let mut surface = RecordingSurface::new(800, 600);
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut sound = SilentPlayer::new();
//!
//! for _ in 0..60 {
//!     scene.tick(&mut surface, &mut rng, &mut sound);
//! }
//! assert_eq!(scene.stats().frame, 60);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Show runtime, errors and frame pacing
//! - [`config`]: Configuration system
//! - [`render`]: Drawing surfaces and the particle entities
//! - [`scene`]: Scene loop
//! - [`audio`]: Explosion sound playback
//! - [`countdown`]: Countdown text

/// Core runtime including the show loop and initialization
pub mod core;
/// Configuration system
pub mod config;
/// Drawing surfaces, gradients and particle entities
pub mod render;
/// Scene loop owning every live entity
pub mod scene;
/// Explosion sound playback
pub mod audio;
/// Countdown to a target date
pub mod countdown;
