//! First-person segment viewer.
//!
//! Controls  ↑/↓ = forward/back ←/→ = turn Esc = quit
//!
//! ```bash
//! cargo run --release --bin view -- --scene level.toml
//! ```

use anyhow::Context;
use clap::Parser;
use minifb::{Key, Window, WindowOptions};
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use segcast::{
    config::Config,
    engine::Engine,
    input::{Action, FrameClock, InputSource},
    renderer::Framebuffer,
    world::{Scene, load_scene},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(version, about = "First-person raycasting viewer")]
struct Args {
    /// TOML config file (window, camera, render sections).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML scene file with `[[segments]]`; the built-in room if omitted.
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Override window width (= number of rays).
    #[arg(long)]
    width: Option<u32>,

    /// Override window height.
    #[arg(long)]
    height: Option<u32>,

    /// Override horizontal field of view in degrees.
    #[arg(long)]
    fov: Option<f64>,
}

/// Arrow keys → logical actions.
struct Keys<'a>(&'a Window);

impl InputSource for Keys<'_> {
    fn is_held(&self, action: Action) -> bool {
        let key = match action {
            Action::TurnLeft => Key::Left,
            Action::TurnRight => Key::Right,
            Action::MoveForward => Key::Up,
            Action::MoveBackward => Key::Down,
        };
        self.0.is_key_down(key)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // ─────────── config & scene ───────
    let mut cfg = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(w) = args.width {
        cfg.window.width = w;
    }
    if let Some(h) = args.height {
        cfg.window.height = h;
    }
    if let Some(fov) = args.fov {
        cfg.camera.fov_deg = fov;
    }
    cfg.validate().context("invalid settings")?;

    let scene = match &args.scene {
        Some(path) => {
            load_scene(path).with_context(|| format!("loading scene {}", path.display()))?
        }
        None => {
            log::info!("no scene given, using the built-in room");
            Scene::demo()
        }
    };

    let (w, h) = (cfg.window.width as usize, cfg.window.height as usize);
    let mut engine = Engine::from_config(Framebuffer::new(w, h), scene, &cfg);

    // ─────────── window ────────────
    let mut win = Window::new(&cfg.window.title, w, h, WindowOptions::default())
        .context("creating window")?;
    win.set_target_fps(cfg.window.target_fps);

    let mut clock = FrameClock::new();
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = clock.tick();
        let t0 = Instant::now();

        engine.step(&Keys(&win), dt);
        acc_time += t0.elapsed();
        acc_frames += 1;

        engine
            .surface
            .present(|fb, w, h| win.update_with_buffer(fb, w, h))
            .context("presenting frame")?;

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames.max(1) as f64;
            let pos = engine.camera.pos();
            log::info!(
                "avg render: {:.2} ms  ({:.1} FPS)  pos ({:.2}, {:.2})",
                avg_ms,
                acc_frames as f64 / last_print.elapsed().as_secs_f64(),
                pos.x,
                pos.y
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
