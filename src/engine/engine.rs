use crate::{
    config::Config,
    engine::frame::{FrameStats, RenderOptions, render_frame},
    input::{InputSource, apply_input},
    renderer::Surface,
    world::{Camera, Scene},
};

/// Scene, camera and output surface for one running view.
///
/// Each [`Engine::step`] applies input to the pose first and renders
/// second, so collision flags from a frame gate the *next* frame's moves.
pub struct Engine<S: Surface> {
    pub surface: S,
    pub scene: Scene,
    pub camera: Camera,
    pub options: RenderOptions,
    on_wall: bool,
}

impl<S: Surface> Engine<S> {
    pub fn new(surface: S, scene: Scene, camera: Camera, options: RenderOptions) -> Self {
        Self {
            surface,
            scene,
            camera,
            options,
            on_wall: false,
        }
    }

    /// Engine whose camera covers every column and row of `surface`.
    pub fn from_config(surface: S, scene: Scene, cfg: &Config) -> Self {
        let camera = Camera::from_config(
            &cfg.camera,
            surface.width() as u32,
            surface.height() as u32,
        );
        Self::new(surface, scene, camera, cfg.render.options())
    }

    /// Apply this frame's input, then draw.
    pub fn step(&mut self, input: &impl InputSource, dt: f64) -> FrameStats {
        apply_input(&mut self.camera, input, dt);
        self.render_frame()
    }

    pub fn render_frame(&mut self) -> FrameStats {
        let stats = render_frame(
            &mut self.camera,
            &self.scene,
            &self.options,
            &mut self.surface,
        );

        let on_wall = stats.inside_wall > 0;
        if on_wall != self.on_wall {
            if on_wall {
                log::warn!("camera at {} is on a wall plane", self.camera.pos());
            } else {
                log::info!("camera left the wall plane");
            }
            self.on_wall = on_wall;
        }
        stats
    }

    /// Whether the last rendered frame started any ray on a wall.
    #[inline]
    pub fn on_wall(&self) -> bool {
        self.on_wall
    }
}
