use crate::api::types::BodyId;
use crate::components::body::CelestialBody;
use crate::core::scene::Scene;
use crate::core::time::{TickClock, DEFAULT_MAX_STEPS};
use crate::renderer::traits::Canvas;
use crate::systems::lighting::LightState;

/// Configuration for the frame driver.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    /// Wall time per simulation tick in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Simulation time handed to every body per tick (default: 1.0).
    pub elapsed_per_tick: f32,
    /// Maximum ticks run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            elapsed_per_tick: 1.0,
            max_steps_per_frame: DEFAULT_MAX_STEPS,
        }
    }
}

/// Headless frame driver.
///
/// Owns the scene, the global lighting switches and the tick clock. Each
/// frame runs whole ticks of `update` over every body first, then one draw
/// pass of every body into the caller's canvas.
pub struct Orrery {
    scene: Scene,
    lights: LightState,
    clock: TickClock,
    config: RunnerConfig,
    ticks: u64,
    frames: u64,
}

impl Orrery {
    pub fn new(scene: Scene) -> Self {
        Self::with_config(scene, RunnerConfig::default())
    }

    pub fn with_config(scene: Scene, config: RunnerConfig) -> Self {
        log::info!(
            "orrery ready: {} bodies, dt={}s, elapsed/tick={}",
            scene.len(),
            config.fixed_dt,
            config.elapsed_per_tick
        );
        Self {
            clock: TickClock::with_max_steps(config.fixed_dt, config.max_steps_per_frame),
            scene,
            lights: LightState::new(),
            config,
            ticks: 0,
            frames: 0,
        }
    }

    /// Run one frame: as many fixed ticks as `frame_dt` covers, then draw.
    /// Returns the number of ticks run. The scene is drawn even when no
    /// tick was due.
    pub fn tick<C: Canvas + ?Sized>(&mut self, frame_dt: f32, canvas: &mut C) -> u32 {
        let steps = self.clock.accumulate(frame_dt);
        for _ in 0..steps {
            self.advance();
        }
        self.render(canvas);
        steps
    }

    /// Run exactly one tick and draw, ignoring wall time and pause.
    pub fn step<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        self.advance();
        self.render(canvas);
    }

    /// Draw the current state without advancing it.
    pub fn render<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.begin_frame(&self.lights);
        self.scene.draw(canvas);
        canvas.end_frame();
        self.frames += 1;
    }

    fn advance(&mut self) {
        self.scene.update(self.config.elapsed_per_tick);
        self.ticks += 1;
        log::trace!("tick {} (elapsed {})", self.ticks, self.config.elapsed_per_tick);
    }

    /// Add a body to the running scene.
    pub fn spawn(&mut self, body: CelestialBody) -> BodyId {
        self.scene.spawn(body)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn lights(&self) -> &LightState {
        &self.lights
    }

    /// Global lighting switches applied at the start of every frame.
    pub fn lights_mut(&mut self) -> &mut LightState {
        &mut self.lights
    }

    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut TickClock {
        &mut self.clock
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Total ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulation time handed to each body since start.
    pub fn sim_time(&self) -> f64 {
        self.ticks as f64 * self.config.elapsed_per_tick as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::command::{CommandList, DrawCommand};
    use crate::renderer::frame::FrameCanvas;

    fn one_planet(config: RunnerConfig) -> Orrery {
        let mut scene = Scene::new();
        scene.spawn(CelestialBody::new(1.0, 10.0, 36.0, 5.0).with_tag("p"));
        Orrery::with_config(scene, config)
    }

    #[test]
    fn tick_runs_updates_then_draws() {
        let mut orrery = one_planet(RunnerConfig {
            fixed_dt: 0.5,
            ..Default::default()
        });
        let mut list = CommandList::new();

        assert_eq!(orrery.tick(1.0, &mut list), 2);
        assert_eq!(orrery.ticks(), 2);
        let body = orrery.scene().get(BodyId(0)).unwrap();
        assert_eq!(body.alpha, 20.0);
        assert_eq!(body.alpha_self, 10.0);

        // Drawn once, with the post-update angle
        let rotates: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rotate { degrees, .. } => Some(*degrees),
                _ => None,
            })
            .collect();
        assert_eq!(rotates, vec![20.0, 10.0]);
        assert!(list.lights().is_some());
    }

    #[test]
    fn short_frame_draws_without_ticking() {
        let mut orrery = one_planet(RunnerConfig::default());
        let mut canvas = FrameCanvas::new();
        assert_eq!(orrery.tick(0.001, &mut canvas), 0);
        assert_eq!(canvas.spheres().instance_count(), 1);
        assert_eq!(orrery.frames(), 1);
        assert_eq!(orrery.scene().get(BodyId(0)).unwrap().alpha, 0.0);
    }

    #[test]
    fn elapsed_per_tick_scales_motion() {
        let mut orrery = one_planet(RunnerConfig {
            elapsed_per_tick: 2.0,
            ..Default::default()
        });
        let mut list = CommandList::new();
        orrery.step(&mut list);
        assert_eq!(orrery.scene().get(BodyId(0)).unwrap().alpha, 20.0);
        // Self-rotation ignores elapsed
        assert_eq!(orrery.scene().get(BodyId(0)).unwrap().alpha_self, 5.0);
        assert_eq!(orrery.sim_time(), 2.0);
    }

    #[test]
    fn paused_clock_freezes_scene() {
        let mut orrery = one_planet(RunnerConfig::default());
        orrery.clock_mut().set_paused(true);
        let mut list = CommandList::new();
        assert_eq!(orrery.tick(1.0, &mut list), 0);
        assert_eq!(orrery.scene().get(BodyId(0)).unwrap().alpha, 0.0);
        assert!(!list.is_empty());
    }

    #[test]
    fn lighting_switches_reach_canvas() {
        let mut orrery = one_planet(RunnerConfig::default());
        orrery.lights_mut().set_lighting(false);
        let mut list = CommandList::new();
        orrery.render(&mut list);
        assert!(!list.lights().unwrap().lighting());
    }
}
