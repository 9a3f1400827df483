//! The run loop and its level state machine.
//!
//! One `Session` is one attempt at one level. Every tick runs the same
//! fixed sequence — input, jump impulse, physics step, steering, collision
//! resolution, particles, time, render — to completion; nothing suspends
//! mid-tick. The physics step always precedes the collision query, which
//! always precedes presentation, so collisions see post-step positions and
//! the frontend sees post-resolution state.

use glam::Vec2;

use crate::assets::registry::TextureRegistry;
use crate::core::time::FrameClock;
use crate::input::snapshot::{InputEvent, InputState, Key};
use crate::level::format::LevelData;
use crate::level::loader;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{FrameData, Frontend, Hud};
use crate::session::context::EngineContext;
use crate::systems::collision;
use crate::systems::effects::EffectsState;
use crate::systems::player;
use crate::systems::render::build_frame;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunOutcome {
    /// The player reached the finish zone, at this many seconds of run time.
    Finished(f32),
    /// The player quit (escape key or window close).
    Quit,
}

/// One active play session: the level's world, the particles, the clock,
/// and the elapsed-time accumulator.
pub struct Session {
    ctx: EngineContext,
    effects: EffectsState,
    clock: FrameClock,
    input: InputState,
    frame: RenderBuffer,
    spawn: Vec2,
    elapsed: f32,
}

impl Session {
    /// Build a session from parsed level data at the given target tick rate.
    pub fn new(level: &LevelData, fps: u32) -> Self {
        let mut ctx = EngineContext::new();
        loader::populate(&mut ctx, level);
        Self {
            ctx,
            effects: EffectsState::new(42),
            clock: FrameClock::new(fps),
            input: InputState::new(),
            frame: RenderBuffer::new(),
            spawn: level.spawn,
            elapsed: 0.0,
        }
    }

    /// Reseed the particle RNG (the default is fixed, which is fine for
    /// gameplay but makes every death burst identical).
    pub fn with_effects_seed(mut self, seed: u64) -> Self {
        self.effects = EffectsState::new(seed);
        self
    }

    /// Seconds simulated so far.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The session's world, for inspection.
    pub fn ctx(&self) -> &EngineContext {
        &self.ctx
    }

    /// Run one tick of the fixed sequence against this tick's input
    /// events. Returns the terminal outcome if the run ended.
    ///
    /// The quit check sits at the top: quitting never tears down a
    /// half-simulated tick. A finish is reported after the full tick so
    /// the caller still presents the finishing frame.
    pub fn tick(&mut self, events: &[InputEvent]) -> Option<RunOutcome> {
        let snapshot = self.input.begin_tick(events);
        if snapshot.close_requested() || snapshot.pressed(Key::Quit) {
            return Some(RunOutcome::Quit);
        }

        let dt = self.clock.dt();

        if let Some(id) = self.ctx.player_id() {
            // Jump on the leading edge, before the step integrates it.
            let vel = self.ctx.velocity(id);
            self.ctx.set_velocity(id, player::jump(vel, &snapshot));
        }

        self.ctx.step(dt);

        if let Some(id) = self.ctx.player_id() {
            let vel = self.ctx.velocity(id);
            self.ctx
                .set_velocity(id, player::steer(vel, &snapshot, dt));
        }

        let outcome = collision::resolve(&mut self.ctx, &mut self.effects, self.spawn);
        self.effects.tick(dt);
        self.elapsed += dt;

        if outcome.finished {
            return Some(RunOutcome::Finished(self.elapsed));
        }
        None
    }

    /// Drive the session to completion against a frontend.
    ///
    /// Each iteration polls events, ticks, presents, then paces the frame
    /// clock. A finish presents its own frame before returning; a quit
    /// returns right after the prior tick's frame.
    pub fn run(&mut self, frontend: &mut dyn Frontend, registry: &TextureRegistry) -> RunOutcome {
        loop {
            let events = frontend.poll_events();
            let outcome = self.tick(&events);

            if let Some(RunOutcome::Quit) = outcome {
                return RunOutcome::Quit;
            }

            build_frame(&self.ctx.scene, &self.effects, registry, &mut self.frame);
            frontend.present(&FrameData {
                instances: self.frame.instances(),
                hud: Hud {
                    elapsed: self.elapsed,
                    measured_fps: self.clock.measured_fps(),
                    target_fps: self.clock.target_fps(),
                },
            });
            self.clock.pace();

            if let Some(outcome) = outcome {
                return outcome;
            }
        }
    }
}
