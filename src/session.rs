//! Game session controller
//!
//! Owns the `GameState` for one play-through and the Idle → Running → Ended
//! state machine. Each start builds a fresh state, so the previous run's
//! entities, score and spawn timer are dropped with it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::ui::{Hud, Menu, Scoreboard};

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Menu shown, nothing simulated yet
    Idle,
    /// Frames are being simulated
    Running,
    /// An enemy reached the player; waiting for a new start
    Ended,
}

/// One game session and the plumbing around it
pub struct Session {
    settings: Settings,
    width: f64,
    height: f64,
    phase: SessionPhase,
    state: GameState,
    /// Clicks received since the last frame
    pending: TickInput,
    /// Timestamp of the previous frame (None until the first frame)
    last_frame_ms: Option<f64>,
    /// Score shown on the end-of-game summary
    final_score: Option<u64>,
}

impl Session {
    pub fn new(settings: Settings, width: f64, height: f64) -> Self {
        let state = Self::fresh_state(&settings, settings.seed.unwrap_or(0), width, height);
        Self {
            settings,
            width,
            height,
            phase: SessionPhase::Idle,
            state,
            pending: TickInput::default(),
            last_frame_ms: None,
            final_score: None,
        }
    }

    fn fresh_state(settings: &Settings, seed: u64, width: f64, height: f64) -> GameState {
        let mut state = GameState::new(seed, width, height);
        state.particles_enabled = settings.particles;
        state.overlay_alpha = settings.overlay_alpha();
        state.shrink_duration_ms = settings.shrink_duration_ms();
        state
    }

    /// Start (or restart) a session
    ///
    /// `seed` is used unless the settings pin one. Any previous run is
    /// discarded along with its spawn timer.
    pub fn start(&mut self, seed: u64, hud: &mut dyn Hud) {
        let seed = self.settings.seed.unwrap_or(seed);
        if self.phase == SessionPhase::Running {
            log::warn!("Restarting a session that was still running");
        }

        self.state = Self::fresh_state(&self.settings, seed, self.width, self.height);
        self.pending = TickInput::default();
        self.last_frame_ms = None;
        self.final_score = None;
        self.phase = SessionPhase::Running;

        hud.show_score(0);
        hud.show_final_score(0);
        hud.hide_menu();

        log::info!(
            "Session started with seed {} on {}x{} canvas",
            seed,
            self.width,
            self.height
        );
    }

    /// Queue a click; ignored unless a session is running
    pub fn click(&mut self, pos: DVec2) {
        if self.phase != SessionPhase::Running {
            log::debug!("Ignoring click at ({:.0}, {:.0}) while {:?}", pos.x, pos.y, self.phase);
            return;
        }
        self.pending.clicks.push(pos);
    }

    /// Simulate one display frame at timestamp `now_ms`
    ///
    /// Returns whether another frame should be scheduled. The first frame
    /// after a start has zero elapsed time.
    pub fn frame(&mut self, now_ms: f64, renderer: &mut dyn Renderer, hud: &mut dyn Hud) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }

        let dt_ms = match self.last_frame_ms {
            Some(last) => (now_ms - last).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(now_ms);

        let input = std::mem::take(&mut self.pending);
        tick(&mut self.state, &input, dt_ms, renderer);

        for event in self.state.drain_events() {
            match event {
                GameEvent::ScoreChanged(score) => hud.show_score(score),
                GameEvent::GameOver { score } => {
                    self.phase = SessionPhase::Ended;
                    self.final_score = Some(score);
                    hud.show_final_score(score);
                    hud.show_menu();
                    log::info!(
                        "Session ended after {} frames, score {}",
                        self.state.time_ticks,
                        score
                    );
                }
                GameEvent::EnemyShrunk { .. } | GameEvent::EnemyDestroyed { .. } => {}
            }
        }

        self.phase == SessionPhase::Running
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Live score (the HUD value)
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Score captured when the session ended
    pub fn final_score(&self) -> Option<u64> {
        self.final_score
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Canvas center in canvas coordinates
    pub fn center(&self) -> DVec2 {
        self.state.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::renderer::HeadlessRenderer;
    use crate::sim::Color;
    use crate::ui::HeadlessHud;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn running_session() -> (Session, HeadlessRenderer, HeadlessHud) {
        let mut session = Session::new(Settings::default(), 800.0, 600.0);
        let mut hud = HeadlessHud::default();
        hud.menu_visible = true;
        session.start(1, &mut hud);
        (session, HeadlessRenderer::default(), hud)
    }

    #[test]
    fn test_starts_idle() {
        let session = Session::new(Settings::default(), 800.0, 600.0);
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_idle_frame_does_nothing() {
        let mut session = Session::new(Settings::default(), 800.0, 600.0);
        let mut renderer = HeadlessRenderer::default();
        let mut hud = HeadlessHud::default();
        assert!(!session.frame(0.0, &mut renderer, &mut hud));
        assert_eq!(renderer.overlays_drawn, 0);
    }

    #[test]
    fn test_start_resets_and_hides_menu() {
        let (session, _, hud) = running_session();
        assert_eq!(session.phase(), SessionPhase::Running);
        assert!(!hud.menu_visible);
        assert_eq!(hud.score, 0);
        assert_eq!(hud.final_score, 0);
        assert_eq!(session.state().player.pos, DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_clicks_ignored_when_not_running() {
        let mut session = Session::new(Settings::default(), 800.0, 600.0);
        session.click(DVec2::new(10.0, 10.0));
        assert!(session.pending.is_empty());
    }

    #[test]
    fn test_click_fires_on_next_frame() {
        let (mut session, mut renderer, mut hud) = running_session();
        session.click(DVec2::new(800.0, 300.0));
        assert!(session.state().projectiles.is_empty());

        assert!(session.frame(0.0, &mut renderer, &mut hud));
        assert_eq!(session.state().projectiles.len(), 1);
        assert_eq!(session.state().projectiles[0].vel, DVec2::new(5.0, 0.0));
    }

    #[test]
    fn test_first_spawn_after_interval() {
        let (mut session, mut renderer, mut hud) = running_session();
        let mut now: f64 = 10_000.0;
        // First frame has no elapsed time, however late it arrives
        session.frame(now, &mut renderer, &mut hud);
        assert!(session.state().enemies.is_empty());

        while now < 10_000.0 + SPAWN_INTERVAL_MS - 1.0 {
            now += 100.0;
            session.frame(now.min(10_000.0 + SPAWN_INTERVAL_MS - 1.0), &mut renderer, &mut hud);
        }
        assert!(session.state().enemies.is_empty());

        session.frame(10_000.0 + SPAWN_INTERVAL_MS, &mut renderer, &mut hud);
        assert_eq!(session.state().enemies.len(), 1);
    }

    #[test]
    fn test_score_forwarded_to_hud() {
        let (mut session, mut renderer, mut hud) = running_session();
        let state = session.state_mut();
        let id = state.spawn_enemy_at(DVec2::new(100.0, 100.0), 12.0, Color::hue(10.0));
        state.enemies.iter_mut().for_each(|e| e.vel = DVec2::ZERO);
        state.spawn_projectile(DVec2::new(100.0, 100.0), DVec2::ZERO);

        session.frame(0.0, &mut renderer, &mut hud);
        assert_eq!(session.score(), KILL_SCORE);
        assert_eq!(hud.score, KILL_SCORE);
        assert!(session.state().enemies.iter().all(|e| e.id != id));
    }

    #[test]
    fn test_game_over_ends_session() {
        let (mut session, mut renderer, mut hud) = running_session();
        let center = session.center();
        session.state_mut().score = 40;
        session
            .state_mut()
            .spawn_enemy_at(center + DVec2::new(20.0, 0.0), 10.0, Color::hue(0.0));

        assert!(!session.frame(0.0, &mut renderer, &mut hud));
        assert_eq!(session.phase(), SessionPhase::Ended);
        assert_eq!(session.final_score(), Some(40));
        assert_eq!(hud.final_score, 40);
        assert!(hud.menu_visible);

        // Loop is halted: further frames do nothing
        let overlays = renderer.overlays_drawn;
        assert!(!session.frame(FRAME_MS, &mut renderer, &mut hud));
        assert_eq!(renderer.overlays_drawn, overlays);
        session.click(DVec2::ZERO);
        assert!(session.pending.is_empty());
    }

    #[test]
    fn test_final_summary_keeps_score_at_loss() {
        let (mut session, mut renderer, mut hud) = running_session();
        let center = session.center();
        let state = session.state_mut();
        state.spawn_enemy_at(center, 12.0, Color::hue(0.0));
        state.spawn_enemy_at(DVec2::new(100.0, 100.0), 12.0, Color::hue(0.0));
        state.enemies.iter_mut().for_each(|e| e.vel = DVec2::ZERO);
        state.spawn_projectile(DVec2::new(100.0, 100.0), DVec2::ZERO);

        session.frame(0.0, &mut renderer, &mut hud);
        assert_eq!(session.phase(), SessionPhase::Ended);
        assert_eq!(hud.final_score, 0);
        assert_eq!(hud.score, KILL_SCORE);
        assert_eq!(session.score(), KILL_SCORE);
    }

    #[test]
    fn test_restart_after_game_over() {
        let (mut session, mut renderer, mut hud) = running_session();
        let center = session.center();
        session
            .state_mut()
            .spawn_enemy_at(center, 10.0, Color::hue(0.0));
        session.state_mut().score = 25;
        session.frame(0.0, &mut renderer, &mut hud);
        assert_eq!(session.phase(), SessionPhase::Ended);

        session.start(2, &mut hud);
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(session.score(), 0);
        assert!(session.state().enemies.is_empty());
        assert!(session.state().projectiles.is_empty());
        assert!(session.state().particles.is_empty());
        assert!(!hud.menu_visible);
        assert_eq!(hud.score, 0);
    }

    #[test]
    fn test_restart_does_not_double_spawn() {
        // Restarting repeatedly must leave exactly one spawn timer behind
        let (mut session, mut renderer, mut hud) = running_session();
        for seed in 0..5 {
            session.frame(seed as f64 * 50.0, &mut renderer, &mut hud);
            session.start(seed, &mut hud);
        }

        session.frame(0.0, &mut renderer, &mut hud);
        session.frame(SPAWN_INTERVAL_MS, &mut renderer, &mut hud);
        assert_eq!(session.state().enemies.len(), 1);
    }

    #[test]
    fn test_settings_flow_into_state() {
        let settings = Settings {
            particles: false,
            trails: false,
            reduced_motion: true,
            ..Settings::default()
        };
        let mut session = Session::new(settings, 800.0, 600.0);
        let mut hud = HeadlessHud::default();
        session.start(3, &mut hud);

        let state = session.state();
        assert!(!state.particles_enabled);
        assert_eq!(state.overlay_alpha, 1.0);
        assert_eq!(state.shrink_duration_ms, 0.0);
    }

    #[test]
    fn test_pinned_seed_wins() {
        let settings = Settings {
            seed: Some(77),
            ..Settings::default()
        };
        let mut session = Session::new(settings, 800.0, 600.0);
        let mut hud = HeadlessHud::default();
        session.start(1, &mut hud);
        assert_eq!(session.state().seed, 77);
    }
}
