use anyhow::Result;
use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::ui::renderer::GridWidget;
use crate::ui::tui::Tui;
use vivarium_core::Engine;
use vivarium_io::HistoryWriter;

pub struct App {
    pub running: bool,
    pub paused: bool,
    pub engine: Engine,
    pub history: Option<HistoryWriter>,
    pub config: AppConfig,
    // Frame-rate readout: frames counted this second, last cached f/s.
    frames: u64,
    cached_fps: u64,
    fps_window_start: Instant,
    started: Instant,
}

impl App {
    pub fn new(engine: Engine, config: AppConfig) -> Result<Self> {
        let history = if config.history.enabled {
            Some(HistoryWriter::new(&config.history.dir)?)
        } else {
            None
        };
        Ok(Self {
            running: true,
            paused: false,
            engine,
            history,
            config,
            frames: 0,
            cached_fps: 0,
            fps_window_start: Instant::now(),
            started: Instant::now(),
        })
    }

    /// Seconds since the app was constructed.
    pub fn duration(&self) -> Duration {
        self.started.elapsed()
    }

    /// Interactive pull loop: draw, poll keys, advance, record.
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let tick_rate = Duration::from_millis(1000 / self.config.target_fps.max(1));
        let mut last_tick = Instant::now();

        self.record_snapshot();

        while self.running {
            tui.terminal.draw(|f| {
                let widget = GridWidget::new(
                    self.engine.grid(),
                    self.engine.generation(),
                    self.cached_fps,
                    self.started.elapsed().as_secs(),
                    self.paused,
                );
                f.render_widget(widget, f.area());
            })?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
                if !self.paused {
                    self.advance();
                }
                self.count_frame();
            }
        }

        // Trace the final state so an interrupted run ends with the
        // grid it stopped on.
        self.record_snapshot();
        Ok(())
    }

    /// Headless loop: a fixed number of generations, no terminal.
    pub fn run_headless(&mut self, generations: u64) -> Result<()> {
        self.record_snapshot();
        for _ in 0..generations {
            self.advance();
            if self.engine.grid().live_count() == 0 {
                tracing::info!(
                    generation = self.engine.generation(),
                    "population extinct, stopping early"
                );
                break;
            }
        }
        self.record_snapshot();
        tracing::info!(
            generation = self.engine.generation(),
            alive = self.engine.grid().live_count(),
            elapsed_ms = self.duration().as_millis() as u64,
            "headless run finished"
        );
        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char(' ') => self.paused = !self.paused,
            KeyCode::Char('s') if self.paused => self.advance(),
            _ => {}
        }
    }

    /// One engine step plus the history side effect. Sink failures are
    /// logged and do not stop the run.
    fn advance(&mut self) {
        self.engine.step();
        self.record_snapshot();
    }

    fn record_snapshot(&mut self) {
        if let Some(history) = &mut self.history {
            let result = history.record(self.engine.grid(), self.engine.generation(), Utc::now());
            if let Err(e) = result {
                tracing::warn!("history sink failed: {e}");
            }
        }
    }

    fn count_frame(&mut self) {
        self.frames += 1;
        if self.fps_window_start.elapsed() >= Duration::from_secs(1) {
            self.cached_fps = self.frames;
            self.frames = 0;
            self.fps_window_start = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivarium_core::{Grid, Rule, Topology};

    fn test_app(history_enabled: bool) -> App {
        let mut config = AppConfig::default();
        config.history.enabled = history_enabled;
        config.history.dir = std::env::temp_dir()
            .join(format!("vivarium-app-{}", std::process::id()))
            .to_string_lossy()
            .into_owned();
        let grid = Grid::from_pattern(".....\n.....\n.xxx.\n.....\n.....").unwrap();
        let engine = Engine::new(grid, Topology::Bounded, Rule::default());
        App::new(engine, config).unwrap()
    }

    #[test]
    fn test_headless_run_advances_exactly_n_generations() {
        let mut app = test_app(false);
        app.run_headless(6).unwrap();
        // The blinker never dies out, so no early stop.
        assert_eq!(app.engine.generation(), 6);
    }

    #[test]
    fn test_headless_records_initial_and_final_snapshots() {
        let mut app = test_app(true);
        let path = app.history.as_ref().unwrap().path().to_path_buf();
        app.run_headless(4).unwrap();
        let trace = vivarium_io::read_trace(&path).unwrap();
        assert_eq!(trace.len(), 6, "initial + 4 steps + final");
        assert_eq!(trace.first().unwrap().generation, 0);
        assert_eq!(trace.last().unwrap().generation, 4);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_quit_and_pause_keys() {
        let mut app = test_app(false);
        app.handle_key(KeyCode::Char(' '));
        assert!(app.paused);
        app.handle_key(KeyCode::Char('s'));
        assert_eq!(app.engine.generation(), 1, "step key works while paused");
        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }
}
