#![allow(clippy::cast_precision_loss)]

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::{
    app::{
        events::{AppEvent, start_frame_task},
        settings::{MAX_SPEED, RuntimeSettings, load_runtime_settings, save_runtime_settings},
    },
    cli::Cli,
    horizon::{HorizonLine, SeededRandom, ThreadRandom, Variant, VariantSource},
    sprite::{PixelCanvas, SpriteAtlas, SpritePosition},
};

mod input;


pub(crate) use input::{Command, command_for};

/// Longer gaps between ticks (suspend, debugger) are cut to this.
const MAX_FRAME_DELTA: Duration = Duration::from_millis(250);
const SPEED_STEP: f64 = 1.0;

pub type BoxedVariantSource = Box<dyn VariantSource + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Paused,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub canvas: PixelCanvas,
    pub atlas: SpriteAtlas,
    pub horizon: HorizonLine<BoxedVariantSource>,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    pub wraps: u64,
    pub bumpy_wraps: u64,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let (settings, settings_path) = load_runtime_settings(cli, true);
        Self::from_settings(settings, settings_path)
    }

    pub fn from_settings(settings: RuntimeSettings, settings_path: Option<PathBuf>) -> Self {
        let config = settings.horizon_config();
        let atlas = SpriteAtlas::runner(config.density);
        let mut canvas = PixelCanvas::default();
        let rng: BoxedVariantSource = match settings.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(ThreadRandom),
        };
        let horizon = HorizonLine::new(
            &mut canvas,
            &atlas,
            SpritePosition::horizon(config.density),
            &config,
            rng,
        );

        Self {
            mode: AppMode::Running,
            running: true,
            settings,
            settings_path,
            canvas,
            atlas,
            horizon,
            last_frame_at: Instant::now(),
            frame_tick: 0,
            wraps: 0,
            bumpy_wraps: 0,
            status_message: None,
        }
    }

    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                cli.validate()?;
                self.last_frame_at = Instant::now();
                start_frame_task(tx.clone(), cli.fps);
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.advance_frame(delta);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match command_for(key) {
            Some(command) => self.apply_command(command, tx).await,
            None => Ok(()),
        }
    }

    /// Scrolls the horizon by `delta` of wall time, unless paused.
    pub fn advance_frame(&mut self, delta: Duration) -> Option<Variant> {
        self.frame_tick = self.frame_tick.saturating_add(1);
        if self.mode != AppMode::Running {
            return None;
        }

        let delta_ms = delta.min(MAX_FRAME_DELTA).as_micros() as f64 / 1000.0;
        self.canvas.clear();
        let wrapped = self.horizon.update(
            &mut self.canvas,
            &self.atlas,
            delta_ms,
            self.settings.speed,
        );

        if let Some(variant) = wrapped {
            self.wraps += 1;
            if variant == Variant::Bumpy {
                self.bumpy_wraps += 1;
            }
        }
        wrapped
    }

    /// Quitting is requested through the event channel; everything else
    /// applies in place.
    pub(crate) async fn apply_command(
        &mut self,
        command: Command,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match command {
            Command::Quit => tx.send(AppEvent::Quit).await?,
            Command::TogglePause => self.toggle_pause(),
            Command::Reset => self.reset(),
            Command::Faster => self.adjust_speed(SPEED_STEP),
            Command::Slower => self.adjust_speed(-SPEED_STEP),
            Command::Save => {
                if let Err(err) = self.save_settings() {
                    tracing::warn!(%err, "saving settings failed");
                    self.status_message = Some(format!("save failed: {err}"));
                }
            }
        }
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            AppMode::Running => AppMode::Paused,
            AppMode::Paused => {
                // the pause itself is not travel time
                self.last_frame_at = Instant::now();
                AppMode::Running
            }
            AppMode::Quit => AppMode::Quit,
        };
    }

    pub fn reset(&mut self) {
        self.horizon.reset();
        self.canvas.clear();
        self.horizon.draw(&mut self.canvas, &self.atlas);
        self.status_message = None;
    }

    pub fn adjust_speed(&mut self, delta: f64) {
        self.settings.speed = (self.settings.speed + delta).clamp(0.0, MAX_SPEED);
        tracing::info!(speed = self.settings.speed, "scroll speed changed");
    }

    pub fn save_settings(&mut self) -> Result<()> {
        let Some(path) = &self.settings_path else {
            self.status_message = Some("settings are not persisted".to_string());
            return Ok(());
        };
        save_runtime_settings(path, &self.settings)?;
        self.status_message = Some("settings saved".to_string());
        Ok(())
    }
}
