/// Terminal front end for wire3d: settings, the real-time loop and ANSI output
use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{info, trace, warn, Level};
use wire3d_core::{Animation, FrameBuffer, Phase, Preset, ShapeKind, StopReason, Theme, Viewport};

pub mod cli;
pub mod hud;
pub mod interrupt;
pub mod renderer;

pub use cli::Cli;
pub use hud::Hud;
pub use interrupt::Interrupt;
pub use renderer::AnsiPresenter;

/// Longest single sleep between interrupt checks.
const POLL_SLICE: Duration = Duration::from_millis(20);

/// Fully resolved run settings: the preset with every CLI override applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub shape: ShapeKind,
    pub theme: Theme,
    pub preset: Preset,
    pub frame_limit: Option<u64>,
    pub hud: bool,
}

impl Settings {
    /// Apply `cli` on top of the preset for its shape and theme.
    ///
    /// `terminal` is the current terminal size, if known. With `--fit` the
    /// grid shrinks to it (leaving room for the HUD); otherwise a too-small
    /// terminal only gets a warning.
    pub fn from_cli(cli: &Cli, terminal: Option<(u16, u16)>) -> Result<Self> {
        let mut preset = Preset::resolve(cli.shape, cli.theme);
        let hud = !cli.no_hud;
        let reserved = if hud { hud::HUD_ROWS } else { 0 };

        let mut width = cli.width.unwrap_or(preset.viewport.width);
        let mut height = cli.height.unwrap_or(preset.viewport.height);
        match terminal {
            Some((columns, rows)) if cli.fit => {
                width = width.min(columns);
                height = height.min(rows.saturating_sub(reserved));
            }
            Some((columns, rows)) if columns < width || rows < height.saturating_add(reserved) => {
                warn!(
                    columns,
                    rows,
                    width,
                    height,
                    "terminal is smaller than the animation, output will wrap (try --fit)"
                );
            }
            _ => {}
        }
        let viewport = Viewport::new(width, height).context("invalid grid size")?;
        preset = preset.with_viewport(viewport);

        if let Some(ms) = cli.interval_ms {
            preset = preset.with_frame_interval(Duration::from_millis(ms));
        }

        Ok(Self {
            shape: cli.shape,
            theme: cli.theme,
            preset,
            frame_limit: cli.frames,
            hud,
        })
    }
}

/// Main application struct for the terminal animation
pub struct TerminalApp {
    animation: Animation,
    fb: FrameBuffer,
    presenter: AnsiPresenter,
    frame_interval: Duration,
    show_hud: bool,
    interrupt: Interrupt,
}

impl TerminalApp {
    pub fn new(settings: &Settings, interrupt: Interrupt) -> Result<Self> {
        let animation = Animation::from_preset(&settings.preset, settings.theme)
            .with_context(|| format!("cannot build {} {}", settings.theme, settings.shape))?
            .with_frame_limit(settings.frame_limit);
        let fb = animation.frame_buffer();
        Ok(Self {
            fb,
            presenter: AnsiPresenter::new(settings.preset.clear_each_frame),
            frame_interval: settings.preset.frame_interval,
            show_hud: settings.hud,
            interrupt,
            animation,
        })
    }

    /// Run on stdout until interrupted or out of frames.
    pub fn run(&mut self) -> Result<StopReason> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Run against any writer. The terminal is restored even when a frame
    /// fails to write.
    pub fn run_with<W: Write>(&mut self, out: &mut W) -> Result<StopReason> {
        let viewport = self.animation.viewport();
        info!(
            width = viewport.width,
            height = viewport.height,
            interval_ms = self.frame_interval.as_millis() as u64,
            "starting animation"
        );
        self.presenter
            .begin(out)
            .context("failed to prepare the terminal")?;

        let result = self.main_loop(out);

        let farewell = self.animation.skin().farewell();
        let restored = self.presenter.finish(out, farewell.as_ref());
        let reason = result?;
        restored.context("failed to restore the terminal")?;
        Ok(reason)
    }

    fn main_loop<W: Write>(&mut self, out: &mut W) -> Result<StopReason> {
        loop {
            if self.interrupt.is_raised() {
                self.animation.terminate(StopReason::Interrupted);
            }
            if let Phase::Terminated(reason) = self.animation.phase() {
                return Ok(reason);
            }

            let frame_start = Instant::now();

            self.animation.render(&mut self.fb);
            if tracing::enabled!(Level::TRACE) {
                trace!(frame = self.animation.frame(), "\n{}", self.fb.to_plain_text());
            }
            let hud = self.show_hud.then(|| Hud::for_animation(&self.animation));
            self.presenter
                .draw(out, &self.fb, hud.as_ref())
                .context("failed to write frame")?;
            self.animation.advance();

            if self.animation.is_running() {
                self.pause_until(frame_start + self.frame_interval);
            }
        }
    }

    /// Sleep until `deadline`, waking early when an interrupt arrives.
    fn pause_until(&self, deadline: Instant) {
        loop {
            let now = Instant::now();
            if now >= deadline || self.interrupt.is_raised() {
                return;
            }
            std::thread::sleep((deadline - now).min(POLL_SLICE));
        }
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }
}

/// Print every shape and theme, marking combinations with their own tuning.
pub fn write_catalog<W: Write>(out: &mut W) -> io::Result<()> {
    let shapes: Vec<&str> = ShapeKind::ALL.iter().map(|s| s.name()).collect();
    writeln!(out, "shapes: {}", shapes.join(", "))?;
    writeln!(out, "themes:")?;
    for theme in Theme::ALL {
        let tuned: Vec<&str> = ShapeKind::ALL
            .iter()
            .filter(|&&shape| Preset::is_tuned(shape, theme))
            .map(|s| s.name())
            .collect();
        writeln!(out, "  {:<10} {}", theme.name(), tuned.join(" "))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["wire3d"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_settings_use_preset_by_default() {
        let settings =
            Settings::from_cli(&cli(&["--shape", "cube", "--theme", "neon"]), None).unwrap();
        assert_eq!(settings.preset, Preset::resolve(ShapeKind::Cube, Theme::Neon));
        assert!(settings.hud);
    }

    #[test]
    fn test_settings_overrides() {
        let settings = Settings::from_cli(
            &cli(&["--width", "30", "--height", "12", "--interval-ms", "0", "--frames", "4"]),
            Some((200, 100)),
        )
        .unwrap();
        assert_eq!(settings.preset.viewport, Viewport::new(30, 12).unwrap());
        assert_eq!(settings.preset.frame_interval, Duration::ZERO);
        assert_eq!(settings.frame_limit, Some(4));
    }

    #[test]
    fn test_fit_shrinks_to_terminal() {
        let settings = Settings::from_cli(&cli(&["--fit"]), Some((60, 20))).unwrap();
        assert_eq!(settings.preset.viewport, Viewport::new(60, 18).unwrap());

        let bare = Settings::from_cli(&cli(&["--fit", "--no-hud"]), Some((60, 20))).unwrap();
        assert_eq!(bare.preset.viewport, Viewport::new(60, 20).unwrap());

        // Never grows past the preset.
        let roomy = Settings::from_cli(&cli(&["--fit"]), Some((300, 100))).unwrap();
        assert_eq!(roomy.preset.viewport, Viewport::new(80, 40).unwrap());
    }

    #[test]
    fn test_zero_sized_grid_is_rejected() {
        assert!(Settings::from_cli(&cli(&["--width", "0"]), None).is_err());
        assert!(Settings::from_cli(&cli(&["--fit"]), Some((80, 2))).is_err());
    }

    #[test]
    fn test_catalog_lists_everything() {
        let mut out = Vec::new();
        write_catalog(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("shapes: coin, cube, sphere\n"));
        for theme in Theme::ALL {
            assert!(text.contains(theme.name()));
        }
        assert!(text.contains("  minimal    coin sphere\n"));
    }
}
