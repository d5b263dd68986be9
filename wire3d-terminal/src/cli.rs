/// Command-line interface
use clap::Parser;
use wire3d_core::{ShapeKind, Theme};

#[derive(Debug, Clone, Parser)]
#[command(name = "wire3d")]
#[command(about = "Rotating 3D wireframes (coin, cube, sphere) drawn in the terminal")]
#[command(version)]
pub struct Cli {
    /// Shape to animate: coin, cube or sphere
    #[arg(short, long, default_value = "coin")]
    pub shape: ShapeKind,

    /// Look: classic, minimal, ascii, wireframe, retro, neon, matrix, hologram, plasma
    #[arg(short, long, default_value = "classic")]
    pub theme: Theme,

    /// Grid width in columns (defaults to the preset)
    #[arg(long)]
    pub width: Option<u16>,

    /// Grid height in rows (defaults to the preset)
    #[arg(long)]
    pub height: Option<u16>,

    /// Delay between frames in milliseconds (defaults to the preset)
    #[arg(short, long)]
    pub interval_ms: Option<u64>,

    /// Stop after this many frames
    #[arg(short, long)]
    pub frames: Option<u64>,

    /// Shrink the grid to fit the current terminal
    #[arg(long)]
    pub fit: bool,

    /// Hide the title and status lines
    #[arg(long)]
    pub no_hud: bool,

    /// Log filter, e.g. `debug` or `wire3d_core=trace` (overrides WIRE3D_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the available shapes and themes, then exit
    #[arg(long)]
    pub list: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["wire3d"]).unwrap();
        assert_eq!(cli.shape, ShapeKind::Coin);
        assert_eq!(cli.theme, Theme::Classic);
        assert_eq!(cli.frames, None);
        assert!(!cli.fit && !cli.no_hud && !cli.list);
    }

    #[test]
    fn test_parses_shape_and_theme() {
        let cli = Cli::try_parse_from([
            "wire3d", "--shape", "Sphere", "-t", "neon", "--frames", "12", "--no-hud",
        ])
        .unwrap();
        assert_eq!(cli.shape, ShapeKind::Sphere);
        assert_eq!(cli.theme, Theme::Neon);
        assert_eq!(cli.frames, Some(12));
        assert!(cli.no_hud);
    }

    #[test]
    fn test_rejects_unknown_names() {
        assert!(Cli::try_parse_from(["wire3d", "--shape", "torus"]).is_err());
        assert!(Cli::try_parse_from(["wire3d", "--theme", "sepia"]).is_err());
    }
}
