use anyhow::Context;
use clap::{Parser, Subcommand};
use playground_assets::TextureData;
use playground_common::PlaygroundConfig;
use playground_input::{HeldMovements, Movement};
use playground_render::{
    Camera, DebugTextRenderer, FrameInput, Renderer, aspect_ratio, update_lighting,
};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "playground-cli", about = "CLI tool for playground scenes")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Load a scene config and every texture it references
    Check {
        /// Scene configuration (YAML)
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Print the uniforms of one frame
    Frame {
        /// Scene configuration (YAML). Built-in defaults when omitted.
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Seconds since start (drives the light orbit)
        #[arg(short, long, default_value = "0")]
        time: f32,
        /// Viewport width over height. Defaults to the configured window.
        #[arg(short, long)]
        aspect: Option<f32>,
        /// Seconds to fly forward before rendering
        #[arg(long, default_value = "0")]
        forward: f32,
        /// Degrees to turn right before rendering
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        turn: f32,
    },
}

fn check(path: &Path) -> anyhow::Result<()> {
    let config = PlaygroundConfig::load(path)
        .with_context(|| format!("invalid config {}", path.display()))?;
    for texture in [
        &config.material.diffuse_texture,
        &config.material.specular_texture,
    ]
    .into_iter()
    .flatten()
    {
        let data = TextureData::load(texture)
            .with_context(|| format!("unreadable texture {}", texture.display()))?;
        println!("texture {}: {}x{}", texture.display(), data.width, data.height);
    }
    println!(
        "{}: ok ({} placements, window {}x{})",
        path.display(),
        config.placements.len(),
        config.window.width,
        config.window.height
    );
    Ok(())
}

/// How to set up the frame printed by `frame`.
#[derive(Debug, Clone, Copy, Default)]
struct FrameArgs {
    time: f32,
    aspect: Option<f32>,
    forward: f32,
    turn: f32,
}

fn frame(config: Option<&Path>, args: FrameArgs) -> anyhow::Result<String> {
    let FrameArgs {
        time,
        aspect,
        forward,
        turn,
    } = args;
    if let Some(aspect) = aspect {
        anyhow::ensure!(
            aspect.is_finite() && aspect > 0.0,
            "aspect must be a positive number, got {aspect}"
        );
    }
    let config = PlaygroundConfig::load_or_default(config)?;
    let mut camera = Camera::from_config(&config.camera);
    if camera.sensitivity > 0.0 {
        camera.process_mouse_movement(turn / camera.sensitivity, 0.0, true);
    }
    let mut held = HeldMovements::new();
    held.press(Movement::Forward);
    held.apply(forward, |direction, dt| camera.process_keyboard(direction, dt));

    let uniforms = update_lighting(&FrameInput {
        camera: &camera,
        light: &config.light,
        material: &config.material,
        placements: &config.placements,
        aspect: aspect
            .unwrap_or_else(|| aspect_ratio(config.window.width, config.window.height)),
        elapsed: time,
    });
    tracing::debug!("view matrix: {:?}", uniforms.view);
    Ok(DebugTextRenderer::new().render(&uniforms))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("playground-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", playground_render::crate_info());
            println!(
                "cube template: {} vertices",
                playground_render::CUBE_VERTEX_COUNT
            );
        }
        Commands::Check { config } => check(&config)?,
        Commands::Frame {
            config,
            time,
            aspect,
            forward,
            turn,
        } => {
            let args = FrameArgs {
                time,
                aspect,
                forward,
                turn,
            };
            print!("{}", frame(config.as_deref(), args)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_shows_single_cube() {
        let out = frame(None, FrameArgs::default()).unwrap();
        assert!(out.contains("1 cubes"));
        assert!(out.contains("eye=(0.00, 1.00, 3.00)"));
    }

    #[test]
    fn flying_forward_moves_eye() {
        // Default speed 2.5, looking down -Z.
        let out = frame(
            None,
            FrameArgs {
                forward: 1.0,
                ..FrameArgs::default()
            },
        )
        .unwrap();
        // x is a rounding error away from zero and may print as -0.00.
        assert!(out.contains(", 1.00, 0.50)"));
    }

    #[test]
    fn turning_right_then_flying_moves_along_x() {
        let out = frame(
            None,
            FrameArgs {
                forward: 1.0,
                turn: 90.0,
                ..FrameArgs::default()
            },
        )
        .unwrap();
        assert!(out.contains("eye=(2.50, 1.00, "));
    }

    #[test]
    fn check_takes_config_flag() {
        let cli =
            Cli::try_parse_from(["playground-cli", "check", "--config", "scene.yaml"]).unwrap();
        match cli.command {
            Commands::Check { config } => assert_eq!(config, PathBuf::from("scene.yaml")),
            _ => panic!("expected check"),
        }
        assert!(Cli::try_parse_from(["playground-cli", "check"]).is_err());
    }

    #[test]
    fn frame_takes_time_and_aspect() {
        let cli = Cli::try_parse_from([
            "playground-cli",
            "frame",
            "--config",
            "scene.yaml",
            "--time",
            "1",
            "--aspect",
            "2.0",
        ])
        .unwrap();
        match cli.command {
            Commands::Frame {
                config,
                time,
                aspect,
                ..
            } => {
                assert_eq!(config, Some(PathBuf::from("scene.yaml")));
                assert_eq!(time, 1.0);
                assert_eq!(aspect, Some(2.0));
            }
            _ => panic!("expected frame"),
        }
    }

    #[test]
    fn aspect_flag_overrides_window_ratio() {
        let square = frame(
            None,
            FrameArgs {
                aspect: Some(1.0),
                ..FrameArgs::default()
            },
        )
        .unwrap();
        assert!(square.contains("aspect=1.000"));
        let window = frame(None, FrameArgs::default()).unwrap();
        assert!(window.contains("aspect=1.778"));
    }

    #[test]
    fn rejects_non_positive_aspect() {
        let args = FrameArgs {
            aspect: Some(0.0),
            ..FrameArgs::default()
        };
        assert!(frame(None, args).is_err());
    }

    #[test]
    fn check_rejects_missing_texture() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.yaml");
        std::fs::write(&path, "material:\n  diffuse_texture: missing.png\n").unwrap();
        let err = check(&path).unwrap_err();
        assert!(format!("{err:#}").contains("missing.png"));
    }
}
