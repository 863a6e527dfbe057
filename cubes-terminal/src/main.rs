/// cubes - draw a wireframe cuboid from its width, height and depth
///
/// Width runs up and to the right, depth up and to the left, height
/// straight down, all from the centre of the canvas. By default the
/// drawing is shown in the terminal until Enter, Esc or Q is pressed.
use anyhow::{Context, Result};
use clap::Parser;
use cubes_core::{draw_wireframe, Canvas, Dimensions, Projector, SvgSurface};
use cubes_terminal::TerminalApp;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "cubes")]
#[command(version)]
#[command(about = "Draw an isometric wireframe cuboid", long_about = None)]
#[command(override_usage = "cubes [x] [y] [z]")]
#[command(allow_negative_numbers = true)]
struct Args {
    /// Width in pixels
    x: i64,
    /// Height in pixels
    y: i64,
    /// Depth in pixels
    z: i64,
    /// Canvas width
    #[arg(long, default_value_t = Canvas::DEFAULT_WIDTH)]
    width: u32,
    /// Canvas height
    #[arg(long, default_value_t = Canvas::DEFAULT_HEIGHT)]
    height: u32,
    /// Write the drawing to an SVG file instead of the terminal
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Print the line segments as `x1 y1 x2 y2` instead of drawing
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let canvas = Canvas::new(args.width, args.height)?;
    let dimensions = Dimensions::new(args.x, args.y, args.z);

    let wireframe = Projector::for_canvas(&canvas).project_dimensions(dimensions);

    if args.print {
        for segment in &wireframe {
            let (x1, y1, x2, y2) = segment.as_tuple();
            println!("{x1} {y1} {x2} {y2}");
        }
    }

    if let Some(path) = &args.svg {
        let mut surface = SvgSurface::new(canvas);
        draw_wireframe(&mut surface, &wireframe);
        surface
            .save(path)
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        info!(path = %path.display(), "wrote svg");
    }

    if !args.print && args.svg.is_none() {
        let mut app = TerminalApp::new(dimensions, wireframe, canvas)?;
        app.run()?;
    }

    Ok(())
}
