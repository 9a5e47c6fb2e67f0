use std::io::Write as _;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ringloader", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the loader at one point in time as an SVG document.
    Frame(FrameArgs),
    /// Run the animation in real time, printing one JSON frame state per line.
    Stream(StreamArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Milliseconds since the animation started.
    #[arg(long, allow_negative_numbers = true)]
    time_ms: f64,

    /// Square canvas size in pixels.
    #[arg(long, default_value_t = 512)]
    size: u32,

    /// Background color (`#rrggbb`, `#rgb` or `rgb(r,g,b)`).
    #[arg(long, default_value = "#111111")]
    background: String,

    /// Leave the background transparent (overrides `--background`).
    #[arg(long)]
    transparent: bool,
}

#[derive(Parser, Debug)]
struct StreamArgs {
    /// Stop after this many frames; runs until interrupted otherwise.
    #[arg(long)]
    frames: Option<u64>,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Stream(args) => cmd_stream(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.time_ms.is_finite(), "--time-ms must be finite");
    let canvas = ringloader::Canvas::square(args.size)?;
    let background = if args.transparent {
        None
    } else {
        Some(
            args.background
                .parse::<ringloader::Rgb8>()
                .with_context(|| format!("parse background '{}'", args.background))?,
        )
    };

    let frame = ringloader::AnimationDriver::new().frame_at(args.time_ms);
    let svg = ringloader::frame_svg(&frame, canvas, background);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(svg.as_bytes()).context("write svg")?;
    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn cmd_stream(args: StreamArgs) -> anyhow::Result<()> {
    let fps = ringloader::Fps::new(args.fps, 1)?;
    let mut driver = ringloader::AnimationDriver::new();
    let mut clock = ringloader::RealtimeClock::new(fps);
    let mut surface = ringloader::NdjsonSurface::new(std::io::stdout().lock());

    let frames = ringloader::run_loop(&mut driver, &mut clock, &mut surface, args.frames)?;
    surface.into_inner().flush().context("flush stdout")?;
    tracing::info!(frames, "stream finished");
    Ok(())
}
