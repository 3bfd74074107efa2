use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lyricmotion", version)]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a lyrics timeline, then print a summary.
    Validate(ValidateArgs),
    /// Print the parameter bundle of one frame as pretty JSON.
    Frame(FrameArgs),
    /// Print one JSON bundle per line for a range of frames.
    Range(RangeArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Lyrics timeline JSON.
    #[arg(long)]
    timeline: PathBuf,

    /// Render configuration JSON; overrides `--fps` and `--frames`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Frames per second (integer).
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Total frames of the render; defaults to the end of the last entry.
    #[arg(long)]
    frames: Option<u64>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,
}

#[derive(Args, Debug)]
struct RangeArgs {
    #[command(flatten)]
    input: InputArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the end of the render.
    #[arg(long)]
    end: Option<u64>,

    /// Evaluate on a rayon thread pool.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel`.
    #[arg(long)]
    threads: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Range(args) => cmd_range(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_timeline(path: &Path) -> anyhow::Result<lyricmotion::Timeline> {
    let f = File::open(path).with_context(|| format!("open timeline '{}'", path.display()))?;
    lyricmotion::Timeline::from_reader(BufReader::new(f))
        .with_context(|| format!("load timeline '{}'", path.display()))
}

fn read_config(path: &Path) -> anyhow::Result<lyricmotion::RenderConfig> {
    let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
    lyricmotion::RenderConfig::from_reader(BufReader::new(f))
        .with_context(|| format!("load config '{}'", path.display()))
}

fn load(input: &InputArgs) -> anyhow::Result<lyricmotion::FrameEvaluator> {
    let timeline = read_timeline(&input.timeline)?;
    let config = match &input.config {
        Some(path) => read_config(path)?,
        None => {
            let fps = lyricmotion::Fps::new(input.fps, 1)?;
            let frame_count = input
                .frames
                .unwrap_or_else(|| fps.secs_to_frames(timeline.duration_secs()).ceil() as u64);
            lyricmotion::RenderConfig::new(fps, frame_count)
        }
    };
    Ok(lyricmotion::FrameEvaluator::new(timeline, config)?)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let ev = load(&args.input)?;
    let timeline = ev.timeline();
    let cfg = ev.config();
    let gaps = timeline
        .entries()
        .windows(2)
        .filter(|w| w[0].end < w[1].start)
        .count();

    println!("entries: {}", timeline.len());
    println!("duration: {:.3}s", timeline.duration_secs());
    println!("gaps: {gaps}");
    println!(
        "frames: {} @ {}/{} fps",
        cfg.frame_count, cfg.fps.num, cfg.fps.den
    );
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let ev = load(&args.input)?;
    let params = ev.eval_frame(lyricmotion::FrameIndex(args.frame))?;
    let json = serde_json::to_string_pretty(&params).context("serialize frame params")?;
    println!("{json}");
    Ok(())
}

fn cmd_range(args: RangeArgs) -> anyhow::Result<()> {
    let ev = load(&args.input)?;
    let end = args.end.unwrap_or(ev.config().frame_count);
    let range = lyricmotion::FrameRange::new(
        lyricmotion::FrameIndex(args.start),
        lyricmotion::FrameIndex(end),
    )?;

    let frames = if args.parallel {
        ev.eval_range_parallel(range, args.threads)?
    } else {
        ev.eval_range(range)?
    };

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for params in &frames {
        serde_json::to_writer(&mut out, params).context("serialize frame params")?;
        writeln!(out).context("write stdout")?;
    }
    out.flush().context("flush stdout")?;
    Ok(())
}
