use std::ops::ControlFlow;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use swatchwork::{
    FixedRateScheduler, FrameLoop, ImmediateScheduler, ManualClock, SceneKind, StrandSpec,
    SwatchOpts, SwatchSession, SystemClock, WeightCatalog,
};

#[derive(Parser, Debug)]
#[command(name = "swatchwork", version)]
struct Cli {
    /// Log verbosity (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the gauge report for a strand combination as JSON.
    Report(SwatchArgs),
    /// Synthesize the stitch texture and print its layout and fingerprint.
    Texture(SwatchArgs),
    /// Run the billow animation for a number of frames and print displacement statistics.
    Animate(AnimateArgs),
}

#[derive(Args, Debug)]
struct SwatchArgs {
    /// Weight catalog JSON; the built-in table is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Session options JSON.
    #[arg(long)]
    opts: Option<PathBuf>,

    /// Strand as `COLOR:WEIGHT_ID[:TWIST]`, e.g. `#aa3322:4:0.5`. Repeat for each strand.
    #[arg(long = "strand", value_parser = parse_strand)]
    strands: Vec<StrandSpec>,

    /// Needle diameter in millimetres; defaults to the recommended needle.
    #[arg(long)]
    needle: Option<f64>,
}

#[derive(Args, Debug)]
struct AnimateArgs {
    #[command(flatten)]
    swatch: SwatchArgs,

    /// Frames to run.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Pace frames in wall-clock time instead of stepping a virtual clock.
    #[arg(long, default_value_t = false)]
    realtime: bool,
}

fn parse_strand(s: &str) -> Result<StrandSpec, String> {
    let mut parts = s.split(':');
    let color = parts.next().unwrap_or_default();
    let id = parts
        .next()
        .ok_or_else(|| format!("strand '{s}' must be COLOR:WEIGHT_ID[:TWIST]"))?
        .parse::<u32>()
        .map_err(|e| format!("strand '{s}' weight id: {e}"))?;
    let twist = match parts.next() {
        Some(t) => t
            .parse::<f64>()
            .map_err(|e| format!("strand '{s}' twist: {e}"))?,
        None => 0.0,
    };
    if parts.next().is_some() {
        return Err(format!("strand '{s}' has too many fields"));
    }
    Ok(StrandSpec::new(color, id, twist))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Report(args) => cmd_report(args),
        Command::Texture(args) => cmd_texture(args),
        Command::Animate(args) => cmd_animate(args),
    }
}

fn open_session(args: &SwatchArgs) -> anyhow::Result<SwatchSession> {
    let catalog = match &args.catalog {
        Some(p) => WeightCatalog::from_path(p)
            .with_context(|| format!("load catalog '{}'", p.display()))?,
        None => WeightCatalog::standard(),
    };
    let opts = match &args.opts {
        Some(p) => {
            SwatchOpts::from_path(p).with_context(|| format!("load options '{}'", p.display()))?
        }
        None => SwatchOpts::default(),
    };
    Ok(SwatchSession::new(catalog, opts)?)
}

fn render(args: &SwatchArgs) -> anyhow::Result<(SwatchSession, swatchwork::RenderOutcome)> {
    let mut session = open_session(args)?;
    let outcome = session
        .render(&args.strands, args.needle.unwrap_or(f64::NAN))
        .context("render swatch")?;
    Ok((session, outcome))
}

fn print_json(value: &impl serde::Serialize) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}

fn cmd_report(args: SwatchArgs) -> anyhow::Result<()> {
    anyhow::ensure!(!args.strands.is_empty(), "at least one --strand is required");
    let (_session, outcome) = render(&args)?;
    let report = outcome
        .report
        .context("render produced no gauge report")?;
    print_json(&report)
}

fn cmd_texture(args: SwatchArgs) -> anyhow::Result<()> {
    let (session, outcome) = render(&args)?;
    let texture = session
        .fabric()
        .map(|f| f.texture())
        .context("session has no fabric")?;
    print_json(&serde_json::json!({
        "scene": outcome.scene,
        "needleMm": outcome.needle_mm,
        "width": texture.width,
        "height": texture.height,
        "layout": texture.layout,
        "repeat": texture.repeat,
        "wrap": [texture.wrap_s, texture.wrap_t],
        "fingerprint": format!("{:016x}", texture.fingerprint()),
    }))
}

fn cmd_animate(args: AnimateArgs) -> anyhow::Result<()> {
    let (mut session, outcome) = render(&args.swatch)?;
    let target = args.frames;
    let mut peak = 0.0f32;
    let on_frame = |s: &mut SwatchSession, info: swatchwork::FrameInfo| {
        if let Some(f) = s.fabric() {
            peak = peak.max(f.max_displacement());
        }
        if info.index + 1 >= target {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    };

    let delivered = if target == 0 {
        0
    } else if args.realtime {
        FrameLoop::for_session(&session, SystemClock::new(), FixedRateScheduler::new(args.fps))
            .run_until_cancelled(&mut session, on_frame)
    } else {
        let clock = ManualClock::new();
        let dt = 1.0 / f64::from(args.fps.max(1));
        FrameLoop::for_session(
            &session,
            clock.clone(),
            ImmediateScheduler::advancing(clock, dt),
        )
        .run_until_cancelled(&mut session, on_frame)
    };

    let edge_peak = session.fabric().map_or(0.0, |f| {
        let [hw, hh] = f.half_extent();
        f.positions()
            .iter()
            .zip(f.original_positions())
            .filter(|(_, o)| o.x.abs() == hw || o.y.abs() == hh)
            .map(|(p, _)| p.z.abs())
            .fold(0.0f32, f32::max)
    });
    let stats = session.resources().stats();
    session.destroy();

    print_json(&serde_json::json!({
        "scene": outcome.scene,
        "animated": outcome.scene == SceneKind::Swatch,
        "frames": delivered,
        "peakDisplacement": peak,
        "edgePeakDisplacement": edge_peak,
        "resources": stats,
        "liveAfterDestroy": session.resources().live_total(),
    }))
}
