use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "slidefx", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single transition frame as a PNG.
    Frame(FrameArgs),
    /// Render evenly spaced progress steps from 0 to 1 as numbered PNGs.
    Sweep(SweepArgs),
    /// Print every effect id and name.
    List,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input transition config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the configured effect (name or id).
    #[arg(long)]
    effect: Option<String>,

    /// Override the configured progress.
    #[arg(long, allow_negative_numbers = true)]
    progress: Option<f64>,

    /// Override the configured elapsed time.
    #[arg(long, allow_negative_numbers = true)]
    time: Option<f64>,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Input transition config JSON.
    #[arg(long)]
    config: PathBuf,

    /// Directory receiving `frame_NNNN.png` files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames, including both endpoints.
    #[arg(long, default_value_t = 10)]
    frames: usize,

    /// Override the configured effect (name or id).
    #[arg(long)]
    effect: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::List => {
            for kind in slidefx::TransitionKind::ALL {
                println!("{}", list_line(kind));
            }
            Ok(())
        }
    }
}

fn list_line(kind: slidefx::TransitionKind) -> String {
    let mut reads = Vec::new();
    if kind.uses_mask() {
        reads.push("mask");
    }
    if kind.uses_ripple() {
        reads.push("time");
    }
    if reads.is_empty() {
        format!("{:>2} {}", kind.id(), kind.name())
    } else {
        format!("{:>2} {} (reads {})", kind.id(), kind.name(), reads.join(", "))
    }
}

fn read_config(path: &Path, effect: Option<&str>) -> anyhow::Result<slidefx::TransitionConfig> {
    let mut cfg = slidefx::TransitionConfig::from_path(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    cfg.resolve_paths(base);
    if let Some(effect) = effect {
        cfg.effect = effect_selector(effect);
    }
    Ok(cfg)
}

fn effect_selector(s: &str) -> slidefx::EffectSelector {
    match s.trim().parse::<i64>() {
        Ok(id) => slidefx::EffectSelector::Id(id),
        Err(_) => slidefx::EffectSelector::Name(s.to_string()),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut cfg = read_config(&args.config, args.effect.as_deref())?;
    if let Some(p) = args.progress {
        cfg.progress = p;
    }
    if let Some(t) = args.time {
        cfg.time = t;
    }

    let images = slidefx::PreparedImages::prepare(&cfg)?;
    let (width, height) = cfg.frame_size()?;
    let params = slidefx::TransitionParams {
        effect_id: cfg.effect.resolve()?,
        progress: cfg.progress,
        time: cfg.time,
    };

    let frame = slidefx::render_frame(&images.inputs(), params, width, height, &cfg.threading)?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.config, args.effect.as_deref())?;
    let images = slidefx::PreparedImages::prepare(&cfg)?;
    let (width, height) = cfg.frame_size()?;

    let frames = slidefx::render_sweep(
        &images.inputs(),
        cfg.effect.resolve()?,
        cfg.time,
        args.frames,
        width,
        height,
        &cfg.threading,
    )?;

    for (idx, frame) in frames.iter().enumerate() {
        write_png(&args.out_dir.join(format!("frame_{idx:04}.png")), frame)?;
    }

    eprintln!("wrote {} frames to {}", frames.len(), args.out_dir.display());
    Ok(())
}

fn write_png(path: &Path, frame: &slidefx::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))
}
