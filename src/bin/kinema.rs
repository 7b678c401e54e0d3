use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use kinema::{
    Fps, HeadlessHost, Page, PageConfig, PageEvent, Perspective, Point, Retained,
    ScrollMetrics, Size,
};

const VIEWPORT: Size = Size::new(1280.0, 720.0);

#[derive(Parser, Debug)]
#[command(name = "kinema", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the page configuration as JSON.
    Config(ConfigArgs),
    /// Evaluate the page at one point in time and print the frame as JSON.
    Frame(FrameArgs),
    /// Run a scripted session and write per-frame render-state diffs as JSON lines.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Config JSON to load and validate instead of the defaults.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Page time in seconds.
    #[arg(long)]
    time: f64,

    /// Scroll offset in px.
    #[arg(long, default_value_t = 0.0)]
    scroll: f64,

    /// Scrollable extent in px.
    #[arg(long, default_value_t = 4000.0)]
    extent: f64,

    /// Observer perspective (`ground` or `bus`), selected at time zero.
    #[arg(long)]
    perspective: Option<Perspective>,

    /// Config JSON.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Session length in seconds.
    #[arg(long)]
    seconds: f64,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Scrollable extent in px; the session scrolls from top to bottom.
    #[arg(long, default_value_t = 4000.0)]
    extent: f64,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Config JSON.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Config(args) => cmd_config(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read config '{}'", path.display()))?;
    PageConfig::from_json_str(&s).with_context(|| format!("load config '{}'", path.display()))
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = read_config(args.in_path.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.time.is_finite() && args.time >= 0.0,
        "--time must be a finite number >= 0"
    );
    let mut page = Page::new(read_config(args.config_path.as_deref())?)?;
    let mut host = HeadlessHost::accepting();

    page.handle_event(PageEvent::Scroll(ScrollMetrics::from_extent(
        args.extent,
        args.scroll,
    )));
    if let Some(p) = args.perspective {
        page.handle_event(PageEvent::SelectPerspective(p));
    }

    let step = Fps::new(60, 1)?.frame_duration_secs();
    let mut frame = page.tick(0.0, &mut host);
    let mut remaining = args.time;
    while remaining > 0.0 {
        let dt = remaining.min(step);
        frame = page.tick(dt, &mut host);
        remaining -= dt;
    }

    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}

#[derive(serde::Serialize)]
struct DiffLine<'a> {
    frame: u64,
    time: f64,
    changes: &'a kinema::RenderDiff,
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        args.seconds.is_finite() && args.seconds > 0.0,
        "--seconds must be > 0"
    );
    let fps = Fps::new(args.fps, 1)?;
    let mut page = Page::new(read_config(args.config_path.as_deref())?)?;
    let mut host = HeadlessHost::accepting();
    let mut retained = Retained::default();

    let mut out: Box<dyn Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
            Box::new(BufWriter::new(f))
        }
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let total = fps.secs_to_frames_floor(args.seconds);
    let dt = fps.frame_duration_secs();
    let switch_frame = total / 2;
    let mut changed_props = 0usize;

    for i in 0..total {
        let t = fps.frames_to_secs(i);
        let switch = i == switch_frame;
        for event in scripted_events(t, args.seconds, args.extent, switch, &mut host) {
            page.handle_event(event);
        }

        let frame = page.tick(if i == 0 { 0.0 } else { dt }, &mut host);
        let changes = retained.commit(frame.to_render_state());
        changed_props += changes.len();

        let line = DiffLine {
            frame: i,
            time: frame.time,
            changes: &changes,
        };
        serde_json::to_writer(&mut out, &line)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    tracing::info!(frames = total, changed_props, "simulation finished");
    if let Some(path) = &args.out {
        eprintln!("wrote {} frames to {}", total, path.display());
    }
    Ok(())
}

/// Linear scroll to the bottom, a pointer circling the viewport centre, a switch to the bus
/// perspective halfway through, and a fullscreen request at the same moment.
fn scripted_events(
    t: f64,
    seconds: f64,
    extent: f64,
    switch: bool,
    host: &mut HeadlessHost,
) -> Vec<PageEvent> {
    let mut events = vec![
        PageEvent::Scroll(ScrollMetrics::from_extent(extent, extent * t / seconds)),
        PageEvent::PointerMove {
            client: Point::new(
                VIEWPORT.width * (0.5 + 0.4 * t.cos()),
                VIEWPORT.height * (0.5 + 0.4 * t.sin()),
            ),
            viewport: VIEWPORT,
        },
    ];

    if switch {
        events.push(PageEvent::SelectPerspective(Perspective::Bus));
        events.push(PageEvent::ToggleFullscreen);
    }

    while let Some(active) = host.take_change() {
        events.push(PageEvent::FullscreenChanged(active));
    }
    events
}
