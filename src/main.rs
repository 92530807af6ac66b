// The CLI's output is its stdout.
#![allow(clippy::print_stdout)]

//! `landing-motion` command-line companion: inspect and validate page
//! options, and preview counter animations without a browser.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use landing_motion::animation::{CounterAnimation, CounterTarget};
use landing_motion::Options;

#[derive(Parser)]
#[command(name = "landing-motion")]
#[command(author, version, about = "Landing page motion options and previews")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the JSON schema of the options block
    Schema,
    /// Print the default options as TOML
    Defaults,
    /// Check a TOML options file and print the effective options
    Validate {
        /// Path to the TOML file
        path: PathBuf,
    },
    /// Print the frames a stat counter would show
    Counter {
        /// Stat text as it appears on the page, e.g. "1500+"
        text: String,
        /// Frames per second to sample at (1-1000)
        #[arg(
            long,
            default_value_t = 60,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PREVIEW_FPS)),
        )]
        fps: u32,
        /// Options file to take the counter settings from
        #[arg(long)]
        options: Option<PathBuf>,
    },
}

fn load_options(path: Option<&PathBuf>) -> Result<Options> {
    match path {
        Some(path) => Options::load(path)
            .with_context(|| format!("failed to load {}", path.display())),
        None => Ok(Options::default()),
    }
}

/// Frames per second accepted by `counter --fps`.
const MAX_PREVIEW_FPS: u32 = 1000;

/// Sample the frames a stat counter shows, as `(ms, text)` pairs. Returns
/// `None` when the text is not animated.
fn counter_frames(
    text: &str,
    fps: u32,
    options: &Options,
) -> Result<Option<Vec<(f64, String)>>> {
    if !(1..=MAX_PREVIEW_FPS).contains(&fps) {
        bail!("--fps must be between 1 and {MAX_PREVIEW_FPS}, got {fps}");
    }
    let Some(target) = CounterTarget::parse(text, &options.counter.suffix)
    else {
        return Ok(None);
    };

    let mut animation =
        CounterAnimation::new(target, 0.0, options.counter.duration())
            .with_easing(options.counter.easing);
    let step = Duration::from_secs(1) / fps;
    let mut now = Duration::ZERO;
    let mut frames = Vec::new();
    loop {
        let millis = now.as_secs_f64() * 1000.0;
        let frame = animation.frame(millis);
        frames.push((millis, frame.text));
        if frame.done {
            return Ok(Some(frames));
        }
        now += step;
    }
}

fn preview_counter(text: &str, fps: u32, options: &Options) -> Result<()> {
    match counter_frames(text, fps, options)? {
        Some(frames) => {
            for (millis, text) in frames {
                println!("{millis:>8.1}ms  {text}");
            }
        }
        None => println!(
            "{text:?} stays static (needs a leading number and `{}`)",
            options.counter.suffix
        ),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Schema => {
            let schema = Options::json_schema();
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        Commands::Defaults => {
            println!("{}", Options::default().to_toml_string()?);
        }
        Commands::Validate { path } => {
            let options = load_options(Some(&path))?;
            log::info!("{} is valid", path.display());
            println!("{}", options.to_toml_string()?);
        }
        Commands::Counter { text, fps, options } => {
            let options = load_options(options.as_ref())?;
            preview_counter(&text, fps, &options)?;
        }
    }
    Ok(())
}
