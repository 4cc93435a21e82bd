use std::path::PathBuf;
use std::process::ExitCode;

use backframe::{BackframeError, FfmpegLogLevel, TargetFormat};
use clap::Parser;
use colored::Colorize;

/// Extract the first decodable frame of a video as a background image.
#[derive(Debug, Parser)]
#[command(
    name = "backframe",
    version,
    about = "Extract a still background frame from a video file",
    after_help = "Examples:\n  backframe intro.mp4 --out background.png\n  backframe clip.mkv --out bg.png --pixel-format rgba8 --log-level info"
)]
struct Cli {
    /// Input video path.
    input: PathBuf,

    /// Output image path; format inferred from the extension (png, jpg, bmp, ...).
    #[arg(long, short)]
    out: PathBuf,

    /// Target pixel format (rgb8, rgba8).
    #[arg(long, default_value = "rgb8")]
    pixel_format: String,

    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,

    /// Show additional logging output.
    #[arg(long)]
    verbose: bool,
}

fn parse_pixel_format(value: &str) -> Result<TargetFormat, String> {
    match value.to_ascii_lowercase().as_str() {
        "rgb8" | "rgb24" => Ok(TargetFormat::Rgb8),
        "rgba8" | "rgba" => Ok(TargetFormat::Rgba8),
        other => Err(format!("unknown pixel format '{other}' (expected rgb8 or rgba8)")),
    }
}

fn parse_log_level(value: &str) -> Result<FfmpegLogLevel, String> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Ok(FfmpegLogLevel::Quiet),
        "panic" => Ok(FfmpegLogLevel::Panic),
        "fatal" => Ok(FfmpegLogLevel::Fatal),
        "error" => Ok(FfmpegLogLevel::Error),
        "warning" => Ok(FfmpegLogLevel::Warning),
        "info" => Ok(FfmpegLogLevel::Info),
        "verbose" => Ok(FfmpegLogLevel::Verbose),
        "debug" => Ok(FfmpegLogLevel::Debug),
        "trace" => Ok(FfmpegLogLevel::Trace),
        other => Err(format!("unknown FFmpeg log level '{other}'")),
    }
}

fn run(cli: &Cli, format: TargetFormat) -> Result<(), BackframeError> {
    let image = backframe::load_background_video_with(&cli.input, format)?;
    println!(
        "{} {}x{} {:?} frame from {}",
        "Extracted".green().bold(),
        image.width(),
        image.height(),
        image.format(),
        cli.input.display(),
    );

    image.to_image()?.save(&cli.out).map_err(|error| {
        BackframeError::SurfaceCreateFailed(format!(
            "failed to write {}: {error}",
            cli.out.display()
        ))
    })?;
    println!("{} {}", "Saved".green().bold(), cli.out.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    if let Some(level) = &cli.log_level {
        match parse_log_level(level) {
            Ok(level) => backframe::set_ffmpeg_log_level(level),
            Err(message) => {
                eprintln!("{} {message}", "error:".red().bold());
                return ExitCode::FAILURE;
            }
        }
    }

    let format = match parse_pixel_format(&cli.pixel_format) {
        Ok(format) => format,
        Err(message) => {
            eprintln!("{} {message}", "error:".red().bold());
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, format) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{} {error}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
