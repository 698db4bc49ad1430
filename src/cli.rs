use crate::config::{Config, load_config};
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::parser::parse_timeline;
use crate::render::{render_svg, write_output_png, write_output_svg};
use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

static FILE_NAME_SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static FILE_NAME_UNSAFE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]").unwrap());

#[derive(Parser, Debug)]
#[command(
    name = "logtl",
    version,
    about = "Render a list of 'N mya' style events on a logarithmic timeline"
)]
pub struct Args {
    /// Input timeline (.json/.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file or directory (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, layout)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Raster width used when the SVG has none
    #[arg(short = 'w', long = "width", default_value_t = 794.0)]
    pub width: f32,

    /// Raster height used when the SVG has none
    #[arg(short = 'H', long = "height", default_value_t = 1200.0)]
    pub height: f32,

    /// Also write the computed layout as JSON
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config: Config = load_config(args.config.as_deref())?;
    config.render.width = args.width;
    config.render.height = args.height;

    let input = read_input(args.input.as_deref())?;
    let timeline = parse_timeline(&input)?;
    let layout = compute_layout(&timeline, &config.theme, &config.layout);
    let svg = render_svg(&layout, &config.theme, &config.layout);

    if let Some(path) = args.dump_layout.as_deref() {
        write_layout_dump(path, &layout, &timeline)?;
    }

    let output = resolve_output(args.output.as_deref(), &timeline.title, args.output_format);
    match args.output_format {
        OutputFormat::Svg => write_output_svg(&svg, output.as_deref())?,
        OutputFormat::Png => {
            let path = output
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("Output path required for png output"))?;
            write_output_png(&svg, path, &config.render, &config.theme)?;
        }
    }
    if let Some(path) = output {
        info!("Wrote {}", path.display());
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("log_timeline")
        .build();
    // Only fails when a logger is already installed
    let _ = TermLogger::init(level, config_log, TerminalMode::Stderr, ColorChoice::Auto);
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// A directory output gets a file named after the timeline title plus the
/// current Unix time, e.g. `Human-Evolution-1700000000.svg`.
fn resolve_output(output: Option<&Path>, title: &str, format: OutputFormat) -> Option<PathBuf> {
    let output = output?;
    if !output.is_dir() {
        return Some(output.to_path_buf());
    }
    let epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0);
    Some(output.join(format!(
        "{}-{epoch}.{}",
        title_file_stem(title),
        format.extension()
    )))
}

fn title_file_stem(title: &str) -> String {
    let dashed = FILE_NAME_SPACES_RE.replace_all(title.trim(), "-");
    let stem = FILE_NAME_UNSAFE_RE.replace_all(&dashed, "");
    if stem.is_empty() {
        "timeline".to_string()
    } else {
        stem.into_owned()
    }
}
