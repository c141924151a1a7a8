use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use ripple::{Config, ConversionContext, Mode, convert_file};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "ripple=debug" } else { "ripple=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let matches = Command::new("ripple")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Ripple to LilyPond converter")
        .arg(
            Arg::new("input")
                .help("Source file (.rpl, .fig, .lyr)")
                .required(true)
                .value_name("INPUT_FILE")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file (defaults to stdout)")
                .value_name("OUTPUT_FILE")
                .index(2),
        )
        .arg(
            Arg::new("mode")
                .help("Rendering mode: part, score or midi")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            Arg::new("config")
                .help("YAML file with variables and predefined macros")
                .short('c')
                .long("config")
                .value_name("CONFIG_FILE"),
        )
        .arg(
            Arg::new("verbose")
                .help("Enable verbose output")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let input_file = matches
        .get_one::<String>("input")
        .context("Missing input file")?;
    let output_file = matches.get_one::<String>("output");
    let verbose = matches.get_flag("verbose");

    init_logging(verbose);
    info!("Ripple converter v{}", env!("CARGO_PKG_VERSION"));

    let mode = matches
        .get_one::<String>("mode")
        .map(|m| m.parse::<Mode>())
        .transpose()
        .context("Failed to parse --mode")?;

    let config = match matches.get_one::<String>("config") {
        Some(path) => Config::load(Path::new(path))?,
        None => Config::new(),
    };

    let mut ctx = ConversionContext::new(mode, config);
    let predefined = ctx.macros().len();
    debug!(mode = ?ctx.mode, macros = predefined, "context ready");
    let mut front_matter = Config::new();
    let markup = convert_file(Path::new(input_file), &mut ctx, &mut front_matter)
        .with_context(|| format!("Failed to convert {}", input_file))?;

    if !front_matter.is_empty() {
        let yaml = serde_yaml::to_string(front_matter.mapping())
            .context("Failed to serialize front matter")?;
        debug!("front matter:\n{}", yaml);
    }

    match output_file {
        Some(output_file) => {
            std::fs::write(output_file, markup)
                .with_context(|| format!("Failed to write output file: {}", output_file))?;
            info!("Wrote {}", output_file);
        }
        None => print!("{}", markup),
    }

    Ok(())
}
