use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use asset_path_resolver::logging;
use asset_path_resolver::models::ResolutionRecord;
use asset_path_resolver::{PathResolver, ResolverConfig};

/// Marker that requests plunging into a reference's directory.
const PLUNGE_PREFIX: char = '>';

/// Exit status when at least one reference was rejected (clap uses 2 for usage errors).
const EXIT_REJECTED: i32 = 3;

/// Resolve stylesheet, image and font references against a navigable base location
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(after_help = "References prefixed with '>' move the current path into their \
                        directory.\n\nENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
struct Cli {
    /// Base location absolute-style references resolve against
    #[arg(short, long)]
    base: Option<String>,

    /// Configuration file (defaults to asset-resolver.config.json in the working directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Additionally accept an extension (repeatable)
    #[arg(long = "allow", value_name = "EXT")]
    allow: Vec<String>,

    /// Stop accepting an extension (repeatable)
    #[arg(long = "deny", value_name = "EXT")]
    deny: Vec<String>,

    /// Print JSON records instead of one path per line
    #[arg(long)]
    json: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// References to resolve, in navigation order
    #[arg(required = true)]
    references: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(EXIT_REJECTED),
        Err(err) => {
            eprintln!("asset-resolve error: {:#}", err);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when at least one reference was rejected.
fn run(cli: Cli) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;
    let mut resolver = build_resolver(&config, &cli)?;

    let records: Vec<ResolutionRecord> = cli
        .references
        .iter()
        .map(|argument| resolve_argument(&mut resolver, argument))
        .collect();

    if cli.json {
        let rendered =
            serde_json::to_string_pretty(&records).context("failed to serialize resolutions")?;
        println!("{rendered}");
    } else {
        for record in &records {
            match (&record.result, &record.error) {
                (Some(result), _) => println!("{result}"),
                (None, Some(error)) => eprintln!("{error}"),
                (None, None) => {}
            }
        }
    }

    Ok(!records.iter().any(ResolutionRecord::is_rejected))
}

fn load_config(path: Option<&std::path::Path>) -> Result<ResolverConfig> {
    match path {
        Some(path) => ResolverConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => {
            let cwd = std::env::current_dir().context("failed to read working directory")?;
            Ok(ResolverConfig::discover(&cwd))
        }
    }
}

fn build_resolver(config: &ResolverConfig, cli: &Cli) -> Result<PathResolver> {
    let mut extensions = config.allowed_extensions();
    extensions.merge(cli.allow.iter().map(|ext| (ext.as_str(), true)));
    extensions.merge(cli.deny.iter().map(|ext| (ext.as_str(), false)));

    let Some(base) = cli.base.as_ref().or(config.base_path.as_ref()) else {
        bail!("no base location: pass --base or set basePath in the configuration");
    };

    let mut resolver = PathResolver::new(extensions);
    resolver.initialize(base.as_str());
    Ok(resolver)
}

fn resolve_argument(resolver: &mut PathResolver, argument: &str) -> ResolutionRecord {
    let (reference, plunge) = match argument.strip_prefix(PLUNGE_PREFIX) {
        Some(reference) => (reference, true),
        None => (argument, false),
    };

    let (result, error) = match resolver.resolve(reference, plunge) {
        Ok(path) => (Some(path), None),
        Err(err) => (None, Some(err.to_string())),
    };

    ResolutionRecord {
        reference: reference.to_string(),
        plunge,
        result,
        error,
    }
}
