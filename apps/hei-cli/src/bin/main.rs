use std::borrow::Cow;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Args, Parser, Subcommand};
use hei_builder::DatasetBuilder;
use hei_core::config::{resolve_with_base, Config};
use hei_query::{InstitutionStore, State};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Build and query the Nigerian higher institutions dataset
#[derive(Parser, Debug)]
#[command(name = "hei", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert the source CSV into the JSON dataset
    Build(BuildArgs),
    /// Look up one institution by its exact acronym
    Acronym {
        acronym: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Institutions whose name contains TEXT (case-insensitive)
    Name {
        text: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Institutions whose name contains the state name
    State {
        state: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Institutions of one type: University, College or Polytechnic
    Type {
        category: String,
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Every institution in the dataset
    All {
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args, Debug)]
struct BuildArgs {
    /// Source CSV (defaults to build.source_csv)
    #[arg(long)]
    source: Option<String>,
    /// Root of the image asset tree; implies --embed-images
    #[arg(long)]
    image_root: Option<String>,
    /// Embed base64 images from the asset tree
    #[arg(long)]
    embed_images: bool,
    /// Destination file; repeat to write several copies (defaults to build.outputs)
    #[arg(short, long = "output")]
    outputs: Vec<String>,
    /// Show a progress bar
    #[arg(long)]
    progress: bool,
}

#[derive(Args, Debug)]
struct QueryArgs {
    /// Strip the base64 image from results
    #[arg(long)]
    no_image: bool,
    /// Dataset file to query instead of the bundled one
    #[arg(long)]
    dataset: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

fn run_build(config: &Config, args: BuildArgs) -> anyhow::Result<()> {
    let mut settings = config.build_settings()?;
    let cwd = std::env::current_dir()?;
    if let Some(source) = &args.source { settings.source_csv = resolve_with_base(&cwd, source); }
    if let Some(root) = &args.image_root {
        settings.image_root = resolve_with_base(&cwd, root);
        settings.embed_images = true;
    }
    if args.embed_images { settings.embed_images = true; }
    if !args.outputs.is_empty() {
        settings.outputs = args.outputs.iter().map(|o| resolve_with_base(&cwd, o)).collect();
    }

    tracing::info!(source = %settings.source_csv.display(), embed_images = settings.embed_images, "building dataset");
    let builder = DatasetBuilder::from_settings(&settings).with_progress(args.progress);
    let count = builder.build_and_write(&settings.source_csv, &settings.outputs)?;
    println!("Conversion completed: {} institutions written to {} file(s)", count, settings.outputs.len());
    for out in &settings.outputs { println!("  {}", out.display()); }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn open_store(config: &Config, query: &QueryArgs) -> anyhow::Result<Cow<'static, InstitutionStore>> {
    let dataset: Option<PathBuf> = match &query.dataset {
        Some(p) => Some(resolve_with_base(&std::env::current_dir()?, p)),
        None => config.dataset_path(),
    };
    Ok(match dataset {
        Some(path) => Cow::Owned(InstitutionStore::load(&path)?),
        None => Cow::Borrowed(hei_query::store()?),
    })
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let cli = Cli::parse();
    match cli.command {
        Command::Build(args) => run_build(&config, args),
        Command::Acronym { acronym, query } => {
            let store = open_store(&config, &query)?;
            print_json(&store.find_by_acronym(&acronym, !query.no_image))
        }
        Command::Name { text, query } => {
            let store = open_store(&config, &query)?;
            print_json(&store.find_by_name_substring(&text, !query.no_image))
        }
        Command::State { state, query } => {
            let state = State::from_str(&state)?;
            let store = open_store(&config, &query)?;
            print_json(&store.find_by_state(state, !query.no_image))
        }
        Command::Type { category, query } => {
            let store = open_store(&config, &query)?;
            print_json(&store.find_by_category(&category, !query.no_image)?)
        }
        Command::All { query } => {
            let store = open_store(&config, &query)?;
            print_json(&store.find_all(!query.no_image))
        }
    }
}
