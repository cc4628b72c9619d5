use clap::{Parser, Subcommand};
use log::LevelFilter;

use audio_lookup::config::ServiceConfig;
use audio_lookup::constants::DEFAULT_SEED_DATA;
use audio_lookup::lookup::{self, SeedStatus};
use audio_lookup::model::AudioRecord;
use audio_lookup::serve::serve_lookup;
use audio_lookup::{db, store};

#[derive(Parser, Debug)]
#[command(author, version, about = "Language to audio URL lookup service")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the lookup API over HTTP
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,
    },
    /// Populate the store with the fixed seed dataset
    Seed,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ServiceConfig::from_env();

    // DEBUG only raises the default verbosity; RUST_LOG still wins
    let default_level = if config.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(default_level)
        .parse_default_env()
        .init();

    match args.command {
        Command::Serve { port } => serve_lookup(config, port),
        Command::Seed => seed(config),
    }
}

fn seed(config: ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let dataset: Vec<AudioRecord> = DEFAULT_SEED_DATA
        .iter()
        .map(|(language, url)| AudioRecord::new(*language, *url))
        .collect::<Result<_, _>>()?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        println!("Connecting to store: {}", config.database_url);
        let pool = db::open_pool(&config.database_url).await?;
        db::init_schema(&pool).await?;

        let report = lookup::seed(&pool, &dataset).await?;

        for outcome in &report.outcomes {
            match outcome.status {
                SeedStatus::Added => println!("  - Added: {}", outcome.language),
                SeedStatus::Skipped => {
                    println!("  - Skipped (already exists): {}", outcome.language)
                }
            }
        }

        let total = store::count_all(&pool).await?;
        println!(
            "Seeding complete: {} added, {} skipped, {} records in store.",
            report.added_count(),
            report.skipped_count(),
            total
        );

        Ok::<(), Box<dyn std::error::Error + Send + Sync>>(())
    })
    .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(())
}
