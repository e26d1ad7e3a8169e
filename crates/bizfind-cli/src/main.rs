mod render;
mod search;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use bizfind_core::{IndustrySelection, Vocabulary};

use crate::search::SearchPipeline;

#[derive(Debug, Parser)]
#[command(name = "bizfind")]
#[command(about = "Find independent local businesses from OpenStreetMap data")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search an area for businesses and print them
    Search {
        /// Free-text location, e.g. "Nashville, TN" (defaults to BIZFIND_DEFAULT_LOCATION)
        location: Option<String>,

        /// Industry selector label; see `bizfind industries`
        #[arg(long, default_value = "All")]
        industry: IndustrySelection,

        /// Number of sample records generated when the live search finds nothing
        #[arg(long)]
        sample_count: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Skip the live search and show sample data only
        #[arg(long)]
        sample_only: bool,
    },
    /// List the industry selector labels
    Industries,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bizfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let vocabulary = match &config.vocabulary_path {
        Some(path) => bizfind_core::load_vocabulary(path)?,
        None => Vocabulary::default(),
    };

    match cli.command {
        Commands::Search {
            location,
            industry,
            sample_count,
            format,
            sample_only,
        } => {
            let location = location.unwrap_or_else(|| config.default_location.clone());
            if let IndustrySelection::Category(label) = &industry {
                if vocabulary.industry_filter(label).is_none() {
                    tracing::warn!(
                        label = %label,
                        "industry is not a known selector label; matching by substring"
                    );
                }
            }

            let mut pipeline = SearchPipeline::from_config(&config, vocabulary)?;
            if let Some(count) = sample_count {
                pipeline = pipeline.with_sample_count(count);
            }

            let mut rng = rand::rng();
            let report = if sample_only {
                pipeline.sample_only(&location, &industry, &mut rng)
            } else {
                pipeline.run(&location, &industry, &mut rng).await?
            };

            let mut stdout = std::io::stdout().lock();
            match format {
                OutputFormat::Table => render::write_table(&mut stdout, &report)?,
                OutputFormat::Json => render::write_json(&mut stdout, &report)?,
            }
        }
        Commands::Industries => {
            for label in vocabulary.industry_labels() {
                println!("{label}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
