use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing::info;

use bangla_news_eda::analysis::{partition_by_date, FrequencyAnalyzer, TermCount};
use bangla_news_eda::config::PipelineConfig;
use bangla_news_eda::dataset::category_counts;
use bangla_news_eda::dates::{BanglaDateParser, ParsedDate};
use bangla_news_eda::eda::{self, Corpus};
use bangla_news_eda::logging;
use bangla_news_eda::report::{self, console, DateReport};
use bangla_news_eda::text::{CleanedArticle, CleaningPipeline, TextNormalizer};

#[derive(Parser)]
#[command(author, version, about = "Exploratory analysis of Bangla newspaper articles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Overrides for values otherwise read from `BANGLA_EDA_*` variables.
#[derive(Args, Debug)]
struct DatasetArgs {
    /// JSON records dataset
    #[arg(long)]
    dataset1: Option<PathBuf>,

    /// CSV dataset
    #[arg(long)]
    dataset2: Option<PathBuf>,

    /// Maximum articles kept per category
    #[arg(long)]
    target_size: Option<usize>,

    /// Seed for the balancing shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for written outputs
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

impl DatasetArgs {
    fn config(self) -> PipelineConfig {
        let mut config = PipelineConfig::from_env();
        if let Some(path) = self.dataset1 {
            config.dataset1 = path;
        }
        if let Some(path) = self.dataset2 {
            config.dataset2 = path;
        }
        if let Some(target_size) = self.target_size {
            config.target_size = target_size;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the whole pipeline, print every table and write the outputs
    Run {
        #[command(flatten)]
        datasets: DatasetArgs,

        /// Rows shown per top-words and bigrams table
        #[arg(short, long, default_value = "20")]
        display_limit: usize,
    },

    /// Write the cleaned, balanced corpus as CSV
    Clean {
        #[command(flatten)]
        datasets: DatasetArgs,
    },

    /// Most frequent words per category
    TopWords {
        #[command(flatten)]
        datasets: DatasetArgs,

        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Number of words per category
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Most frequent adjacent word pairs per category
    Bigrams {
        #[command(flatten)]
        datasets: DatasetArgs,

        /// Only this category
        #[arg(short, long)]
        category: Option<String>,

        /// Number of bigrams per category
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Words that occur in exactly one category
    UniqueWords {
        #[command(flatten)]
        datasets: DatasetArgs,
    },

    /// Publication date coverage and distributions
    Temporal {
        #[command(flatten)]
        datasets: DatasetArgs,
    },

    /// Parse a single Bangla date string
    ParseDate {
        #[arg(required = true)]
        text: String,
    },

    /// Normalize and stopword-filter a single text
    Normalize {
        #[arg(required = true)]
        text: String,

        /// Category whose class words are also removed
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    logging::configure_logging();

    let args = Cli::parse();

    match args.command {
        Commands::Run {
            datasets,
            display_limit,
        } => run(datasets.config(), display_limit)?,
        Commands::Clean { datasets } => clean(datasets.config())?,
        Commands::TopWords {
            datasets,
            category,
            limit,
        } => {
            let config = datasets.config();
            let limit = limit.unwrap_or(config.top_words);
            top_terms(&config, category.as_deref(), "Top words", |analyzer, c| {
                analyzer.top_unigrams(c, limit)
            })?;
        }
        Commands::Bigrams {
            datasets,
            category,
            limit,
        } => {
            let config = datasets.config();
            let limit = limit.unwrap_or(config.top_bigrams);
            top_terms(&config, category.as_deref(), "Top bigrams", |analyzer, c| {
                analyzer.top_bigrams(c, limit)
            })?;
        }
        Commands::UniqueWords { datasets } => {
            let config = datasets.config();
            let (_, cleaned) = cleaned_corpus(&config)?;
            let analyzer = FrequencyAnalyzer::new(&cleaned);
            console::print_exclusive_words(&report::exclusive_words(&analyzer));
        }
        Commands::Temporal { datasets } => {
            let corpus = eda::load_corpus(&datasets.config())?;
            let partition = partition_by_date(&corpus.merged, &BanglaDateParser::new());
            console::print_date_report(&DateReport::from_partition(&partition));
        }
        Commands::ParseDate { text } => parse_date(&text),
        Commands::Normalize { text, category } => normalize(&text, category.as_deref()),
    }

    Ok(())
}

fn run(config: PipelineConfig, display_limit: usize) -> Result<()> {
    let corpus = eda::load_corpus(&config)?;
    let analysis = eda::analyze(&corpus, &CleaningPipeline::default(), &config);
    console::print_report(&analysis.report, display_limit);

    let (csv_path, json_path) = eda::write_outputs(&analysis, &config)?;
    println!(
        "\n{} {:?}\n{} {:?}",
        "Cleaned corpus:".bright_blue(),
        csv_path,
        "Report:".bright_blue(),
        json_path
    );
    Ok(())
}

fn cleaned_corpus(config: &PipelineConfig) -> Result<(Corpus, Vec<CleanedArticle>)> {
    let corpus = eda::load_corpus(config)?;
    let cleaned = CleaningPipeline::default().clean_corpus(&corpus.balanced);
    Ok((corpus, cleaned))
}

fn clean(config: PipelineConfig) -> Result<()> {
    let (corpus, cleaned) = cleaned_corpus(&config)?;
    console::print_category_counts(
        "Category distribution (after balancing)",
        &category_counts(&corpus.balanced),
    );

    let path = config.output_dir.join(eda::CLEANED_CSV);
    report::write_cleaned_csv(&cleaned, &path)?;
    info!("Cleaned corpus written to {:?}", path);
    Ok(())
}

fn top_terms<F>(config: &PipelineConfig, category: Option<&str>, title: &str, rank: F) -> Result<()>
where
    F: Fn(&FrequencyAnalyzer, &str) -> Vec<TermCount>,
{
    let (_, cleaned) = cleaned_corpus(config)?;
    let analyzer = FrequencyAnalyzer::new(&cleaned);

    let categories: Vec<&str> = match category {
        Some(category) => vec![category],
        None => analyzer.categories().iter().map(String::as_str).collect(),
    };
    for category in categories {
        console::print_term_counts(title, category, &rank(&analyzer, category));
    }
    Ok(())
}

fn parse_date(text: &str) {
    match BanglaDateParser::new().parse(Some(text)) {
        ParsedDate::Parsed(datetime) => {
            println!("{}", datetime.format("%Y-%m-%d %H:%M").to_string().bright_green())
        }
        ParsedDate::Unparsed => println!("{}", "Unparsed".bright_red()),
    }
}

fn normalize(text: &str, category: Option<&str>) {
    let pipeline = CleaningPipeline::default();
    let normalized = TextNormalizer::new().normalize(Some(text));
    let mut cleaned = pipeline.clean_text(Some(text));
    if let Some(category) = category {
        cleaned = pipeline.class_words().remove_class_words(&cleaned, category);
    }

    println!("{}: {}", "Normalized".bright_blue(), normalized);
    println!("{}: {}", "Cleaned".bright_blue(), cleaned);
}
