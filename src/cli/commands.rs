//! CLI command definitions and handlers

use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::info;

use crate::core::client::TranslationClient;
use crate::core::models::TranslateOptions;
use crate::processors::csv_io::{read_csv, write_csv};

/// Commands for the tabular translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the language of a text
    Detect {
        /// Text to inspect
        #[arg(long)]
        text: String,
    },

    /// Translate a single text
    Text {
        /// Text to translate
        #[arg(long)]
        text: String,

        /// Source language (auto-detect if not specified)
        #[arg(long)]
        source_lang: Option<String>,

        /// Target language
        #[arg(short, long)]
        target_lang: String,
    },

    /// Translate the header row of a CSV file
    Header {
        /// Input CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Output CSV file (default: <input>_translated.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Source language (auto-detect per name if not specified)
        #[arg(long)]
        source_lang: Option<String>,

        /// Target language
        #[arg(short, long)]
        target_lang: String,
    },

    /// Translate the cells of selected CSV columns
    Entries {
        /// Input CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Output CSV file (default: <input>_translated.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Columns to translate
        #[arg(short, long, value_delimiter = ',', required = true)]
        columns: Vec<String>,

        /// Source language (auto-detect per cell if not specified)
        #[arg(long)]
        source_lang: Option<String>,

        /// Target language
        #[arg(short, long)]
        target_lang: String,
    },
}

/// Run `command` against `client`
pub async fn dispatch(client: &TranslationClient, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Detect { text } => handle_detect(client, &text).await,
        Commands::Text {
            text,
            source_lang,
            target_lang,
        } => handle_text(client, &text, &target_lang, source_lang.as_deref()).await,
        Commands::Header {
            file,
            output,
            source_lang,
            target_lang,
        } => handle_header(client, file, output, source_lang, target_lang).await,
        Commands::Entries {
            file,
            output,
            columns,
            source_lang,
            target_lang,
        } => handle_entries(client, file, output, columns, source_lang, target_lang).await,
    }
}

/// Handle language detection command
pub async fn handle_detect(client: &TranslationClient, text: &str) -> anyhow::Result<()> {
    let language = client.auto_detect(text).await?;
    println!("{}", language);
    Ok(())
}

/// Handle single text translation command
pub async fn handle_text(
    client: &TranslationClient,
    text: &str,
    target_lang: &str,
    source_lang: Option<&str>,
) -> anyhow::Result<()> {
    let translated = client.translate(text, target_lang, source_lang).await?;
    println!("{}", translated);
    Ok(())
}

/// Handle header translation command
pub async fn handle_header(
    client: &TranslationClient,
    file: PathBuf,
    output: Option<PathBuf>,
    source_lang: Option<String>,
    target_lang: String,
) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let output = output.unwrap_or_else(|| default_output(&file));

    info!("Starting header translation");
    info!("Input: {}", file.display());
    info!("Output: {}", output.display());
    info!("Target language: {}", target_lang);

    let mut frame = read_csv(&file)?;
    let options = options_for(source_lang);

    let pb = spinner(format!("Translating {} column names", frame.n_columns()));
    let result = client.translate_header(&mut frame, &target_lang, &options).await;
    pb.finish_and_clear();
    result?;

    write_csv(&frame, &output)?;

    let duration = start_time.elapsed();
    info!("Completed header translation in {:?}", duration);

    println!("\n✅ Header translated!");
    println!("   Columns: {}", frame.column_names().join(", "));
    println!("   Output: {}", output.display());
    println!("   Time: {:?}", duration);

    Ok(())
}

/// Handle entry translation command
pub async fn handle_entries(
    client: &TranslationClient,
    file: PathBuf,
    output: Option<PathBuf>,
    columns: Vec<String>,
    source_lang: Option<String>,
    target_lang: String,
) -> anyhow::Result<()> {
    let start_time = Instant::now();
    let output = output.unwrap_or_else(|| default_output(&file));

    info!("Starting entry translation");
    info!("Input: {}", file.display());
    info!("Output: {}", output.display());
    info!("Columns: {}", columns.join(", "));
    info!("Target language: {}", target_lang);

    let mut frame = read_csv(&file)?;
    let options = options_for(source_lang);

    let pb = spinner(format!(
        "Translating {} cells",
        columns.len() * frame.n_rows()
    ));
    let result = client
        .translate_entries(&mut frame, &columns, &target_lang, &options)
        .await;
    pb.finish_and_clear();
    result?;

    write_csv(&frame, &output)?;

    let duration = start_time.elapsed();
    info!("Completed entry translation in {:?}", duration);

    println!("\n✅ Entries translated!");
    println!("   Rows: {}", frame.n_rows());
    println!("   Output: {}", output.display());
    println!("   Time: {:?}", duration);

    Ok(())
}

fn options_for(source_lang: Option<String>) -> TranslateOptions {
    match source_lang {
        Some(lang) => TranslateOptions::new().with_source(lang),
        None => TranslateOptions::new(),
    }
}

/// `data/people.csv` -> `data/people_translated.csv`
fn default_output(file: &Path) -> PathBuf {
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let extension = file
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "csv".to_string());

    file.with_file_name(format!("{}_translated.{}", stem, extension))
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
