use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use textkit::decode::decode_html_entities;
use textkit::demo::{run_demo, DemoOptions};
use textkit::render::color_enabled;
use textkit::settings::Settings;
use textkit::strings::StrExt;

fn setup_debug_logging() -> Result<()> {
    let log_dir = dirs::home_dir()
        .context("Could not determine home directory")?
        .join(".textkit");

    std::fs::create_dir_all(&log_dir)
        .context("Failed to create log directory")?;

    let log_file = log_dir.join("debug.log");

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {} - {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?)
        .apply()
        .context("Failed to initialize logger")?;

    Ok(())
}

#[derive(Parser)]
#[command(name = "textkit")]
#[command(about = "HTML entity decoding, string facts and number formatting")]
#[command(version)]
struct Cli {
    /// Enable debug logging to file
    #[arg(short, long, global = true)]
    debug: bool,

    /// Settings file (defaults to <config dir>/textkit/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode HTML entities and show where replacements happened
    Decode {
        /// Text to decode, or "-" to read stdin
        text: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show facts about a piece of text
    Inspect {
        /// Text to inspect, or "-" to read stdin
        text: String,
    },

    /// Format a number with the configured separators
    Format {
        number: String,

        /// Maximum fraction digits
        #[arg(short = 'n', long, default_value_t = 2)]
        decimals: usize,

        /// Drop trailing zeros without grouping
        #[arg(long)]
        trim_zeros: bool,
    },

    /// Show the styled label demo
    Demo {
        /// Seconds before the last label changes (overrides settings)
        #[arg(long)]
        delay: Option<f64>,

        /// Print HTML instead of terminal text
        #[arg(long)]
        html: bool,
    },
}

fn read_text(text: String) -> Result<String> {
    if text != "-" {
        return Ok(text);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn print_decoded(text: &str, json: bool) -> Result<()> {
    let decoded = decode_html_entities(text);

    if json {
        let spans: Vec<[usize; 2]> = decoded.spans.iter().map(|s| [s.start, s.end]).collect();
        let value = serde_json::json!({ "text": decoded.text, "spans": spans });
        println!("{}", serde_json::to_string(&value).context("Failed to serialize result")?);
        return Ok(());
    }

    println!("{}", decoded.text);
    if decoded.spans.is_empty() {
        println!("spans: none");
    } else {
        let spans: Vec<String> = decoded
            .spans
            .iter()
            .map(|s| format!("[{}, {})", s.start, s.end))
            .collect();
        println!("spans: {}", spans.join(" "));
    }
    Ok(())
}

fn print_inspection(text: &str) {
    println!("length: {}", text.length());
    println!("words: {}", text.count_of_words());
    println!("paragraphs: {}", text.count_of_paragraphs());
    println!("email: {}", text.is_email());
    println!("number: {}", text.is_number());
    println!("emoji: {}", text.contains_emoji());
    println!("base64: {}", text.base64());
    println!("decoded: {}", text.decoded_html_entities());
    for url in text.extract_urls() {
        println!("url: {}", url);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        setup_debug_logging()?;
        log::info!("Debug logging enabled");
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Decode { text, json } => {
            let text = read_text(text)?;
            print_decoded(&text, json)?;
        }
        Command::Inspect { text } => {
            let text = read_text(text)?;
            print_inspection(&text);
        }
        Command::Format { number, decimals, trim_zeros } => {
            let format = &settings.number_format;
            let formatted = if trim_zeros {
                format.removed_trailing_zeros(&number, decimals)
            } else {
                format.format_number(&number, decimals)
            };
            match formatted {
                Some(formatted) => println!("{}", formatted),
                None => anyhow::bail!("Not a number: {}", number),
            }
        }
        Command::Demo { delay, html } => {
            let mut settings = settings;
            if let Some(delay) = delay {
                settings.demo_delay_secs = delay;
            }
            let options = DemoOptions {
                delay: settings.demo_delay(),
                transition: settings.transition(),
                html,
                color: color_enabled(settings.color),
            };
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_demo(&mut out, &options).await.context("Failed to run demo")?;
        }
    }

    Ok(())
}
