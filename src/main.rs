use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Instant;

use adams::export::ExportKind;
use adams::judge::Judge;
use adams::session::{accept_upload, CommentMode, Session};

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_EXPORT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive dashboard (default if no subcommand)
    Dashboard,
    /// Run the analysis on a dataset file and print the results
    Analyze {
        /// Dataset file (csv, json or xlsx)
        file: PathBuf,
    },
    /// Print the metric table, final score and impact analysis
    Score {
        /// Override a weight, e.g. --weight "Coherence=0.5" (repeatable)
        #[arg(short, long = "weight", value_name = "NAME=VALUE", value_parser = parse_weight_arg)]
        weights: Vec<(String, f64)>,

        /// How many top-weighted metrics to list
        #[arg(long, default_value_t = 3)]
        top: usize,
    },
    /// Print the sample dataset and its statistics
    Dataset,
    /// Write an export file
    Export {
        #[arg(value_enum)]
        kind: ExportKind,

        /// Directory to write into (defaults to export_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override a weight before exporting (repeatable)
        #[arg(short, long = "weight", value_name = "NAME=VALUE", value_parser = parse_weight_arg)]
        weights: Vec<(String, f64)>,

        /// Save this reviewer comment before exporting
        #[arg(long)]
        comment: Option<String>,

        /// Comment mode: Draft, Review, Final, or any custom name
        #[arg(long, default_value = "Draft")]
        mode: String,

        /// Treat this dataset file as processed (skips the animation)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "adams")]
#[command(about = "Adaptive Domain-Aware Metric Selection for RAG evaluation", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/adams/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// LLM judge (overrides the config file)
    #[arg(short, long, global = true, value_parser = Judge::from_str)]
    judge: Option<Judge>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Parse `NAME=VALUE`. Splits on the last `=` so names may contain one.
fn parse_weight_arg(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("metric name must not be empty".to_string());
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value.trim()))?;
    Ok((name.to_string(), value))
}

fn apply_weights(session: &mut Session, weights: &[(String, f64)]) {
    for (name, weight) in weights {
        if let Err(e) = session.set_weight(name, *weight) {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_USAGE);
        }
        adams::verbose_eprintln!("Set {} weight to {}", name, weight);
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    adams::stderr_buffer::set_verbose(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Dashboard);
    let start_time = Instant::now();

    if let Commands::Init = command {
        let path = cli.config.map(PathBuf::from);
        if let Err(e) = adams::config::init::run_init_wizard(path) {
            eprintln!("Init failed: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match adams::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = adams::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let defaults = match adams::config::effective_defaults(&config) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let judge = cli.judge.unwrap_or(config.judge);
    adams::verbose_eprintln!(
        "Loaded {} metrics, judge {}, stage delay {}",
        defaults.len(),
        judge,
        humantime::format_duration(config.stage_delay())
    );

    let mut session = Session::new(defaults, judge);
    let use_colors = adams::output::should_use_colors();

    match command {
        Commands::Dashboard => {
            let theme = adams::tui::resolve_theme(config.theme);
            let app = adams::tui::App::new(session, config, theme);
            if let Err(e) = adams::tui::run_tui(app).await {
                eprintln!("Dashboard error: {}", e);
                std::process::exit(EXIT_USAGE);
            }
        }
        Commands::Analyze { file } => {
            let upload = match accept_upload(&file) {
                Ok(u) => u,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(EXIT_USAGE);
                }
            };
            println!("File uploaded: {} (LLM judge: {})", upload.file_name(), judge);
            session.upload = Some(upload);

            adams::session::pipeline::play(judge, config.stage_delay(), |stage, progress| {
                println!(
                    "{}",
                    adams::output::format_progress(stage, progress, use_colors)
                );
            })
            .await;
            session.complete_processing();

            println!();
            println!(
                "{}",
                adams::output::format_metric_grid(&session.metrics, use_colors)
            );
            if let Some(stats) = session
                .dataset
                .as_deref()
                .and_then(adams::dataset::DatasetStats::compute)
            {
                println!();
                println!("{}", adams::output::format_stats(&stats));
            }
        }
        Commands::Score { weights, top } => {
            apply_weights(&mut session, &weights);

            println!(
                "{}",
                adams::output::format_metric_table(&session.metrics, use_colors)
            );
            println!();
            println!(
                "{}",
                adams::output::format_aggregate(&session.aggregate(), use_colors)
            );
            println!(
                "{}",
                adams::output::format_impact(&session.impact(), use_colors)
            );
            if top > 0 {
                println!();
                println!("Top {} by weight:", top);
                println!(
                    "{}",
                    adams::output::format_top(&adams::scoring::top_k(&session.metrics, top))
                );
            }
        }
        Commands::Dataset => {
            let records = adams::dataset::sample_dataset();
            println!("{}", adams::output::format_dataset(&records, use_colors));
            if let Some(stats) = adams::dataset::DatasetStats::compute(&records) {
                println!();
                println!("{}", adams::output::format_stats(&stats));
            }
        }
        Commands::Export {
            kind,
            output,
            weights,
            comment,
            mode,
            dataset,
        } => {
            apply_weights(&mut session, &weights);
            let now = Local::now().naive_local();

            if let Some(file) = dataset {
                match accept_upload(&file) {
                    Ok(upload) => {
                        session.upload = Some(upload);
                        session.complete_processing();
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(EXIT_USAGE);
                    }
                }
            }

            if let Some(text) = comment {
                session.save_comments(&text, &CommentMode::parse(&mode), now);
            }

            let rendered = match adams::export::render(kind, &session, now) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(EXIT_USAGE);
                }
            };

            let dir = output.unwrap_or_else(|| config.export_dir());
            match adams::export::write_export(&dir, &rendered) {
                Ok(path) => println!("Saved {}: {}", kind.label(), path.display()),
                Err(e) => {
                    eprintln!("Export failed: {:#}", e);
                    std::process::exit(EXIT_EXPORT);
                }
            }
        }
        // Handled before the config is loaded
        Commands::Init => {}
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}
