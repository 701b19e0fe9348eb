use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::{get_config_path, save_config, Config, ThemeMode};
use crate::judge::Judge;
use crate::scoring::{default_metric_configs, MetricConfig, MAX_WEIGHT, MIN_WEIGHT};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Accept a 1-based menu number or a judge name.
fn parse_judge_choice(input: &str) -> Result<Judge, String> {
    if let Ok(n) = input.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| Judge::ALL.get(i).copied())
            .ok_or_else(|| format!("pick a number between 1 and {}", Judge::ALL.len()));
    }
    Judge::from_str(input)
}

fn parse_theme_choice(input: &str) -> Result<ThemeMode, String> {
    match input.to_lowercase().as_str() {
        "auto" => Ok(ThemeMode::Auto),
        "dark" => Ok(ThemeMode::Dark),
        "light" => Ok(ThemeMode::Light),
        other => Err(format!("unknown theme '{}' (auto, dark, light)", other)),
    }
}

fn parse_weight(input: &str) -> Result<f64, String> {
    let weight: f64 = input
        .parse()
        .map_err(|_| format!("'{}' is not a number", input))?;
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(format!("must be between {} and {}", MIN_WEIGHT, MAX_WEIGHT));
    }
    Ok(weight)
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("ADAMS Configuration Wizard");
    println!("==========================");
    println!();

    // 1. Judge
    typewriter("The LLM judge is the model that scores your dataset during analysis.");
    for (i, judge) in Judge::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, judge);
    }
    let judge = loop {
        let input = prompt_with_default("LLM judge", Judge::default().label())?;
        match parse_judge_choice(&input) {
            Ok(judge) => break judge,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 2. Stage delay
    println!();
    typewriter("The analysis walks through six stages. The stage delay is the pause between them.");
    let stage_delay = loop {
        let input = prompt_with_default("Stage delay", "800ms")?;
        match humantime::parse_duration(&input) {
            Ok(_) => break input,
            Err(e) => println!("  Invalid duration: {}. Try again.", e),
        }
    };

    // 3. Export directory
    println!();
    typewriter("Exports (configuration, reports, comments, dataset files) are written to one directory.");
    let export_dir = prompt_with_default("Export directory", ".")?;

    // 4. Theme
    println!();
    let theme = loop {
        let input = prompt_with_default("Dashboard theme (auto, dark, light)", "auto")?;
        match parse_theme_choice(&input) {
            Ok(theme) => break theme,
            Err(e) => println!("  Invalid: {}. Try again.", e),
        }
    };

    // 5. Metric weights
    println!();
    typewriter("Each of the 15 metrics has a default weight between 0 and 1.");
    let customize = prompt_yes_no("Customize default metric weights? (n keeps the built-in set)", false)?;
    let metrics: Option<Vec<MetricConfig>> = if customize {
        let mut metrics = default_metric_configs();
        for metric in metrics.iter_mut() {
            metric.weight = loop {
                let input = prompt_with_default(
                    &format!("  {} (score {:.1})", metric.name, metric.score),
                    &format!("{}", metric.weight),
                )?;
                match parse_weight(&input) {
                    Ok(weight) => break weight,
                    Err(e) => println!("  Invalid: {}. Try again.", e),
                }
            };
        }
        Some(metrics)
    } else {
        None
    };

    // 6. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 7. Write config
    let config = Config {
        judge,
        stage_delay: Some(stage_delay),
        export_dir: Some(export_dir),
        theme,
        metrics,
    };
    save_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `adams` to open the dashboard.");

    Ok(())
}
