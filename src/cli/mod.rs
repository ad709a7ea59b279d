//! Command-line interface.

mod prompts;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use rustyline::DefaultEditor;

use crate::config::{self, LlmConfig};
use crate::estimate::{JobEstimate, MaterialCatalog, load_price_list};
use crate::infer::{self, QuantityInference};
use crate::llm::create_llm_provider;
use crate::report;

#[derive(Parser, Debug)]
#[command(
    name = "bidsaw",
    version,
    about = "Job cost estimator for small construction and service work"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactively collect quantities and labor, then print an estimate
    Estimate {
        /// Price list overriding the builtin catalog (name,price rows)
        #[arg(long, value_name = "FILE")]
        prices: Option<PathBuf>,

        /// Write the summary to a file after printing it
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },

    /// Infer quantities from a job description with the configured model
    Infer {
        /// Job description text
        #[arg(long, conflicts_with = "file")]
        description: Option<String>,

        /// Read the description from a scope document (.txt or .md)
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Labor rate per hour applied to inferred labor hours
        #[arg(long, value_name = "RATE", default_value = "0")]
        labor_rate: Decimal,

        /// Overhead percentage (10 means 10%)
        #[arg(long, value_name = "PCT", default_value = "0")]
        overhead: Decimal,

        /// Profit margin percentage
        #[arg(long, value_name = "PCT", default_value = "0")]
        profit: Decimal,

        /// Price list overriding the builtin catalog (name,price rows)
        #[arg(long, value_name = "FILE")]
        prices: Option<PathBuf>,

        /// Write the summary to a file after printing it
        #[arg(long, value_name = "FILE")]
        export: Option<PathBuf>,
    },

    /// Inspect the material catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List materials and their unit prices
    List {
        /// Show only materials starting with this prefix
        #[arg(short, long)]
        filter: Option<String>,

        /// Price list overriding the builtin catalog
        #[arg(long, value_name = "FILE")]
        prices: Option<PathBuf>,
    },

    /// Show the default price-list override path
    Path,
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Estimate { prices, export } => {
            run_estimate(prices.as_deref(), export.as_deref())
        }
        Command::Infer {
            description,
            file,
            labor_rate,
            overhead,
            profit,
            prices,
            export,
        } => {
            run_infer(
                description,
                file.as_deref(),
                labor_rate,
                overhead,
                profit,
                prices.as_deref(),
                export.as_deref(),
            )
            .await
        }
        Command::Catalog { command } => match command {
            CatalogCommand::List { filter, prices } => {
                run_catalog_list(filter, prices.as_deref())
            }
            CatalogCommand::Path => {
                println!("{}", config::default_price_list_path().display());
                Ok(())
            }
        },
    }
}

/// The interactive prompt-loop flow.
fn run_estimate(prices: Option<&Path>, export: Option<&Path>) -> anyhow::Result<()> {
    let catalog = load_catalog(prices)?;
    let mut editor = DefaultEditor::new()?;

    println!("Welcome to bidsaw!");
    prompts::print_header("MATERIAL QUANTITIES");
    let mut quantities = Vec::with_capacity(catalog.len());
    for (name, _) in catalog.entries() {
        let quantity = prompts::decimal_input(
            &mut editor,
            &format!("Enter quantity for {name} (or press Enter to skip): "),
            Decimal::ZERO,
        )?;
        quantities.push((name, quantity));
    }

    prompts::print_header("LABOR");
    let hours = prompts::decimal_input(&mut editor, "Enter total labor hours needed: ", Decimal::ZERO)?;
    let rate = prompts::decimal_input(
        &mut editor,
        "Enter labor rate per hour (in USD): ",
        Decimal::ZERO,
    )?;

    prompts::print_header("OVERHEAD & PROFIT");
    let overhead = prompts::decimal_input(
        &mut editor,
        "Enter overhead percentage (e.g., 10 for 10%): ",
        Decimal::ZERO,
    )?;
    let profit = prompts::decimal_input(
        &mut editor,
        "Enter profit margin percentage (e.g., 30 for 30% profit): ",
        Decimal::ZERO,
    )?;

    let estimate = JobEstimate::new()
        .with_materials(catalog.resolve(&quantities))
        .with_labor(hours, rate)
        .with_overhead_pct(overhead)
        .with_profit_pct(profit);

    print_and_export(&estimate, export)
}

/// The model-driven flow.
async fn run_infer(
    description: Option<String>,
    file: Option<&Path>,
    labor_rate: Decimal,
    overhead: Decimal,
    profit: Decimal,
    prices: Option<&Path>,
    export: Option<&Path>,
) -> anyhow::Result<()> {
    let description = match (description, file) {
        (Some(text), _) => text,
        (None, Some(path)) => infer::load_description(path)?,
        (None, None) => anyhow::bail!("provide a job description via --description or --file"),
    };

    let catalog = load_catalog(prices)?;
    let provider = create_llm_provider(&LlmConfig::from_env())?;
    let inferred = QuantityInference::new(provider)
        .infer(&description, &catalog)
        .await?;

    if !inferred.skipped.is_empty() {
        println!(
            "Skipped {} unparseable response line(s):",
            inferred.skipped.len()
        );
        for line in &inferred.skipped {
            println!("  line {}: {}", line.line, line.content);
        }
        println!();
    }

    if inferred.quantities.is_empty() && inferred.labor_hours.is_none() {
        anyhow::bail!(
            "the model response contained no usable quantities:\n{}",
            inferred.raw_response.trim()
        );
    }

    let quantities: Vec<(String, Decimal)> = inferred
        .quantities
        .iter()
        .map(|entry| (entry.name.clone(), entry.quantity))
        .collect();

    let estimate = JobEstimate::new()
        .with_materials(catalog.resolve(&quantities))
        .with_labor(inferred.labor_hours.unwrap_or_default(), labor_rate)
        .with_overhead_pct(overhead)
        .with_profit_pct(profit);

    print_and_export(&estimate, export)
}

/// Print the summary first, then attempt export: an export failure must
/// never take the numbers down with it.
fn print_and_export(estimate: &JobEstimate, export: Option<&Path>) -> anyhow::Result<()> {
    let result = estimate.compute();
    println!("\n{}", report::render(estimate, &result));

    if let Some(path) = export {
        report::export_to_file(path, estimate, &result)
            .context("the estimate above was computed but not exported")?;
        println!("Saved estimate to {}", path.display());
    }

    Ok(())
}

/// List catalog entries with aligned columns.
fn run_catalog_list(filter: Option<String>, prices: Option<&Path>) -> anyhow::Result<()> {
    let catalog = load_catalog(prices)?;
    let entries = catalog.entries();

    let max_name_len = entries.iter().map(|(name, _)| name.len()).max().unwrap_or(0);

    println!("Materials:");
    println!();

    for (name, price) in entries {
        if let Some(ref prefix) = filter {
            if !name.starts_with(&prefix.trim().to_lowercase()) {
                continue;
            }
        }
        println!("  {:width$}  ${:.2}", name, price, width = max_name_len);
    }

    Ok(())
}

/// Builtin catalog plus any override: an explicit `--prices` file, or the
/// default override location when one exists.
fn load_catalog(prices: Option<&Path>) -> anyhow::Result<MaterialCatalog> {
    let mut catalog = MaterialCatalog::builtin();

    match prices {
        Some(path) => {
            let custom = load_price_list(path)
                .with_context(|| format!("loading price list {}", path.display()))?;
            catalog.apply_override(&custom);
        }
        None => {
            let default_path = config::default_price_list_path();
            if default_path.exists() {
                let custom = load_price_list(&default_path)
                    .with_context(|| format!("loading price list {}", default_path.display()))?;
                catalog.apply_override(&custom);
                tracing::info!(path = %default_path.display(), "applied price-list override");
            }
        }
    }

    Ok(catalog)
}
