use anyhow::{Context, Result};
use liquor_sales_gen::{
    catalog::{all_products, BRANCHES, EVENTS},
    cli::{Cli, Commands},
    writer::{write_csv, CSV_HEADER},
    ConsoleUi, DatasetGenerator, DatasetSummary, GeneratorConfig, SeededSampler, SilentUi, Ui,
};
use std::path::Path;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate {
            output,
            seed,
            start,
            end,
            quiet,
        } => {
            let generator = DatasetGenerator::new(GeneratorConfig { seed, start, end });

            if quiet {
                let summary = run_generate(&generator, &output, &mut SilentUi::new())?;
                println!("{}", summary);
            } else {
                println!("=== Liquor Store Sales Dataset Generator ===");
                let mut ui = ConsoleUi::new();
                let summary = run_generate(&generator, &output, &mut ui)?;
                ui.finish(&summary);
            }
        }

        Commands::Catalog => {
            println!("Catalog products:\n");
            for product in all_products() {
                println!(
                    "  {:<16} {:<40} {:>8.2}",
                    product.category.as_str(),
                    product.name,
                    product.base_price
                );
            }
        }

        Commands::Branches => {
            println!("Branches:\n");
            for branch in BRANCHES {
                println!("  {:>2}  {}", branch.id, branch.zone);
            }
        }

        Commands::Events => {
            println!("Special events:\n");
            for event in EVENTS {
                let dates: Vec<String> = event
                    .occurrences
                    .iter()
                    .map(|(m, d)| format!("{:02}-{:02}", m, d))
                    .collect();
                println!("  {:<14} {}", event.name, dates.join(", "));
            }
        }
    }

    Ok(())
}

/// Generate, write and summarize; returns the printable summary
fn run_generate(
    generator: &DatasetGenerator,
    output: &Path,
    ui: &mut impl Ui,
) -> Result<String> {
    let start = Instant::now();
    let mut sampler = SeededSampler::new(generator.config().seed);

    let lines = generator
        .run(&mut sampler, ui)
        .context("Failed to generate dataset")?;
    let row_count = write_csv(&lines, output, ui)
        .with_context(|| format!("Failed to write dataset to {:?}", output))?;

    let summary = DatasetSummary::from_lines(&lines);
    Ok(format!(
        "{}\n\nSaved {:?}: {} rows x {} columns in {:.1}s",
        summary,
        output,
        row_count,
        CSV_HEADER.len(),
        start.elapsed().as_secs_f64()
    ))
}
