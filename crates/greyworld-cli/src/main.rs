use clap::{Parser, Subcommand};
use greyworld_cli::{determine_output_path, expand_inputs};
use greyworld_core::{config, CorrectOptions};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Parser)]
#[command(name = "greyworld")]
#[command(version, about = "Illuminant estimation and correction for images", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Correct image(s) toward a neutral illuminant
    Correct {
        /// Input files or directories
        #[arg(value_name = "INPUTS")]
        inputs: Vec<PathBuf>,

        /// Output directory (default: next to each input)
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Display gamma undone before estimation
        #[arg(long, value_name = "FLOAT", default_value_t = config::DEFAULT_GAMMA)]
        gamma: f32,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        /// Enable debug output showing intermediate statistics
        #[arg(long)]
        debug: bool,
    },

    /// Estimate the illuminant of an image without correcting it
    Estimate {
        /// Input file
        input: PathBuf,

        /// Display gamma undone before estimation
        #[arg(long, value_name = "FLOAT", default_value_t = config::DEFAULT_GAMMA)]
        gamma: f32,

        /// Save the estimate as JSON
        #[arg(short, long, value_name = "FILE")]
        save: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Correct {
            inputs,
            out,
            gamma,
            threads,
            debug,
        } => cmd_correct(inputs, out, gamma, threads, debug),

        Commands::Estimate { input, gamma, save } => cmd_estimate(input, gamma, save),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_correct(
    inputs: Vec<PathBuf>,
    out: Option<PathBuf>,
    gamma: f32,
    threads: Option<usize>,
    debug: bool,
) -> Result<(), String> {
    if inputs.is_empty() {
        return Err("No input files specified".to_string());
    }

    config::set_verbose(debug);

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("Using {} threads for parallel processing", num_threads);
    }

    // Create the output directory up front so parallel workers never race on it
    if let Some(dir) = &out {
        if !dir.exists() {
            std::fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    let files = expand_inputs(&inputs)?;
    if files.is_empty() {
        return Err("No supported image files found".to_string());
    }

    let options = CorrectOptions { gamma, debug };
    println!(
        "Correcting {} file(s) with gamma {:.2}...\n",
        files.len(),
        gamma
    );

    // Progress tracking
    let processed_count = AtomicUsize::new(0);
    let total_files = files.len();

    // Process files in parallel
    let results: Vec<Result<PathBuf, String>> = files
        .par_iter()
        .map(|input| {
            let corrected =
                greyworld_core::correct(input.as_path(), &options).map_err(|e| e.to_string())?;

            let output_path = determine_output_path(input, &out)?;
            greyworld_core::exporters::export_png8(&corrected, &output_path)
                .map_err(|e| e.to_string())?;

            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            println!(
                "[{}/{}] Corrected: {} -> {}",
                count,
                total_files,
                input.display(),
                output_path.display()
            );

            Ok(output_path)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();

    for (input, result) in files.iter().zip(results.iter()) {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => errors.push((input.clone(), e.clone())),
        }
    }

    println!("\n========================================");
    println!("CORRECTION COMPLETE");
    println!("========================================");
    println!("  Successful: {}", success_count);
    println!("  Failed:     {}", errors.len());

    if !errors.is_empty() {
        println!("\nErrors:");
        for (path, error) in &errors {
            println!("  {}: {}", path.display(), error);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(format!("{} files failed to process", errors.len()))
    }
}

fn cmd_estimate(input: PathBuf, gamma: f32, save: Option<PathBuf>) -> Result<(), String> {
    println!("Estimating illuminant for {}...", input.display());

    let options = CorrectOptions {
        gamma,
        debug: false,
    };
    let estimate =
        greyworld_core::estimate_illuminant(input.as_path(), &options).map_err(|e| e.to_string())?;

    println!("\nIlluminant Estimate (gamma {:.2}):", gamma);
    println!(
        "  Raw (RGB):        [{:.6}, {:.6}, {:.6}]",
        estimate.raw[0], estimate.raw[1], estimate.raw[2]
    );
    println!(
        "  Normalized (RGB): [{:.6}, {:.6}, {:.6}]",
        estimate.normalized[0], estimate.normalized[1], estimate.normalized[2]
    );
    println!(
        "  Gains (RGB):      [{:.6}, {:.6}, {:.6}]",
        estimate.gains[0], estimate.gains[1], estimate.gains[2]
    );

    // Save if requested
    if let Some(save_path) = save {
        let json = serde_json::to_string_pretty(&estimate)
            .map_err(|e| format!("Failed to serialize estimate: {}", e))?;
        std::fs::write(&save_path, json)
            .map_err(|e| format!("Failed to write estimate file: {}", e))?;
        println!("\nEstimate saved to: {}", save_path.display());
    }

    Ok(())
}
