use clap::Parser;
use metar_winds::cli::{self, Args, OutputFormat};
use metar_winds::{BulletinProcessor, WindsError};
use std::process;
use std::time::Instant;

fn main() {
    // Parse command line arguments
    let args = Args::parse();
    cli::setup_logging(&args);

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let processor = BulletinProcessor::with_config(args.input_dir.clone(), args.to_config())
        .unwrap_or_else(|error| exit_with(error));

    let start = Instant::now();
    let result = runtime.block_on(async {
        tokio::select! {
            result = processor.process() => result,
            Ok(()) = tokio::signal::ctrl_c() => {
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(WindsError::interrupted("Processing interrupted by user"))
            }
        }
    });
    let elapsed = start.elapsed();

    let report = result.unwrap_or_else(|error| exit_with(error));

    match args.format {
        OutputFormat::Text => print!("{}", cli::render_text(&report, elapsed)),
        OutputFormat::Json => match cli::render_json(&report) {
            Ok(json) => println!("{}", json),
            Err(error) => {
                eprintln!("Error: failed to serialize report: {}", error);
                process::exit(1);
            }
        },
    }
}

/// Print the error with its source chain to stderr and exit with an error code
fn exit_with(error: WindsError) -> ! {
    eprintln!("Error: {:#}", anyhow::Error::from(error));
    process::exit(1);
}
