use std::io::BufRead;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clc_resolver::{config, infrastructure};

/// Codes from the command line, or one per line from stdin when none are given
fn read_inputs() -> Vec<String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        return args;
    }

    std::io::stdin()
        .lock()
        .lines()
        .map_while(Result::ok)
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "clc_resolver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    let parser =
        infrastructure::shared_parser(&config).expect("Failed to load CLC taxonomy");

    for input in read_inputs() {
        println!("\n===== {} =====", input);

        for (segment, record) in parser.describe_all(&input) {
            println!("> {} :", segment);
            match record {
                Some(record) => match serde_json::to_string_pretty(&record) {
                    Ok(json) => println!("{}", json),
                    Err(e) => tracing::error!("Failed to serialize record: {}", e),
                },
                None => println!("(no classification resolved)"),
            }
        }
    }
}
