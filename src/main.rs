use std::error::Error;
use std::io::{self, Read};

use newsprep::{parse_articles, process_batch};
use tracing_subscriber::EnvFilter;

/// Reads article JSON (one object or an array) from the file named by the
/// first argument, or from stdin, and prints the outcomes as a JSON array.
fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let input = match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(path)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let articles = parse_articles(&input)?;
    let outcomes = process_batch(articles);

    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(())
}
