//! Classify a single emotional expression from the command line.
//!
//! Usage: codex-cli "I feel so happy and excited about this!"
//! With no argument, reads one line from stdin. Prints the stored-record
//! JSON for a match, or a no-match notice.

use anyhow::Result;
use std::io::{self, BufRead, Write};

use emotion_codex::{ClassificationOutcome, Classifier};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let input = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            print!("expression> ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        }
    };

    let classifier = Classifier::with_builtin();
    match classifier.classify(&input)? {
        ClassificationOutcome::Match(result) => {
            let stored = result.to_stored();
            println!("{}", serde_json::to_string_pretty(&stored)?);
        }
        ClassificationOutcome::NoMatch => {
            println!("no match: the expression did not clear the confidence floor");
        }
    }
    Ok(())
}
