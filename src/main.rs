use log::{error, info};
use std::io::{self, Read};
use ticker_sentiment::{
    analyze_sentiment, count_mentions, generate_report, render_sentiment_details, sort_results,
};

const USAGE: &str = "Usage: ticker-sentiment-cli [report [--csv] | mentions | sentiment] < thread.txt";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Report,
    Mentions,
    Sentiment,
}

#[derive(Debug, PartialEq)]
enum Command {
    Run { mode: Mode, csv_output: bool },
    Help,
}

/// Parses the arguments after the program name.
///
/// `--csv` only applies to `report`; combining it with another mode is an error.
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, String> {
    let mut mode = Mode::Report;
    let mut csv_output = false;

    for arg in args {
        match arg.as_str() {
            "report" => mode = Mode::Report,
            "mentions" => mode = Mode::Mentions,
            "sentiment" => mode = Mode::Sentiment,
            "--csv" => csv_output = true,
            "-h" | "--help" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    if csv_output && mode != Mode::Report {
        return Err("--csv is only supported in report mode".to_string());
    }

    Ok(Command::Run { mode, csv_output })
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    let (mode, csv_output) = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run { mode, csv_output }) => (mode, csv_output),
        Ok(Command::Help) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    info!("Read {} bytes from stdin", input.len());

    let result = match mode {
        Mode::Report => generate_report(&input).and_then(|report| {
            if csv_output {
                report.write_csv(io::stdout())
            } else {
                print!("{}", report);
                Ok(())
            }
        }),
        Mode::Mentions => count_mentions(&input).map(|mention_counts| {
            println!("\nCompany/Ticker Mention Counts:");
            println!("{}", "-".repeat(30));
            for (ticker_symbol, frequency) in sort_results(&mention_counts) {
                if frequency > 0 {
                    println!("{}: {} mentions", ticker_symbol, frequency);
                }
            }
        }),
        Mode::Sentiment => analyze_sentiment(&input).map(|ticker_sentiments| {
            println!("\nSentiment Analysis Results:");
            println!("{}", "-".repeat(50));
            print!("{}", render_sentiment_details(&ticker_sentiments));
        }),
    };

    if let Err(e) = result {
        error!("Error analyzing thread: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_parse_args_defaults_to_report() {
        assert_eq!(
            parse(&[]),
            Ok(Command::Run {
                mode: Mode::Report,
                csv_output: false
            })
        );
        assert_eq!(
            parse(&["report", "--csv"]),
            Ok(Command::Run {
                mode: Mode::Report,
                csv_output: true
            })
        );
    }

    #[test]
    fn test_parse_args_rejects_csv_outside_report_mode() {
        assert!(parse(&["mentions", "--csv"]).is_err());
        assert!(parse(&["--csv", "sentiment"]).is_err());
    }

    #[test]
    fn test_parse_args_rejects_unknown_arguments() {
        assert_eq!(
            parse(&["--json"]),
            Err("Unknown argument: --json".to_string())
        );
        assert_eq!(parse(&["mentions", "--help"]), Ok(Command::Help));
    }
}
