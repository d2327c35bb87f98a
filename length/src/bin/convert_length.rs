/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use clap::Parser;
use std::process;

use length::{Length, LengthError, LengthUnit};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// SmartM Length Converter
///
/// Parses human-readable lengths (eg. "7 km", "500mm") and prints
/// them, optionally converted to another unit.
struct Args {
    #[clap(long, short)]
    /// Convert the result(s) to this unit.
    to: Option<LengthUnit>,
    #[clap(long, short)]
    /// Add all lengths together and print the total.
    sum: bool,
    #[clap(long, short)]
    /// Output a JSON representation.
    json: bool,
    /// Increase verbosity (can be repeated).
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// The lengths to parse.
    length: Vec<String>,
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Debug,
                2.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    match convert(&args) {
        Ok(lengths) => {
            for length in lengths {
                match args.json {
                    false => println!("{}", length),
                    true => println!(
                        "{}",
                        serde_json::json!({
                            "value": length.value(),
                            "unit": length.unit(),
                        })
                    ),
                }
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1)
        }
    }
}

fn convert(args: &Args) -> Result<Vec<Length>, LengthError> {
    let mut lengths = args
        .length
        .iter()
        .map(|s| Length::parse(s))
        .collect::<Result<Vec<Length>, LengthError>>()?;

    if args.sum {
        let total = lengths.iter().fold(None, |acc: Option<Length>, l| {
            Some(match acc {
                Some(acc) => &acc + l,
                None => *l,
            })
        });
        lengths = total.into_iter().collect();
    }

    if let Some(unit) = args.to {
        for length in &mut lengths {
            length.convert_to(unit)?;
        }
    }

    log::debug!("converted {} length(s)", lengths.len());
    Ok(lengths)
}
