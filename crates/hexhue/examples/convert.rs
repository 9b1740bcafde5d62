use std::process::ExitCode;

use hexhue::opt::Options;
use hexhue::{ColorSpace, Converter};

const USAGE: &str = "usage: convert <color> [<target>]

Converts the color to the target notation, which is one of hex, rgb, rgba,
hsl, cmyk, and hsv. Without target, converts the color to all notations.
Set RUST_LOG=debug to see why a color string is rejected.";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, target) = match args.as_slice() {
        [input] => (input, None),
        [input, target] => (input, Some(target)),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    let converter = Converter::new(Options::builder().spaced_lists(true).build());
    let result = match target {
        Some(target) => target
            .parse::<ColorSpace>()
            .and_then(|target| converter.convert(input, None, target))
            .map(|output| println!("{}", output)),
        None => converter.convert_all(input, None).map(|values| {
            println!("{} is {}\n", input, values.source());
            for (space, output) in values.iter() {
                println!("    {:<5} {}", space, output);
            }
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}
