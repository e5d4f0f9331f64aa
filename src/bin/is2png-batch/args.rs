use anyhow::Result;
use clap::value_t_or_exit;
use std::path::PathBuf;
use is2png::{arg, args_parser, opt};

pub struct Args {
    pub paths: Vec<PathBuf>,
    pub output: PathBuf,
    pub json: bool,
    pub verbosity: u64,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = args_parser!("is2png-batch")
            .about("Convert many raw thermal captures (.IS2) to 16-bit grayscale PNGs.")
            .arg(
                opt!("output")
                    .short("o")
                    .required(true)
                    .help("Directory to write the PNGs to"),
            )
            .arg(
                opt!("json")
                    .short("j")
                    .takes_value(false)
                    .help("Print a JSON report of the pixel value ranges to stdout"),
            )
            .arg(
                opt!("verbose")
                    .short("v")
                    .takes_value(false)
                    .multiple(true)
                    .help("Log progress to stderr (repeat for more detail)"),
            )
            .arg(
                arg!("paths")
                    .required(true)
                    .multiple(true)
                    .help("IS2 captures to convert"),
            )
            .get_matches();

        let paths = matches
            .values_of("paths")
            .unwrap()
            .map(|f| f.into())
            .collect();
        let output = value_t_or_exit!(matches, "output", PathBuf);
        let json = matches.is_present("json");
        let verbosity = matches.occurrences_of("verbose");

        Ok(Args {
            paths,
            output,
            json,
            verbosity,
        })
    }
}
