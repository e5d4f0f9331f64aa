use anyhow::Result;
use clap::value_t_or_exit;
use std::path::PathBuf;
use is2png::{arg, args_parser, opt};

pub struct Args {
    pub input: PathBuf,
    pub output: PathBuf,
    pub hexdump: bool,
    pub quiet: bool,
    pub verbosity: u64,
}

impl Args {
    pub fn from_cmd_line() -> Result<Args> {
        let matches = args_parser!("is2png")
            .about("Convert a raw thermal capture (.IS2) to a 16-bit grayscale PNG.")
            .arg(
                opt!("hexdump")
                    .short("x")
                    .takes_value(false)
                    .help("Print a hex dump of the container header"),
            )
            .arg(
                opt!("quiet")
                    .short("q")
                    .takes_value(false)
                    .help("Do not print the pixel value range"),
            )
            .arg(
                opt!("verbose")
                    .short("v")
                    .takes_value(false)
                    .multiple(true)
                    .help("Log progress to stderr (repeat for more detail)"),
            )
            .arg(
                arg!("input")
                    .required(true)
                    .index(1)
                    .help("IS2 capture to read"),
            )
            .arg(
                arg!("output")
                    .required(true)
                    .index(2)
                    .help("PNG file to write (overwritten if present)"),
            )
            .get_matches();

        let input = value_t_or_exit!(matches, "input", PathBuf);
        let output = value_t_or_exit!(matches, "output", PathBuf);
        let hexdump = matches.is_present("hexdump");
        let quiet = matches.is_present("quiet");
        let verbosity = matches.occurrences_of("verbose");

        Ok(Args {
            input,
            output,
            hexdump,
            quiet,
            verbosity,
        })
    }
}
