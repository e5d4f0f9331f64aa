mod args;

use anyhow::{ensure, Result};
use rayon::iter::ParallelIterator;
use serde_derive::*;

use is2png::{
    cli::{convert_paths_par, init_logging, ConvertedImage},
    ContainerLayout,
};

use args::Args;

#[derive(Serialize, Debug)]
struct Report {
    images: Vec<ConvertedImage>,
    count: usize,
}

fn main() -> Result<()> {
    let args = Args::from_cmd_line()?;
    init_logging(args.verbosity);

    let Args {
        paths,
        output,
        json,
        ..
    } = args;
    ensure!(
        output.is_dir(),
        "output directory does not exist: {}",
        output.display()
    );

    let mut images = convert_paths_par(paths, &output, ContainerLayout::IS2)?
        .collect::<Result<Vec<_>>>()?;
    images.sort_by(|a, b| a.path.cmp(&b.path));

    let count = images.len();
    if json {
        serde_json::to_writer(std::io::stdout().lock(), &Report { images, count })?;
        println!();
    }

    eprintln!("Processed {} images", count);
    Ok(())
}
