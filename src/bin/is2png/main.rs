mod args;

use anyhow::{Context, Result};
use is2png::{cli::init_logging, convert_file, dump::HexDump, Conversion, ContainerLayout};
use tracing::info;

use args::Args;

fn main() -> Result<()> {
    let args = Args::from_cmd_line()?;
    init_logging(args.verbosity);

    info!("converting {} to {}", args.input.display(), args.output.display());
    let Conversion { header, extrema } =
        convert_file(&args.input, &args.output, &ContainerLayout::IS2).with_context(|| {
            format!(
                "could not convert {} to {}",
                args.input.display(),
                args.output.display()
            )
        })?;

    if args.hexdump {
        print!("{}", HexDump(header.as_bytes()));
    }
    if !args.quiet {
        println!("Minimal pixel value: 0x{:04x}", extrema.min);
        println!("Maximal pixel value: 0x{:04x}", extrema.max);
    }

    Ok(())
}
