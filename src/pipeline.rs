//! Run the whole conversion: read, scan, normalize,
//! encode.

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use ndarray::Array2;
use tracing::{debug, info_span};

use crate::{
    container::{RawHeader, RawImage},
    encode::{save_png, write_png},
    error::Result,
    extrema::{scan, Extrema},
    layout::ContainerLayout,
    normalize::normalize,
};

/// Outcome of a successful conversion.
#[derive(Clone, Debug)]
pub struct Conversion {
    /// The header, unchanged.
    pub header: RawHeader,
    /// Extrema of the input samples, before normalization.
    pub extrema: Extrema,
}

fn prepare<R: Read>(rdr: R, layout: &ContainerLayout) -> Result<(RawHeader, Extrema, Array2<u16>)> {
    let RawImage { header, pixels } = RawImage::read_from(rdr, layout)?;
    let extrema = scan(&pixels);
    debug!(min = extrema.min, max = extrema.max, "scanned pixels");
    Ok((header, extrema, normalize(pixels, extrema)))
}

/// Convert a container read from `rdr` into a PNG written
/// to `writer`. Nothing is written unless the container was
/// read completely.
pub fn convert<R: Read, W: Write>(rdr: R, writer: W, layout: &ContainerLayout) -> Result<Conversion> {
    let (header, extrema, pixels) = prepare(rdr, layout)?;
    write_png(writer, &pixels)?;
    Ok(Conversion { header, extrema })
}

/// Convert the container at `input` into a PNG at `output`.
///
/// The output file is only created once the input was read
/// and normalized, so a malformed input leaves no file
/// behind.
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    layout: &ContainerLayout,
) -> Result<Conversion> {
    let input = input.as_ref();
    let output = output.as_ref();
    let span = info_span!("convert", input = %input.display());
    let _guard = span.enter();

    let file = File::open(input)?;
    let (header, extrema, pixels) = prepare(BufReader::new(file), layout)?;
    save_png(output, &pixels)?;
    debug!(output = %output.display(), "wrote png");

    Ok(Conversion { header, extrema })
}
