//! Write a pixel grid as a 16-bit grayscale PNG.

use std::{
    convert::TryFrom,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use byteordered::ByteOrdered;
use ndarray::Array2;
use png::EncodingError;
use tracing::debug;

use crate::error::{Is2Error, Result};

/// Encode `pixels` (host order, shape `(height, width)`)
/// into `writer` as a non-interlaced grayscale PNG with 16
/// bits per sample, one row at a time.
pub fn write_png<W: Write>(writer: W, pixels: &Array2<u16>) -> Result<()> {
    let (ht, wid) = pixels.dim();
    if ht == 0 || wid == 0 {
        return Err(Is2Error::Layout(format!("cannot encode empty image: {}x{}", wid, ht)));
    }
    let width = u32::try_from(wid).map_err(|_| Is2Error::Layout(format!("width too large: {}", wid)))?;
    let height = u32::try_from(ht).map_err(|_| Is2Error::Layout(format!("height too large: {}", ht)))?;

    let mut png_writer = {
        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(png::ColorType::Grayscale);
        encoder.set_depth(png::BitDepth::Sixteen);
        encoder.write_header()?
    };

    // PNG stores 16-bit samples big-endian.
    let mut png_streamer = ByteOrdered::be(png_writer.stream_writer());
    for row in pixels.rows() {
        for &val in row.iter() {
            png_streamer.write_u16(val).map_err(EncodingError::from)?;
        }
    }
    png_streamer.into_inner().finish()?;

    debug!(width, height, "encoded png");
    Ok(())
}

/// Create (or truncate) `path` and encode `pixels` into it.
pub fn save_png<P: AsRef<Path>>(path: P, pixels: &Array2<u16>) -> Result<()> {
    let file = File::create(path.as_ref()).map_err(EncodingError::from)?;
    let mut writer = BufWriter::new(file);
    write_png(&mut writer, pixels)?;
    writer.flush().map_err(EncodingError::from)?;
    Ok(())
}

/// Decode a PNG without any transformations, returning its
/// header and the 16-bit samples in host order.
#[cfg(test)]
pub(crate) fn decode_png(bytes: &[u8]) -> anyhow::Result<(png::OutputInfo, Vec<u16>)> {
    let mut decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let (info, mut reader) = decoder.read_info()?;
    let mut buf = vec![0; info.buffer_size()];
    reader.next_frame(&mut buf)?;
    let samples = buf
        .chunks_exact(2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .collect();
    Ok((info, samples))
}
