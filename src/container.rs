//! Read the header and pixel grid from an IS2 container.

use std::{fs::File, io::{BufReader, Read}, path::Path};

use byteordered::ByteOrdered;
use ndarray::Array2;
use tracing::debug;

use crate::{
    error::{Is2Error, Result, Section},
    layout::ContainerLayout,
};

/// Read exactly `size` bytes from `src`.
///
/// Fails with [`Is2Error::ShortRead`] if the source ends
/// early, and [`Is2Error::Io`] on any other read failure.
/// The partially filled buffer is never returned.
pub fn read_blob<R: Read>(src: R, size: usize, section: Section) -> Result<Vec<u8>> {
    if size == 0 {
        return Err(Is2Error::Layout(format!("cannot read empty {}", section)));
    }

    let mut buf = Vec::with_capacity(size);
    src.take(size as u64).read_to_end(&mut buf)?;
    if buf.len() != size {
        return Err(Is2Error::ShortRead {
            section,
            expected: size,
            found: buf.len(),
        });
    }
    Ok(buf)
}

/// The opaque header of a container, kept as read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawHeader(Vec<u8>);

impl RawHeader {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for RawHeader {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Contents of a container: the header and the samples
/// as a `(height, width)` array in host byte order.
#[derive(Clone, Debug)]
pub struct RawImage {
    pub header: RawHeader,
    pub pixels: Array2<u16>,
}

impl RawImage {
    /// Read a container laid out as `layout` from `rdr`.
    /// Trailing bytes after the pixel grid are left unread.
    pub fn read_from<R: Read>(mut rdr: R, layout: &ContainerLayout) -> Result<Self> {
        let header = read_blob(&mut rdr, layout.header_len(), Section::Header)?;
        debug!(len = header.len(), "read header");

        let payload = read_blob(&mut rdr, layout.pixel_bytes(), Section::Pixels)?;
        debug!(len = payload.len(), "read pixel data");

        Ok(RawImage {
            header: RawHeader(header),
            pixels: pixels_from_be_bytes(&payload, layout)?,
        })
    }

    pub fn from_path<P: AsRef<Path>>(path: P, layout: &ContainerLayout) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::read_from(BufReader::new(file), layout)
    }
}

/// Decode a big-endian sample payload into a host-order
/// array of shape `layout.dim()`.
pub fn pixels_from_be_bytes(payload: &[u8], layout: &ContainerLayout) -> Result<Array2<u16>> {
    if payload.len() != layout.pixel_bytes() {
        return Err(Is2Error::Layout(format!(
            "pixel payload size mismatch: expected {} bytes, found {}",
            layout.pixel_bytes(),
            payload.len()
        )));
    }

    let mut rdr = ByteOrdered::be(payload);
    let mut samples = Vec::with_capacity(layout.pixel_count());
    for _ in 0..layout.pixel_count() {
        samples.push(rdr.read_u16()?);
    }

    Array2::from_shape_vec(layout.dim(), samples)
        .map_err(|e| Is2Error::Layout(format!("pixel grid shape: {}", e)))
}
