//! Library to convert raw captures from Fluke thermal
//! cameras (`.IS2`) to 16-bit grayscale PNGs.
//!
//! An IS2 capture is a fixed-layout container: an opaque
//! header of [`HEADER_LEN`] bytes, followed by a
//! [`WIDTH`] x [`HEIGHT`] grid of unsigned 16-bit samples
//! stored row-major in big-endian order. The header layout
//! is not known, and is carried around as raw bytes.
//!
//! # Usage
//!
//! Conversion is a straight pipeline:
//!
//! 1. [Read](container::RawImage::read_from) the header and
//! the pixel grid from the container.
//! 2. [Scan](extrema::scan) the grid for its extrema.
//! 3. [Normalize](normalize::normalize) the samples so the
//! dimmest maps to `0` and the brightest to `65535`.
//! 4. [Encode](encode::write_png) the result as a
//! single-channel 16-bit PNG.
//!
//! ```rust
//! # fn test_compile() -> anyhow::Result<()> {
//! use is2png::{extrema, normalize, RawImage, ContainerLayout};
//!
//! let raw = RawImage::from_path("capture.is2", &ContainerLayout::IS2)?;
//! let range = extrema::scan(&raw.pixels);
//! let pixels = normalize::normalize(raw.pixels, range);
//! is2png::encode::save_png("capture.png", &pixels)?;
//! # Ok(())
//! # }
//! ```
//!
//! The whole sequence is also available as
//! [`convert_file`][pipeline::convert_file].
//!
//! None of the stages print to the console. Progress is
//! reported through [`tracing`] events, and the header can
//! be inspected with [`HexDump`][dump::HexDump].

pub mod container;
pub mod dump;
pub mod encode;
pub mod error;
pub mod extrema;
pub mod layout;
pub mod normalize;
pub mod pipeline;

#[cfg(feature = "cli")]
pub mod cli;

pub use crate::container::{RawHeader, RawImage};
pub use crate::error::{Is2Error, Result, Section};
pub use crate::extrema::Extrema;
pub use crate::layout::{ContainerLayout, HEADER_LEN, HEIGHT, WIDTH};
pub use crate::pipeline::{convert, convert_file, Conversion};
