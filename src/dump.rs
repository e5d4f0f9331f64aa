//! Hex-dump of raw bytes, in the style of `hexdump`.

use std::fmt;

use itertools::Itertools;

const BYTES_PER_LINE: usize = 32;
const BYTES_PER_GROUP: usize = 4;

/// Width of the hex column of a full line: 32 hex pairs and
/// 7 group separators.
const HEX_WIDTH: usize = BYTES_PER_LINE * 2 + BYTES_PER_LINE / BYTES_PER_GROUP - 1;

/// Displays the wrapped bytes as lines of 32, hex pairs in
/// groups of 4, followed by the printable ASCII (`.` for
/// everything else). The hex column of a short last line is
/// padded to the full-line width, so the ASCII column always
/// starts at the same offset.
///
/// ```rust
/// use is2png::dump::HexDump;
///
/// let line = HexDump(b"FLK\x00").to_string();
/// assert!(line.starts_with("464c4b00 "));
/// assert!(line.ends_with(" FLK.\n"));
/// ```
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.0.chunks(BYTES_PER_LINE) {
            let hex = line
                .chunks(BYTES_PER_GROUP)
                .map(|group| group.iter().map(|b| format!("{:02x}", b)).join(""))
                .join(" ");
            let text: String = line
                .iter()
                .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
                .collect();
            writeln!(f, "{:<width$} {}", hex, text, width = HEX_WIDTH)?;
        }
        Ok(())
    }
}
