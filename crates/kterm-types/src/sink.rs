//! Output sink capability.

use crate::color::Color;
use crate::error::Result;

/// Serialized, colored text-emission capability consumed by commands.
///
/// Implementations must guarantee that at most one write is in flight at a
/// time: setting the colors, emitting the text, and restoring the previous
/// colors form a single critical section. Concurrent callers then observe
/// writes as fully interleaved at write granularity, never with mismatched
/// colors.
///
/// The interpreter core never implements the physical console; it only
/// requires this contract from whatever the host supplies.
pub trait OutputSink: Send + Sync {
    /// Write `text` with the given colors, optionally followed by a line
    /// terminator.
    fn write(&self, text: &str, fore: Color, back: Color, newline: bool) -> Result<()>;
}
