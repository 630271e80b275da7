//! Frame sequence counter

/// Per-boot frame counter.
///
/// Starts at 0 on every boot and is never persisted. Overflow wraps
/// (`i16::MAX` is followed by `i16::MIN`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SequenceCounter(i16);

impl SequenceCounter {
    pub const fn new() -> Self {
        Self(0)
    }

    /// Number to put into the next frame
    pub const fn current(&self) -> i16 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}
