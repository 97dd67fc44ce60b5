//! Shared access to the latch word.

use crate::error::Result;

/// Shared handle to a latch word that several motors drive.
///
/// Methods take `&self`: implementors own the register and serialize access
/// internally, so each motor only needs its bit mask, never a copy of the
/// word.
pub trait LatchBus {
    /// Word most recently committed to the outputs.
    fn word(&self) -> u8;

    /// Clear `mask`, set `bits & mask`, and retransmit the whole word.
    fn update(&self, mask: u8, bits: u8) -> Result<()>;

    /// Reserve the lines in `mask` for one owner.
    ///
    /// Returns `false` without side effects if any line is already taken.
    fn claim(&self, mask: u8) -> bool;

    /// Return lines previously reserved with [`claim`](Self::claim).
    fn unclaim(&self, mask: u8);
}
