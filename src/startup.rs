//! Initializer
//!
//! Brings the companion module into its startup state before the loop runs:
//! the reset line is asserted (driven low) and stays that way. Whether the
//! module needs an explicit release is unknown, so none is performed and the
//! [`Companion`] type offers no way to drive the line high.

use embedded_hal::digital::OutputPin;

use crate::config::BAUD_RATE;
use crate::error::{Error, Result};
use crate::hal::FrameSink;

/// The companion radio module: its reset line and the serial link to it.
///
/// Owning the reset pin here keeps it configured (and low) for as long as the
/// firmware runs.
pub struct Companion<R, L> {
    reset: R,
    link: L,
}

impl<R, L> Companion<R, L>
where
    R: OutputPin,
    L: FrameSink,
{
    /// Assert the reset line once and take over the link.
    ///
    /// A pin error is logged and otherwise ignored, the link is usable either way.
    pub fn hold_in_reset(reset: R, link: L) -> Self {
        let mut companion = Self { reset, link };
        match companion.assert_reset() {
            Ok(()) => log_info!("Companion reset asserted, link at {} baud", BAUD_RATE),
            Err(e) => log_error!("Companion reset failed: {:?}", e),
        }
        companion
    }

    fn assert_reset(&mut self) -> Result<()> {
        self.reset.set_low().map_err(|_| Error::ResetLine)
    }
}

impl<R, L> FrameSink for Companion<R, L>
where
    R: OutputPin,
    L: FrameSink,
{
    async fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.link.write_frame(frame).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use core::convert::Infallible;
    use embassy_futures::block_on;
    use embedded_hal::digital::{ErrorKind, ErrorType};

    /// Records every level written to the pin
    #[derive(Default)]
    pub(crate) struct RecordingPin {
        pub(crate) writes: Vec<bool>,
    }

    impl ErrorType for RecordingPin {
        type Error = Infallible;
    }

    impl OutputPin for RecordingPin {
        fn set_low(&mut self) -> core::result::Result<(), Infallible> {
            self.writes.push(false);
            Ok(())
        }

        fn set_high(&mut self) -> core::result::Result<(), Infallible> {
            self.writes.push(true);
            Ok(())
        }
    }

    /// Collects frames written to the link
    #[derive(Default)]
    pub(crate) struct RecordingLink {
        pub(crate) frames: Vec<Vec<u8>>,
        pub(crate) fail: bool,
    }

    impl FrameSink for RecordingLink {
        async fn write_frame(&mut self, frame: &[u8]) -> Result<()> {
            if self.fail {
                return Err(Error::Link);
            }
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }

    struct BrokenPin;

    impl ErrorType for BrokenPin {
        type Error = ErrorKind;
    }

    impl OutputPin for BrokenPin {
        fn set_low(&mut self) -> core::result::Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }

        fn set_high(&mut self) -> core::result::Result<(), ErrorKind> {
            Err(ErrorKind::Other)
        }
    }

    #[test]
    fn reset_is_driven_low_exactly_once() {
        let companion = Companion::hold_in_reset(RecordingPin::default(), RecordingLink::default());
        assert_eq!(companion.reset.writes, vec![false]);
    }

    #[test]
    fn reset_failure_still_yields_a_usable_link() {
        let mut companion = Companion::hold_in_reset(BrokenPin, RecordingLink::default());
        assert_eq!(companion.assert_reset(), Err(Error::ResetLine));

        block_on(companion.write_frame(&[1, 2, 3, 4])).unwrap();
        assert_eq!(companion.link.frames, vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn frames_pass_through_without_touching_reset() {
        let mut companion = Companion::hold_in_reset(RecordingPin::default(), RecordingLink::default());
        block_on(companion.write_frame(&[0, 2, 0, 0])).unwrap();
        block_on(companion.write_frame(&[1, 2, 1, 0])).unwrap();

        assert_eq!(companion.link.frames.len(), 2);
        assert_eq!(companion.reset.writes, vec![false]);
    }
}
