/// Failures a control-loop pass can surface.
///
/// On the shipped board every peripheral below is infallible; the
/// variants exist for fallible pin or serial implementations behind
/// the same traits.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A button level could not be read.
    ButtonRead,
    /// The LED pin rejected a level write.
    LedWrite,
    /// The terminal link rejected output.
    DisplayWrite,
}

impl From<core::convert::Infallible> for Error {
    fn from(_: core::convert::Infallible) -> Self {
        unreachable!()
    }
}
