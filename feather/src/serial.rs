//! Blocking byte sink over the UART transmitter, for the terminal
//! status lines.

use embedded_hal_nb::serial;

/// The UART rejected a byte.
#[derive(Debug, defmt::Format)]
pub struct TxError;

impl embedded_io::Error for TxError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::Other
    }
}

/// Adapts an nb-style serial writer to `embedded_io::Write`.
pub struct SerialOut<T> {
    tx: T,
}

impl<T> SerialOut<T> {
    pub fn new(tx: T) -> Self {
        Self { tx }
    }
}

impl<T> embedded_io::ErrorType for SerialOut<T> {
    type Error = TxError;
}

impl<T: serial::Write<u8>> embedded_io::Write for SerialOut<T> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        for &byte in buf {
            nb::block!(self.tx.write(byte)).map_err(|_| TxError)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        nb::block!(self.tx.flush()).map_err(|_| TxError)
    }
}
