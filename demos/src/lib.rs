#![no_std]

//! Platform-independent harnesses around the `tickdown` control loop:
//! the same runner paces the firmware on the board and the simulator
//! on a host.

// Compile-time checks for logging features
#[cfg(all(feature = "defmt", feature = "log"))]
compile_error!("Features 'defmt' and 'log' are mutually exclusive. Enable only one for logging.");

#[cfg(not(any(feature = "defmt", feature = "log")))]
compile_error!("Must enable either 'defmt' or 'log' feature for logging support.");

pub mod runner;

// Re-export logging macros for convenience
#[cfg(feature = "defmt")]
pub use defmt::{debug, error, info, trace};

#[cfg(feature = "log")]
pub use log::{debug, error, info, trace};
