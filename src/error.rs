//! Errors that can occur when using the MCP9808.
//!
//! [`Error`] is generic over the error type of the underlying I2C bus.

use core::fmt;

/// Identity register that did not hold the expected value, with what was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Identity {
    Manufacturer(u16),
    Device(u16),
}

/// Reason an argument was rejected before any bus access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidArgument {
    /// No register lives at this pointer.
    UnknownRegister(u8),
    /// The register exists but does not hold an alert boundary.
    NotBoundaryRegister(u8),
    /// Boundary temperatures must lie within [-128, 127] degrees.
    TemperatureOutOfRange,
    UnknownResolution(u8),
    UnknownOutputMode(u8),
    UnknownPolarity(u8),
    UnknownSelector(u8),
    /// Not one of the eight addresses selectable with the A0..A2 pins.
    UnknownAddress(u8),
}

/// All errors the driver can return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// An error occurred in the I2C driver. Never retried.
    I2c(E),

    /// The device on the bus is not an MCP9808.
    ///
    /// Could indicate a wrong address or a different part wired at it.
    IdentityMismatch(Identity),

    /// An argument was rejected. No bus traffic took place.
    InvalidArgument(InvalidArgument),
}

pub type Result<T, E> = core::result::Result<T, Error<E>>;

impl<E> From<InvalidArgument> for Error<E> {
    fn from(reason: InvalidArgument) -> Self {
        Error::InvalidArgument(reason)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Manufacturer(id) => write!(f, "invalid manufacturer ID {:#06x}", id),
            Identity::Device(id) => write!(f, "invalid device or revision ID {:#06x}", id),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::UnknownRegister(ptr) => write!(f, "unknown register {:#04x}", ptr),
            InvalidArgument::NotBoundaryRegister(ptr) => {
                write!(f, "register {:#04x} is not an alert boundary", ptr)
            }
            InvalidArgument::TemperatureOutOfRange => {
                f.write_str("temperature out of range [-128, 127]")
            }
            InvalidArgument::UnknownResolution(code) => {
                write!(f, "invalid temperature resolution {}", code)
            }
            InvalidArgument::UnknownOutputMode(code) => write!(f, "invalid output mode {}", code),
            InvalidArgument::UnknownPolarity(code) => write!(f, "invalid alert polarity {}", code),
            InvalidArgument::UnknownSelector(code) => write!(f, "invalid alert selector {}", code),
            InvalidArgument::UnknownAddress(addr) => write!(f, "invalid device address {:#04x}", addr),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "i2c error: {:?}", e),
            Error::IdentityMismatch(identity) => fmt::Display::fmt(identity, f),
            Error::InvalidArgument(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
