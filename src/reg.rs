use crate::error::InvalidArgument;

/// Widest register on the device, in bytes.
pub(crate) const MAX_WIDTH: usize = 2;

/// MCP9808 register pointers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    Configuration = 0x01,
    UpperBoundary = 0x02,
    LowerBoundary = 0x03,
    CriticalBoundary = 0x04,
    AmbientTemperature = 0x05,
    ManufacturerId = 0x06,
    DeviceId = 0x07,
    Resolution = 0x08,
}

impl Register {
    /// Pointer value sent on the bus ahead of the register contents.
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Register size in bytes, either 1 or 2.
    pub const fn width(self) -> usize {
        match self {
            Register::Resolution => 1,
            _ => 2,
        }
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> u8 {
        register.address()
    }
}

impl TryFrom<u8> for Register {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, InvalidArgument> {
        match value {
            0x01 => Ok(Register::Configuration),
            0x02 => Ok(Register::UpperBoundary),
            0x03 => Ok(Register::LowerBoundary),
            0x04 => Ok(Register::CriticalBoundary),
            0x05 => Ok(Register::AmbientTemperature),
            0x06 => Ok(Register::ManufacturerId),
            0x07 => Ok(Register::DeviceId),
            0x08 => Ok(Register::Resolution),
            _ => Err(InvalidArgument::UnknownRegister(value)),
        }
    }
}

/// The three alert boundary registers.
///
/// The alert output compares the ambient temperature against these limits.
/// Which of them take part is chosen with [`AlertSelector`](crate::AlertSelector).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Boundary {
    Upper,
    Lower,
    Critical,
}

impl Boundary {
    pub const fn register(self) -> Register {
        match self {
            Boundary::Upper => Register::UpperBoundary,
            Boundary::Lower => Register::LowerBoundary,
            Boundary::Critical => Register::CriticalBoundary,
        }
    }
}

impl From<Boundary> for Register {
    fn from(boundary: Boundary) -> Register {
        boundary.register()
    }
}

impl TryFrom<Register> for Boundary {
    type Error = InvalidArgument;

    fn try_from(register: Register) -> Result<Self, InvalidArgument> {
        match register {
            Register::UpperBoundary => Ok(Boundary::Upper),
            Register::LowerBoundary => Ok(Boundary::Lower),
            Register::CriticalBoundary => Ok(Boundary::Critical),
            other => Err(InvalidArgument::NotBoundaryRegister(other.address())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_widths() {
        assert_eq!(Register::Resolution.width(), 1);
        assert_eq!(Register::Configuration.width(), 2);
        assert_eq!(Register::AmbientTemperature.width(), MAX_WIDTH);
    }

    #[test]
    fn test_register_from_pointer() {
        for pointer in 1..=8u8 {
            assert_eq!(Register::try_from(pointer).map(u8::from), Ok(pointer));
        }
        assert_eq!(
            Register::try_from(0x00),
            Err(InvalidArgument::UnknownRegister(0x00))
        );
        assert_eq!(
            Register::try_from(0x09),
            Err(InvalidArgument::UnknownRegister(0x09))
        );
    }

    #[test]
    fn test_boundary_from_register() {
        assert_eq!(
            Boundary::try_from(Register::CriticalBoundary),
            Ok(Boundary::Critical)
        );
        assert_eq!(
            Boundary::try_from(Register::AmbientTemperature),
            Err(InvalidArgument::NotBoundaryRegister(0x05))
        );
        assert_eq!(Register::from(Boundary::Lower), Register::LowerBoundary);
    }
}
