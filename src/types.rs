use bitvec::prelude::*;

use crate::encode;
use crate::error::InvalidArgument;

/// Contents of the ambient temperature register.
///
/// Bits 15..13 of the register are alert flags, bit 12 is the sign and
/// bits 11..0 hold the magnitude in 1/16 degree steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawTemperature {
    pub msb: u8,
    pub lsb: u8,
}

impl RawTemperature {
    pub const fn from_be_bytes(data: [u8; 2]) -> Self {
        Self {
            msb: data[0],
            lsb: data[1],
        }
    }

    /// Ambient temperature in degrees Celsius.
    pub fn celsius(&self) -> f32 {
        encode::decode_temperature(self)
    }

    /// Ambient temperature at or above the critical boundary.
    pub fn above_critical(&self) -> bool {
        self.msb.view_bits::<Lsb0>()[7]
    }

    /// Ambient temperature above the upper boundary.
    pub fn above_upper(&self) -> bool {
        self.msb.view_bits::<Lsb0>()[6]
    }

    /// Ambient temperature below the lower boundary.
    pub fn below_lower(&self) -> bool {
        self.msb.view_bits::<Lsb0>()[5]
    }
}

/// Temperature split into whole degrees and hundredths of a degree, for
/// targets without floating point support.
///
/// Both parts are truncated toward zero and carry the sign of the value, so
/// -0.0625 degrees is `{ integer: 0, hundredths: -6 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedTemperature {
    pub integer: i16,
    pub hundredths: i16,
}

impl From<RawTemperature> for FixedTemperature {
    fn from(raw: RawTemperature) -> Self {
        encode::decode_temperature_fixed(&raw)
    }
}

/// Conversion resolution. Finer steps take longer to convert.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// 0.5 C per bit, 30 ms conversion time
    Min = 0b00,
    /// 0.25 C per bit, 65 ms conversion time
    Low = 0b01,
    /// 0.125 C per bit, 130 ms conversion time
    Avg = 0b10,
    /// 0.0625 C per bit, 250 ms conversion time
    #[default]
    Max = 0b11,
}

impl Resolution {
    /// Typical time for one conversion, in milliseconds.
    pub const fn conversion_time_ms(&self) -> u32 {
        match self {
            Resolution::Min => 30,
            Resolution::Low => 65,
            Resolution::Avg => 130,
            Resolution::Max => 250,
        }
    }

    pub(crate) fn to_register(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_register(reg: u8) -> Self {
        match reg & 0x03 {
            0b00 => Resolution::Min,
            0b01 => Resolution::Low,
            0b10 => Resolution::Avg,
            _ => Resolution::Max,
        }
    }
}

impl TryFrom<u8> for Resolution {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<Self, InvalidArgument> {
        match value {
            0..=3 => Ok(Resolution::from_register(value)),
            _ => Err(InvalidArgument::UnknownResolution(value)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertOutputMode {
    /// Alert output follows the comparison result.
    #[default]
    Comparator = 0,
    /// Alert output latches until acknowledged with
    /// [`acknowledge_alert_interrupt`](crate::Mcp9808::acknowledge_alert_interrupt).
    Interrupt = 1,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertPolarity {
    /// Requires a pull-up on the alert pin.
    #[default]
    ActiveLow = 0,
    ActiveHigh = 1,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlertSelector {
    /// Ambient above upper or critical, or below lower.
    #[default]
    AllBoundaries = 0,
    /// Ambient above critical only.
    CriticalOnly = 1,
}

macro_rules! bit_enum {
    ($ty:ident, $zero:ident, $one:ident, $err:ident) => {
        impl $ty {
            pub(crate) fn to_bit(self) -> bool {
                self == $ty::$one
            }

            pub(crate) fn from_bit(bit: bool) -> Self {
                if bit {
                    $ty::$one
                } else {
                    $ty::$zero
                }
            }
        }

        impl TryFrom<u8> for $ty {
            type Error = InvalidArgument;

            fn try_from(value: u8) -> Result<Self, InvalidArgument> {
                match value {
                    0 => Ok($ty::$zero),
                    1 => Ok($ty::$one),
                    _ => Err(InvalidArgument::$err(value)),
                }
            }
        }
    };
}

bit_enum!(AlertOutputMode, Comparator, Interrupt, UnknownOutputMode);
bit_enum!(AlertPolarity, ActiveLow, ActiveHigh, UnknownPolarity);
bit_enum!(AlertSelector, AllBoundaries, CriticalOnly, UnknownSelector);

/// Decoded view of the configuration register.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    pub shutdown: bool,
    pub critical_locked: bool,
    pub window_locked: bool,
    pub interrupt_clear: bool,
    pub alert_asserted: bool,
    pub alert_enabled: bool,
    pub alert_selector: AlertSelector,
    pub alert_polarity: AlertPolarity,
    pub alert_output_mode: AlertOutputMode,
}

impl Configuration {
    pub(crate) fn from_register(data: [u8; 2]) -> Self {
        let msb = data[0].view_bits::<Lsb0>();
        let lsb = data[1].view_bits::<Lsb0>();
        Self {
            shutdown: msb[0],
            critical_locked: lsb[7],
            window_locked: lsb[6],
            interrupt_clear: lsb[5],
            alert_asserted: lsb[4],
            alert_enabled: lsb[3],
            alert_selector: AlertSelector::from_bit(lsb[2]),
            alert_polarity: AlertPolarity::from_bit(lsb[1]),
            alert_output_mode: AlertOutputMode::from_bit(lsb[0]),
        }
    }
}

/// Bus address, selected with the A2..A0 pins.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceAddress {
    #[default]
    AD0 = 0b001_1000,
    AD1 = 0b001_1001,
    AD2 = 0b001_1010,
    AD3 = 0b001_1011,
    AD4 = 0b001_1100,
    AD5 = 0b001_1101,
    AD6 = 0b001_1110,
    AD7 = 0b001_1111,
}

impl TryFrom<u8> for DeviceAddress {
    type Error = InvalidArgument;

    fn try_from(value: u8) -> Result<DeviceAddress, InvalidArgument> {
        match value {
            0b001_1000 => Ok(DeviceAddress::AD0),
            0b001_1001 => Ok(DeviceAddress::AD1),
            0b001_1010 => Ok(DeviceAddress::AD2),
            0b001_1011 => Ok(DeviceAddress::AD3),
            0b001_1100 => Ok(DeviceAddress::AD4),
            0b001_1101 => Ok(DeviceAddress::AD5),
            0b001_1110 => Ok(DeviceAddress::AD6),
            0b001_1111 => Ok(DeviceAddress::AD7),
            _ => Err(InvalidArgument::UnknownAddress(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_flags() {
        let raw = RawTemperature {
            msb: 0b1100_0001,
            lsb: 0b1001_0000,
        };
        assert!(raw.above_critical());
        assert!(raw.above_upper());
        assert!(!raw.below_lower());
        assert_eq!(raw.celsius(), 25.0);
    }

    #[test]
    fn test_resolution_codes() {
        assert_eq!(Resolution::try_from(0), Ok(Resolution::Min));
        assert_eq!(Resolution::try_from(3), Ok(Resolution::Max));
        assert_eq!(
            Resolution::try_from(4),
            Err(InvalidArgument::UnknownResolution(4))
        );
        assert_eq!(Resolution::default(), Resolution::Max);
        assert_eq!(Resolution::Avg.conversion_time_ms(), 130);
    }

    #[test]
    fn test_alert_enum_codes() {
        assert_eq!(AlertOutputMode::try_from(1), Ok(AlertOutputMode::Interrupt));
        assert_eq!(AlertPolarity::try_from(0), Ok(AlertPolarity::ActiveLow));
        assert_eq!(
            AlertSelector::try_from(2),
            Err(InvalidArgument::UnknownSelector(2))
        );
        assert_eq!(
            AlertPolarity::try_from(7),
            Err(InvalidArgument::UnknownPolarity(7))
        );
    }

    #[test]
    fn test_configuration_from_register() {
        let config = Configuration::from_register([0b0000_0001, 0b1101_1010]);
        assert_eq!(
            config,
            Configuration {
                shutdown: true,
                critical_locked: true,
                window_locked: true,
                interrupt_clear: false,
                alert_asserted: true,
                alert_enabled: true,
                alert_selector: AlertSelector::AllBoundaries,
                alert_polarity: AlertPolarity::ActiveHigh,
                alert_output_mode: AlertOutputMode::Comparator,
            }
        );
        assert_eq!(Configuration::from_register([0, 0]), Configuration::default());
    }

    #[test]
    fn test_device_address() {
        assert_eq!(DeviceAddress::default() as u8, 0x18);
        assert_eq!(DeviceAddress::try_from(0x1F), Ok(DeviceAddress::AD7));
        assert_eq!(
            DeviceAddress::try_from(0x60),
            Err(InvalidArgument::UnknownAddress(0x60))
        );
    }
}
