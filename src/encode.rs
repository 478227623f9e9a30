use bitvec::prelude::*;

use crate::error::InvalidArgument;
use crate::types::{AlertOutputMode, AlertPolarity, AlertSelector, FixedTemperature, RawTemperature};

pub(crate) const BOUNDARY_MIN: f32 = -128.0;
pub(crate) const BOUNDARY_MAX: f32 = 127.0;

const SHUTDOWN_BIT: usize = 0;
const INTERRUPT_CLEAR_BIT: usize = 5;
const SIGN_BIT: usize = 4;

/// Converts the ambient register to degrees. Negative readings are the
/// two's complement of the 13-bit field: `(upper + lower) - 256`.
pub(crate) fn decode_temperature(raw: &RawTemperature) -> f32 {
    let upper = ((raw.msb & 0x0F) as f32) * 16.0;
    let lower = raw.lsb as f32 / 16.0;
    match raw.msb.view_bits::<Lsb0>()[SIGN_BIT] {
        false => upper + lower,
        true => (upper + lower) - 256.0,
    }
}

/// Same value as [`decode_temperature`] without floating point arithmetic.
pub(crate) fn decode_temperature_fixed(raw: &RawTemperature) -> FixedTemperature {
    let sixteenths = sixteenths(raw.msb, raw.lsb);
    FixedTemperature {
        integer: sixteenths / 16,
        hundredths: (sixteenths % 16) * 100 / 16,
    }
}

/// Signed 13-bit field in 1/16 degree steps, ignoring the flag bits above it.
fn sixteenths(msb: u8, lsb: u8) -> i16 {
    let magnitude = ((msb & 0x0F) as i16) << 8 | lsb as i16;
    match msb.view_bits::<Lsb0>()[SIGN_BIT] {
        false => magnitude,
        true => magnitude - 4096,
    }
}

/// Encodes a boundary temperature. The fraction is truncated to a quarter
/// degree, the integer part is stored in 9-bit two's complement.
pub(crate) fn encode_boundary(value: f32) -> Result<[u8; 2], InvalidArgument> {
    // NaN fails the range check as well
    if !(BOUNDARY_MIN..=BOUNDARY_MAX).contains(&value) {
        return Err(InvalidArgument::TemperatureOutOfRange);
    }

    let integral = value as i32;
    let frac = value - integral as f32;
    let frac = if frac < 0.0 { -frac } else { frac };

    let doubled = frac * 2.0;
    let half = doubled >= 1.0;
    let quarter = (doubled - (doubled as i32) as f32) * 2.0 >= 1.0;
    let fraction = ((half as i32) << 1 | quarter as i32) << 2;

    let integral = if integral < 0 {
        (1 << 9) + integral
    } else {
        integral
    };
    let integral = (integral & 0x1FF) << 4;

    let encoded = match value >= 0.0 {
        true => integral + fraction,
        false => integral - fraction,
    };
    let encoded = encoded & 0x1FFC;
    Ok((encoded as u16).to_be_bytes())
}

pub(crate) fn decode_boundary(data: [u8; 2]) -> f32 {
    sixteenths(data[0], data[1] & 0xFC) as f32 / 16.0
}

/// Sets or clears the shutdown bit, leaving every other bit alone.
pub(crate) fn with_shutdown(mut config: [u8; 2], enabled: bool) -> [u8; 2] {
    config[0].view_bits_mut::<Lsb0>().set(SHUTDOWN_BIT, enabled);
    config
}

/// Rewrites the low nibble of the low byte. The high nibble holds lock and
/// status bits and is kept as read.
pub(crate) fn with_alert_mode(
    mut config: [u8; 2],
    enabled: bool,
    output_mode: AlertOutputMode,
    polarity: AlertPolarity,
    selector: AlertSelector,
) -> [u8; 2] {
    let alert_bits = output_mode.to_bit() as u8
        | (polarity.to_bit() as u8) << 1
        | (selector.to_bit() as u8) << 2
        | (enabled as u8) << 3;
    config[1].view_bits_mut::<Lsb0>()[..4].store_le(alert_bits);
    config
}

pub(crate) fn with_interrupt_clear(mut config: [u8; 2]) -> [u8; 2] {
    config[1].view_bits_mut::<Lsb0>().set(INTERRUPT_CLEAR_BIT, true);
    config
}
