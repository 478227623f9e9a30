//! A platform agnostic driver for the Microchip MCP9808 digital temperature
//! sensor, built on the [`embedded-hal`](https://github.com/rust-embedded/embedded-hal)
//! I2C traits.
//!
//! The driver allows you to:
//! - Verify the manufacturer and device IDs when connecting.
//! - Enter and leave shutdown mode.
//! - Read the ambient temperature, as `f32` or as whole degrees plus hundredths.
//! - Configure the alert output and acknowledge alert interrupts.
//! - Program the upper, lower and critical alert boundaries.
//! - Select the conversion resolution.
//!
//! Every register access is a single write of the register pointer (plus
//! data for writes), followed by a read for register reads. Updates to the
//! configuration register are read-modify-write and not atomic: the driver
//! owns its bus handle and assumes no other master touches the device.
//!
//! ## Features
//!
//! - `log`: Enables logging using the `log` framework.
//! - `defmt`: Enables logging using the `defmt` framework.
//!
//! ```ignore
//! let mut sensor = Mcp9808::new(i2c, DeviceAddress::default())?;
//! sensor.set_resolution(Resolution::Avg)?;
//! sensor.set_boundary(Boundary::Critical, 85.5)?;
//! let celsius = sensor.read_temperature()?;
//! ```

#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

mod fmt;

mod encode;
mod error;
mod reg;
mod types;

use embedded_hal::i2c;

pub use crate::error::{Error, Identity, InvalidArgument, Result};
pub use crate::reg::{Boundary, Register};
pub use crate::types::{
    AlertOutputMode, AlertPolarity, AlertSelector, Configuration, DeviceAddress, FixedTemperature,
    RawTemperature, Resolution,
};

use crate::reg::MAX_WIDTH;

/// Expected content of the manufacturer ID register.
pub const MANUFACTURER_ID: u16 = 0x0054;
/// Expected content of the device ID register: device ID 0x04, revision 0x00.
pub const DEVICE_ID: u16 = 0x0400;

#[derive(Debug)]
pub struct Mcp9808<I2C> {
    i2c: I2C,
    address: DeviceAddress,
}

impl<I2C: i2c::I2c> Mcp9808<I2C> {
    /// Creates a new instance of the sensor, taking ownership of the i2c peripheral.
    ///
    /// Fails if the device at `address` does not report the MCP9808
    /// manufacturer and device IDs.
    pub fn new(i2c: I2C, address: DeviceAddress) -> Result<Self, I2C::Error> {
        let mut sensor = Self { i2c, address };
        sensor.check_identity()?;
        debug!("mcp9808 found at {:?}", address);
        Ok(sensor)
    }

    /// Destroys the driver and returns the i2c peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn address(&self) -> DeviceAddress {
        self.address
    }

    fn check_identity(&mut self) -> Result<(), I2C::Error> {
        let manufacturer_id = u16::from_be_bytes(self.read_register(Register::ManufacturerId)?);
        if manufacturer_id != MANUFACTURER_ID {
            warn!("unexpected manufacturer ID {}", manufacturer_id);
            return Err(Error::IdentityMismatch(Identity::Manufacturer(manufacturer_id)));
        }

        let device_id = u16::from_be_bytes(self.read_register(Register::DeviceId)?);
        if device_id != DEVICE_ID {
            warn!("unexpected device ID {}", device_id);
            return Err(Error::IdentityMismatch(Identity::Device(device_id)));
        }
        Ok(())
    }

    /// Reads and decodes the configuration register.
    pub fn configuration(&mut self) -> Result<Configuration, I2C::Error> {
        let data = self.read_register(Register::Configuration)?;
        Ok(Configuration::from_register(data))
    }

    /// Enters or leaves shutdown mode. While shut down the sensor draws less
    /// than 1 uA and stops converting.
    pub fn set_shutdown(&mut self, enabled: bool) -> Result<(), I2C::Error> {
        let config = self.read_register(Register::Configuration)?;
        self.write_register(
            Register::Configuration,
            encode::with_shutdown(config, enabled),
        )
    }

    /// Configures the alert output.
    ///
    /// In [`AlertOutputMode::Interrupt`] every assertion has to be cleared
    /// with [`acknowledge_alert_interrupt`](Self::acknowledge_alert_interrupt).
    pub fn set_alert_mode(
        &mut self,
        enabled: bool,
        output_mode: AlertOutputMode,
        polarity: AlertPolarity,
        selector: AlertSelector,
    ) -> Result<(), I2C::Error> {
        let config = self.read_register(Register::Configuration)?;
        self.write_register(
            Register::Configuration,
            encode::with_alert_mode(config, enabled, output_mode, polarity, selector),
        )
    }

    /// Sets the interrupt clear bit, deasserting the alert output in interrupt mode.
    pub fn acknowledge_alert_interrupt(&mut self) -> Result<(), I2C::Error> {
        let config = self.read_register(Register::Configuration)?;
        self.write_register(
            Register::Configuration,
            encode::with_interrupt_clear(config),
        )
    }

    /// Reads the ambient temperature register including its alert flags.
    pub fn read_raw_temperature(&mut self) -> Result<RawTemperature, I2C::Error> {
        let data = self.read_register(Register::AmbientTemperature)?;
        Ok(RawTemperature::from_be_bytes(data))
    }

    /// Reads the ambient temperature in degrees Celsius.
    pub fn read_temperature(&mut self) -> Result<f32, I2C::Error> {
        Ok(self.read_raw_temperature()?.celsius())
    }

    /// Reads the ambient temperature without floating point arithmetic.
    pub fn read_temperature_int(&mut self) -> Result<FixedTemperature, I2C::Error> {
        Ok(self.read_raw_temperature()?.into())
    }

    /// Programs an alert boundary. `value` must lie within [-128, 127]
    /// degrees and is truncated to a quarter degree.
    pub fn set_boundary(&mut self, boundary: Boundary, value: f32) -> Result<(), I2C::Error> {
        let data = encode::encode_boundary(value)?;
        self.write_register(boundary.register(), data)
    }

    /// Reads an alert boundary back, in degrees Celsius.
    pub fn boundary(&mut self, boundary: Boundary) -> Result<f32, I2C::Error> {
        let data = self.read_register(boundary.register())?;
        Ok(encode::decode_boundary(data))
    }

    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<(), I2C::Error> {
        self.write_register(Register::Resolution, [resolution.to_register(), 0])
    }

    pub fn resolution(&mut self) -> Result<Resolution, I2C::Error> {
        let data = self.read_register(Register::Resolution)?;
        Ok(Resolution::from_register(data[0]))
    }

    /// Writes the register pointer, then reads `register.width()` bytes.
    /// Unused trailing bytes of the result are zero.
    fn read_register(&mut self, register: Register) -> Result<[u8; MAX_WIDTH], I2C::Error> {
        let mut data = [0u8; MAX_WIDTH];
        let address = self.address as u8;
        self.i2c
            .write(address, &[register.address()])
            .map_err(Error::I2c)?;
        self.i2c
            .read(address, &mut data[..register.width()])
            .map_err(Error::I2c)?;
        trace!("read {:?}: {:?}", register, data);
        Ok(data)
    }

    /// Writes the register pointer followed by the first `register.width()`
    /// bytes of `data`, big endian.
    fn write_register(&mut self, register: Register, data: [u8; MAX_WIDTH]) -> Result<(), I2C::Error> {
        let width = register.width();
        let mut frame = [0u8; MAX_WIDTH + 1];
        frame[0] = register.address();
        frame[1..=width].copy_from_slice(&data[..width]);
        trace!("write {:?}: {:?}", register, data);
        self.i2c
            .write(self.address as u8, &frame[..=width])
            .map_err(Error::I2c)
    }
}
