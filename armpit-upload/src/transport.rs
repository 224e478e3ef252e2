// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Serial transport layer for board communication.

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use armpit_common::{Error, Link, Result, Session, BAUD_RATE};

/// Port read timeout used to poll when no session timeout is configured.
pub const POLL_INTERVAL_MS: u64 = 500;

/// A session over the serial transport.
pub type Board = Session<Transport>;

/// Serial transport to the board at 9600 baud, 8N1.
pub struct Transport {
    port: Box<dyn SerialPort>,
    timeout: Option<Duration>,
}

impl Transport {
    /// Open the serial port.
    ///
    /// Without `timeout_ms` reads block until data arrives; with it, a read
    /// that waits longer fails with [`Error::Stall`].
    pub fn with_timeout(port_name: &str, timeout_ms: Option<u64>) -> Result<Self> {
        let timeout = timeout_ms.map(Duration::from_millis);
        let port = serialport::new(port_name, BAUD_RATE)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(timeout.unwrap_or(Duration::from_millis(POLL_INTERVAL_MS)))
            .open()
            .map_err(|e| Error::Connection {
                port: port_name.to_string(),
                reason: e.to_string(),
            })?;

        log::info!("Opened serial port {} at {} baud", port_name, BAUD_RATE);

        Ok(Self { port, timeout })
    }

    /// Get the port name.
    pub fn port_name(&self) -> String {
        self.port.name().unwrap_or_else(|| "?".to_string())
    }
}

impl Link for Transport {
    fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];

        loop {
            match self.port.read(&mut byte) {
                Ok(1) => return Ok(byte[0]),
                Ok(_) => continue,
                Err(e) if e.kind() == ErrorKind::TimedOut => match self.timeout {
                    Some(timeout) => return Err(Error::Stall(timeout)),
                    None => continue,
                },
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }

    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        self.port.write_all(data)?;
        self.port.flush()?;
        Ok(())
    }
}
