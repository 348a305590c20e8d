//! Non-volatile mode records
//!
//! A mode persists its configuration as a fixed-size record at its own
//! address:
//!
//! | offset | size | field                                  |
//! |--------|------|----------------------------------------|
//! | 0      | 2    | magic `0x4D50`, little endian          |
//! | 2      | 1    | acc mode                               |
//! | 3      | 1    | acc sensitivity                        |
//! | 4      | 1    | current variant                        |
//! | 5      | 14   | variant 0: prime, color count, 12 colors |
//! | 19     | 14   | variant 1: prime, color count, 12 colors |
//! | 33     | 4    | CRC-32 of bytes `0..33`, little endian |
//!
//! Render state (tick, counters, cursor, hysteresis) is never stored.

use crc32fast::Hasher;

use crate::{
    accel::{AccMode, AccSensitivity},
    mode::VariantConfig,
    palette::{PALETTE_SIZE, Palette},
    prime::Prime,
};

pub const RECORD_MAGIC: u16 = 0x4D50;
const MAGIC_SIZE: usize = RECORD_MAGIC.to_le_bytes().len();
const HEADER_FIELDS: usize = 3;
const VARIANT_SIZE: usize = 2 + PALETTE_SIZE;
/// Configuration bytes between the magic and the checksum
pub const PAYLOAD_SIZE: usize = HEADER_FIELDS + 2 * VARIANT_SIZE;
const CRC_SIZE: usize = 4;
const CRC_OFFSET: usize = MAGIC_SIZE + PAYLOAD_SIZE;
/// Bytes occupied by one record in storage
pub const RECORD_SIZE: usize = CRC_OFFSET + CRC_SIZE;

/// Error type for the storage port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// The address range lies outside the device
    OutOfRange,
    /// The device reported a failure
    Driver,
}

/// Reasons a stored record was not applied
///
/// All of them are recoverable: the mode keeps its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    Storage(StorageError),
    /// Nothing was ever saved here
    InvalidMagic,
    /// The record was torn or corrupted
    ChecksumMismatch,
    /// The checksum matched but a field is out of range
    InvalidData,
}

impl From<StorageError> for LoadError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

/// Byte-addressed non-volatile storage
///
/// Implement this for the EEPROM or flash driver of the target board.
pub trait Storage {
    /// Fill `buffer` with the bytes starting at `addr`
    fn read(&mut self, addr: u16, buffer: &mut [u8]) -> Result<(), StorageError>;

    /// Write `data` starting at `addr`
    fn write(&mut self, addr: u16, data: &[u8]) -> Result<(), StorageError>;
}

/// Storage backed by a RAM array
///
/// Starts erased (`0xFF`), like a fresh EEPROM.
#[derive(Debug, Clone)]
pub struct MemoryStorage<const SIZE: usize> {
    bytes: [u8; SIZE],
}

impl<const SIZE: usize> Default for MemoryStorage<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize> MemoryStorage<SIZE> {
    pub const fn new() -> Self {
        Self {
            bytes: [0xFF; SIZE],
        }
    }

    pub const fn as_bytes(&self) -> &[u8; SIZE] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8; SIZE] {
        &mut self.bytes
    }

    fn range(addr: u16, len: usize) -> Result<core::ops::Range<usize>, StorageError> {
        let start = usize::from(addr);
        let end = start.checked_add(len).ok_or(StorageError::OutOfRange)?;
        if end > SIZE {
            return Err(StorageError::OutOfRange);
        }
        Ok(start..end)
    }
}

impl<const SIZE: usize> Storage for MemoryStorage<SIZE> {
    fn read(&mut self, addr: u16, buffer: &mut [u8]) -> Result<(), StorageError> {
        let range = Self::range(addr, buffer.len())?;
        buffer.copy_from_slice(&self.bytes[range]);
        Ok(())
    }

    fn write(&mut self, addr: u16, data: &[u8]) -> Result<(), StorageError> {
        let range = Self::range(addr, data.len())?;
        self.bytes[range].copy_from_slice(data);
        Ok(())
    }
}

/// Persistent part of a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeRecord {
    pub acc_mode: AccMode,
    pub acc_sensitivity: AccSensitivity,
    pub cur_variant: u8,
    pub variants: [VariantConfig; 2],
}

impl ModeRecord {
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut buffer = [0u8; RECORD_SIZE];
        buffer[..MAGIC_SIZE].copy_from_slice(&RECORD_MAGIC.to_le_bytes());

        let payload = &mut buffer[MAGIC_SIZE..CRC_OFFSET];
        payload[0] = self.acc_mode.as_raw();
        payload[1] = self.acc_sensitivity.as_raw();
        payload[2] = self.cur_variant;
        for (variant, chunk) in self
            .variants
            .iter()
            .zip(payload[HEADER_FIELDS..].chunks_exact_mut(VARIANT_SIZE))
        {
            chunk[0] = variant.prime.as_raw();
            chunk[1] = variant.palette.num_colors();
            chunk[2..].copy_from_slice(variant.palette.slots());
        }

        let crc = compute_crc(&buffer[..CRC_OFFSET]);
        buffer[CRC_OFFSET..].copy_from_slice(&crc.to_le_bytes());
        buffer
    }

    /// Validate and parse a stored record
    ///
    /// Nothing is returned unless every field is valid.
    pub fn decode(buffer: &[u8; RECORD_SIZE]) -> Result<Self, LoadError> {
        let magic = u16::from_le_bytes([buffer[0], buffer[1]]);
        if magic != RECORD_MAGIC {
            return Err(LoadError::InvalidMagic);
        }

        let stored_crc = u32::from_le_bytes([
            buffer[CRC_OFFSET],
            buffer[CRC_OFFSET + 1],
            buffer[CRC_OFFSET + 2],
            buffer[CRC_OFFSET + 3],
        ]);
        if stored_crc != compute_crc(&buffer[..CRC_OFFSET]) {
            return Err(LoadError::ChecksumMismatch);
        }

        let payload = &buffer[MAGIC_SIZE..CRC_OFFSET];
        let acc_mode = AccMode::from_raw(payload[0]).ok_or(LoadError::InvalidData)?;
        let acc_sensitivity =
            AccSensitivity::from_raw(payload[1]).ok_or(LoadError::InvalidData)?;
        let cur_variant = payload[2];
        if cur_variant > 1 {
            return Err(LoadError::InvalidData);
        }

        let mut chunks = payload[HEADER_FIELDS..].chunks_exact(VARIANT_SIZE);
        let mut next_variant = || -> Result<VariantConfig, LoadError> {
            let chunk = chunks.next().ok_or(LoadError::InvalidData)?;
            let prime = Prime::from_raw(chunk[0]).ok_or(LoadError::InvalidData)?;
            let mut colors = [0u8; PALETTE_SIZE];
            colors.copy_from_slice(&chunk[2..]);
            let palette = Palette::new(colors, chunk[1]).ok_or(LoadError::InvalidData)?;
            Ok(VariantConfig::new(prime, palette))
        };
        let variants = [next_variant()?, next_variant()?];

        Ok(Self {
            acc_mode,
            acc_sensitivity,
            cur_variant,
            variants,
        })
    }
}

/// Compute CRC32 checksum.
fn compute_crc(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
