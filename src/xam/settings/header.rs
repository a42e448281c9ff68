// src/xam/settings/header.rs
// Setting header codec - fixed 24-byte layout, big-endian guest byte order

use log::trace;

use super::constants::SETTING_HEADER_SIZE;
use super::user_data::{SettingType, UserData};
use crate::exceptions::{ProfileError, Result};

/// Decoded interpretation of the header's trailing 8 bytes
///
/// The wire stores these as one 8-byte region whose meaning depends on the
/// type tag. They are modeled as a sum type so no path can read a length as
/// a number or vice versa; every codec branch goes through the tag first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeaderValue {
    /// Byte length, used by Content / UnicodeString / Binary
    Size(u32),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    Float32(f32),
    DateTime(u64),
}

impl HeaderValue {
    /// Write the union region (8 bytes). 32-bit values occupy the first four
    /// bytes, the remainder stays zero.
    fn pack_into(&self, out: &mut [u8]) {
        debug_assert!(out.len() == 8);
        out.fill(0);
        match self {
            HeaderValue::Size(v) => out[0..4].copy_from_slice(&v.to_be_bytes()),
            HeaderValue::Int32(v) => out[0..4].copy_from_slice(&v.to_be_bytes()),
            HeaderValue::Int64(v) => out[0..8].copy_from_slice(&v.to_be_bytes()),
            HeaderValue::Float64(v) => out[0..8].copy_from_slice(&v.to_be_bytes()),
            HeaderValue::Float32(v) => out[0..4].copy_from_slice(&v.to_be_bytes()),
            HeaderValue::DateTime(v) => out[0..8].copy_from_slice(&v.to_be_bytes()),
        }
    }

    /// Interpret the union region for a known tag
    fn unpack(tag: SettingType, data: &[u8]) -> Self {
        debug_assert!(data.len() == 8);
        let word = |range: std::ops::Range<usize>| -> [u8; 4] {
            let mut b = [0u8; 4];
            b.copy_from_slice(&data[range]);
            b
        };
        let dword = || -> [u8; 8] {
            let mut b = [0u8; 8];
            b.copy_from_slice(data);
            b
        };
        match tag {
            SettingType::Content | SettingType::UnicodeString | SettingType::Binary => {
                HeaderValue::Size(u32::from_be_bytes(word(0..4)))
            }
            SettingType::Int32 => HeaderValue::Int32(i32::from_be_bytes(word(0..4))),
            SettingType::Int64 => HeaderValue::Int64(i64::from_be_bytes(dword())),
            SettingType::Float64 => HeaderValue::Float64(f64::from_be_bytes(dword())),
            SettingType::Float32 => HeaderValue::Float32(f32::from_be_bytes(word(0..4))),
            SettingType::DateTime => HeaderValue::DateTime(u64::from_be_bytes(dword())),
        }
    }
}

/// Setting header - 24 bytes total
#[derive(Clone, Debug, PartialEq)]
pub struct SettingHeader {
    pub setting_id: u32,
    pub reserved1: u32,
    pub setting_type: SettingType,
    pub reserved2: [u8; 3],
    pub reserved3: u32,
    pub value: HeaderValue,
}

impl SettingHeader {
    /// Build the header a freshly constructed setting carries
    pub fn for_setting(setting_id: u32, data: &UserData) -> Self {
        SettingHeader {
            setting_id,
            reserved1: 0,
            setting_type: data.data_type(),
            reserved2: [0; 3],
            reserved3: 0,
            value: data.header_value(),
        }
    }

    /// Pack header to bytes
    pub fn pack(&self) -> [u8; SETTING_HEADER_SIZE] {
        let mut bytes = [0u8; SETTING_HEADER_SIZE];

        bytes[0..4].copy_from_slice(&self.setting_id.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.reserved1.to_be_bytes());
        bytes[8] = self.setting_type as u8;
        bytes[9..12].copy_from_slice(&self.reserved2);
        bytes[12..16].copy_from_slice(&self.reserved3.to_be_bytes());
        self.value.pack_into(&mut bytes[16..24]);

        bytes
    }

    /// Unpack header from bytes
    ///
    /// The tag is read before any interpretation of the trailing union.
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if data.len() < SETTING_HEADER_SIZE {
            return Err(ProfileError::TruncatedHeader {
                expected: SETTING_HEADER_SIZE,
                actual: data.len(),
            });
        }

        use std::convert::TryInto;

        let setting_id = u32::from_be_bytes(
            data[0..4]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid setting id bytes".into()))?,
        );
        let reserved1 = u32::from_be_bytes(
            data[4..8]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid reserved bytes".into()))?,
        );
        let setting_type = SettingType::from_raw(data[8])?;
        let mut reserved2 = [0u8; 3];
        reserved2.copy_from_slice(&data[9..12]);
        let reserved3 = u32::from_be_bytes(
            data[12..16]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid reserved bytes".into()))?,
        );
        let value = HeaderValue::unpack(setting_type, &data[16..24]);

        trace!(
            "unpacked header: id={:#010x}, tag={:?}, value={:?}",
            setting_id, setting_type, value
        );

        Ok(SettingHeader {
            setting_id,
            reserved1,
            setting_type,
            reserved2,
            reserved3,
            value,
        })
    }
}


// 🎮📐🧾
