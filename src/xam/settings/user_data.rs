// src/xam/settings/user_data.rs
// Typed user-data values and their wire encoding rules

use chrono::{DateTime, TimeZone, Utc};
use log::trace;

use super::constants::MAX_SETTING_SIZE;
use super::header::HeaderValue;
use crate::exceptions::{ProfileError, Result};

/// Seconds between the FILETIME epoch (1601-01-01) and the Unix epoch
const FILETIME_UNIX_OFFSET: i64 = 11_644_473_600;

/// Wire type tags for setting values
///
/// This is the platform's closed enumeration. Tag values are part of the
/// format and must match exactly; anything else fails decoding.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingType {
    Content = 0x00,
    Int32 = 0x01,
    Int64 = 0x02,
    Float64 = 0x03,
    UnicodeString = 0x04,
    Float32 = 0x05,
    Binary = 0x06,
    DateTime = 0x07,
}

impl SettingType {
    /// Map a raw tag byte to a type, rejecting everything outside the table
    pub fn from_raw(raw: u8) -> Result<Self> {
        match raw {
            0x00 => Ok(SettingType::Content),
            0x01 => Ok(SettingType::Int32),
            0x02 => Ok(SettingType::Int64),
            0x03 => Ok(SettingType::Float64),
            0x04 => Ok(SettingType::UnicodeString),
            0x05 => Ok(SettingType::Float32),
            0x06 => Ok(SettingType::Binary),
            0x07 => Ok(SettingType::DateTime),
            other => Err(ProfileError::UnknownSettingType(other)),
        }
    }

    /// Variable-length types keep their payload outside the header and use
    /// the header union as a byte length
    pub fn is_variable_length(self) -> bool {
        matches!(
            self,
            SettingType::Content | SettingType::UnicodeString | SettingType::Binary
        )
    }
}

/// A typed setting value
///
/// Exactly one kind is active per instance; the kind decides how the header
/// union is interpreted and whether an out-of-line payload exists. Strings
/// are held as native Rust strings and converted to UTF-16 at the wire
/// boundary only.
#[derive(Clone, Debug, PartialEq)]
pub enum UserData {
    /// Opaque content reference (distinct wire tag from Binary)
    Content(Vec<u8>),
    Int32(i32),
    Int64(i64),
    Float64(f64),
    UnicodeString(String),
    Float32(f32),
    Binary(Vec<u8>),
    /// FILETIME: 100ns ticks since 1601-01-01 UTC
    DateTime(u64),
}

impl UserData {
    /// Wire tag for the active kind
    pub fn data_type(&self) -> SettingType {
        match self {
            UserData::Content(_) => SettingType::Content,
            UserData::Int32(_) => SettingType::Int32,
            UserData::Int64(_) => SettingType::Int64,
            UserData::Float64(_) => SettingType::Float64,
            UserData::UnicodeString(_) => SettingType::UnicodeString,
            UserData::Float32(_) => SettingType::Float32,
            UserData::Binary(_) => SettingType::Binary,
            UserData::DateTime(_) => SettingType::DateTime,
        }
    }

    /// Byte size of the encoded value before the ceiling is applied
    ///
    /// Strings count UTF-16 code units plus the trailing terminator.
    pub fn natural_size(&self) -> u32 {
        match self {
            UserData::Content(data) | UserData::Binary(data) => data.len() as u32,
            UserData::UnicodeString(s) => {
                (s.encode_utf16().count() as u32 + 1) * 2
            }
            UserData::Int32(_) | UserData::Float32(_) => 4,
            UserData::Int64(_) | UserData::Float64(_) | UserData::DateTime(_) => 8,
        }
    }

    /// Declared wire length: natural size capped at the setting ceiling
    pub fn capped_size(&self) -> u32 {
        self.natural_size().min(MAX_SETTING_SIZE)
    }

    /// Header union value for the active kind
    pub fn header_value(&self) -> HeaderValue {
        match self {
            UserData::Content(_) | UserData::UnicodeString(_) | UserData::Binary(_) => {
                HeaderValue::Size(self.capped_size())
            }
            UserData::Int32(v) => HeaderValue::Int32(*v),
            UserData::Int64(v) => HeaderValue::Int64(*v),
            UserData::Float64(v) => HeaderValue::Float64(*v),
            UserData::Float32(v) => HeaderValue::Float32(*v),
            UserData::DateTime(v) => HeaderValue::DateTime(*v),
        }
    }

    /// Out-of-line payload bytes for variable-length kinds, already capped
    ///
    /// Fixed-width kinds live entirely in the header union and return None.
    /// Bytes beyond the ceiling are dropped here, silently: the ceiling is a
    /// wire-format limit, not an error.
    pub fn payload_bytes(&self) -> Option<Vec<u8>> {
        let capped = self.capped_size() as usize;
        match self {
            UserData::Content(data) | UserData::Binary(data) => {
                Some(data[..capped.min(data.len())].to_vec())
            }
            UserData::UnicodeString(s) => {
                let mut bytes = Vec::with_capacity(capped);
                for unit in s.encode_utf16().chain(std::iter::once(0u16)) {
                    bytes.extend_from_slice(&unit.to_be_bytes());
                }
                bytes.truncate(capped);
                Some(bytes)
            }
            _ => None,
        }
    }

    /// Rebuild a typed value from a decoded header union and payload slice
    ///
    /// The payload slice must already be exactly the declared length; the
    /// record codec is responsible for cutting it.
    pub fn decode(tag: SettingType, value: &HeaderValue, payload: &[u8]) -> Result<UserData> {
        trace!("decoding user data: tag={:?}, payload={} bytes", tag, payload.len());
        match (tag, value) {
            (SettingType::Content, HeaderValue::Size(_)) => {
                Ok(UserData::Content(payload.to_vec()))
            }
            (SettingType::Binary, HeaderValue::Size(_)) => {
                Ok(UserData::Binary(payload.to_vec()))
            }
            (SettingType::UnicodeString, HeaderValue::Size(_)) => {
                let mut units: Vec<u16> = payload
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect();
                if units.last() == Some(&0) {
                    units.pop();
                }
                Ok(UserData::UnicodeString(String::from_utf16_lossy(&units)))
            }
            (SettingType::Int32, HeaderValue::Int32(v)) => Ok(UserData::Int32(*v)),
            (SettingType::Int64, HeaderValue::Int64(v)) => Ok(UserData::Int64(*v)),
            (SettingType::Float64, HeaderValue::Float64(v)) => Ok(UserData::Float64(*v)),
            (SettingType::Float32, HeaderValue::Float32(v)) => Ok(UserData::Float32(*v)),
            (SettingType::DateTime, HeaderValue::DateTime(v)) => Ok(UserData::DateTime(*v)),
            (tag, value) => Err(ProfileError::Generic(format!(
                "header value {:?} does not match tag {:?}",
                value, tag
            ))),
        }
    }

    /// Interpret a DateTime value as a UTC timestamp
    ///
    /// Returns None for non-DateTime kinds or FILETIME values outside the
    /// representable range.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            UserData::DateTime(ticks) => {
                let secs = (*ticks / 10_000_000) as i64 - FILETIME_UNIX_OFFSET;
                let nanos = ((*ticks % 10_000_000) * 100) as u32;
                Utc.timestamp_opt(secs, nanos).single()
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for UserData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserData::Int32(v) => write!(f, "{v}"),
            UserData::Int64(v) => write!(f, "{v}"),
            UserData::Float32(v) => write!(f, "{v}"),
            UserData::Float64(v) => write!(f, "{v}"),
            UserData::UnicodeString(s) => write!(f, "\"{s}\""),
            UserData::DateTime(ticks) => match self.as_datetime() {
                Some(ts) => write!(f, "{}", ts.to_rfc3339()),
                None => write!(f, "filetime:{ticks}"),
            },
            UserData::Binary(data) | UserData::Content(data) => {
                let preview = &data[..data.len().min(16)];
                write!(f, "{} bytes [{}]", data.len(), hex::encode(preview))
            }
        }
    }
}

impl From<i32> for UserData {
    fn from(v: i32) -> Self {
        UserData::Int32(v)
    }
}

// The platform enumeration has no unsigned tag; unsigned 32-bit input is
// carried as Int32, exactly as the original console software does.
impl From<u32> for UserData {
    fn from(v: u32) -> Self {
        UserData::Int32(v as i32)
    }
}

impl From<i64> for UserData {
    fn from(v: i64) -> Self {
        UserData::Int64(v)
    }
}

impl From<f32> for UserData {
    fn from(v: f32) -> Self {
        UserData::Float32(v)
    }
}

impl From<f64> for UserData {
    fn from(v: f64) -> Self {
        UserData::Float64(v)
    }
}

impl From<&str> for UserData {
    fn from(v: &str) -> Self {
        UserData::UnicodeString(v.to_string())
    }
}

impl From<String> for UserData {
    fn from(v: String) -> Self {
        UserData::UnicodeString(v)
    }
}

impl From<Vec<u8>> for UserData {
    fn from(v: Vec<u8>) -> Self {
        UserData::Binary(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_table_is_exact() {
        assert_eq!(SettingType::from_raw(0x00).unwrap(), SettingType::Content);
        assert_eq!(SettingType::from_raw(0x04).unwrap(), SettingType::UnicodeString);
        assert_eq!(SettingType::from_raw(0x07).unwrap(), SettingType::DateTime);
        assert!(matches!(
            SettingType::from_raw(0x08),
            Err(ProfileError::UnknownSettingType(0x08))
        ));
        assert!(matches!(
            SettingType::from_raw(0xFF),
            Err(ProfileError::UnknownSettingType(0xFF))
        ));
    }

    #[test]
    fn test_kind_matches_tag() {
        assert_eq!(UserData::Int32(1).data_type(), SettingType::Int32);
        assert_eq!(UserData::from(1u32).data_type(), SettingType::Int32);
        assert_eq!(UserData::from("x").data_type(), SettingType::UnicodeString);
        assert_eq!(UserData::Content(vec![]).data_type(), SettingType::Content);
    }

    #[test]
    fn test_string_size_counts_terminator() {
        let data = UserData::from("abc");
        assert_eq!(data.natural_size(), 8); // 3 units + NUL, 2 bytes each
        assert_eq!(data.capped_size(), 8);
    }

    #[test]
    fn test_string_size_is_capped() {
        let data = UserData::UnicodeString("x".repeat(600));
        assert_eq!(data.natural_size(), 1202); // (600 + 1) * 2
        assert_eq!(data.capped_size(), MAX_SETTING_SIZE);
        assert_eq!(data.payload_bytes().unwrap().len(), MAX_SETTING_SIZE as usize);
    }

    #[test]
    fn test_binary_payload_is_capped() {
        let data = UserData::Binary(vec![0xAA; 1500]);
        assert_eq!(data.capped_size(), 1000);
        let payload = data.payload_bytes().unwrap();
        assert_eq!(payload.len(), 1000);
        assert!(payload.iter().all(|&b| b == 0xAA));
    }

    #[test]
    fn test_string_round_trip() {
        let data = UserData::from("Pumpkin Hill");
        let payload = data.payload_bytes().unwrap();
        let decoded =
            UserData::decode(SettingType::UnicodeString, &data.header_value(), &payload).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn test_capped_string_decodes_to_500_units() {
        let data = UserData::UnicodeString("y".repeat(600));
        let payload = data.payload_bytes().unwrap();
        let decoded =
            UserData::decode(SettingType::UnicodeString, &data.header_value(), &payload).unwrap();
        match decoded {
            UserData::UnicodeString(s) => assert_eq!(s.encode_utf16().count(), 500),
            other => panic!("expected a string, got {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_header_value_is_rejected() {
        let err = UserData::decode(SettingType::Int32, &HeaderValue::Size(4), &[]);
        assert!(matches!(err, Err(ProfileError::Generic(_))));
    }

    #[test]
    fn test_filetime_conversion() {
        // 2005-11-22 00:00:00 UTC, the console's launch day
        let unix_secs = 1_132_617_600u64;
        let ticks = (unix_secs + 11_644_473_600) * 10_000_000;
        let data = UserData::DateTime(ticks);
        let ts = data.as_datetime().unwrap();
        assert_eq!(ts.timestamp(), unix_secs as i64);
        assert!(UserData::Int32(0).as_datetime().is_none());
    }
}

// 🎮🧬🔢
