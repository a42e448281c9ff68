// src/xam/settings/record.rs
// Setting record codec - fixed 40-byte layout plus out-of-line payload

use log::trace;

use super::constants::{MAX_SETTING_SIZE, RECORD_HEADER_OFFSET, SETTING_RECORD_SIZE};
use super::header::{HeaderValue, SettingHeader};
use super::setting::{SettingSource, UserSetting};
use super::user_data::UserData;
use crate::exceptions::{ProfileError, Result};

/// Which interpretation of the record's identity bytes applies
///
/// The record itself carries no tag for this; the surrounding call decides,
/// exactly as it does on the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdentityKind {
    LocalSlot,
    Xuid,
}

/// The user a record belongs to: a per-console slot index or a global id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordIdentity {
    LocalSlot(u32),
    Xuid(u64),
}

impl RecordIdentity {
    pub fn kind(self) -> IdentityKind {
        match self {
            RecordIdentity::LocalSlot(_) => IdentityKind::LocalSlot,
            RecordIdentity::Xuid(_) => IdentityKind::Xuid,
        }
    }

    /// Write the identity region (8 bytes). A slot index occupies the first
    /// four bytes, the remainder stays zero.
    fn pack_into(self, out: &mut [u8]) {
        debug_assert!(out.len() == 8);
        out.fill(0);
        match self {
            RecordIdentity::LocalSlot(index) => {
                out[0..4].copy_from_slice(&index.to_be_bytes());
            }
            RecordIdentity::Xuid(xuid) => {
                out[0..8].copy_from_slice(&xuid.to_be_bytes());
            }
        }
    }

    fn unpack(kind: IdentityKind, data: &[u8]) -> Self {
        debug_assert!(data.len() == 8);
        match kind {
            IdentityKind::LocalSlot => {
                let mut b = [0u8; 4];
                b.copy_from_slice(&data[0..4]);
                RecordIdentity::LocalSlot(u32::from_be_bytes(b))
            }
            IdentityKind::Xuid => {
                let mut b = [0u8; 8];
                b.copy_from_slice(data);
                RecordIdentity::Xuid(u64::from_be_bytes(b))
            }
        }
    }
}

/// A complete on-wire setting record
#[derive(Clone, Debug, PartialEq)]
pub struct SettingRecord {
    pub source: SettingSource,
    pub identity: RecordIdentity,
    pub setting_id: u32,
    pub header: SettingHeader,
    pub data: UserData,
}

impl SettingRecord {
    /// Snapshot a setting into record form for a given identity
    pub fn from_setting(setting: &UserSetting, identity: RecordIdentity) -> Self {
        SettingRecord {
            source: setting.source(),
            identity,
            setting_id: setting.setting_id(),
            header: setting.header().clone(),
            data: setting.data().clone(),
        }
    }

    /// Pack record to bytes: the fixed 40-byte region, then the payload for
    /// variable-length kinds. The payload comes from the value's capped
    /// encoding and can never exceed the ceiling.
    pub fn pack(&self) -> Vec<u8> {
        let payload = self.data.payload_bytes().unwrap_or_default();
        assemble(
            self.source,
            self.identity,
            self.setting_id,
            &self.header.pack(),
            &payload,
        )
    }

    /// Low-level packing for callers that assemble header and payload bytes
    /// themselves, bypassing the capped encode path. Oversized payloads are
    /// a hard error here: nothing past this point would cap them.
    pub fn pack_raw(
        source: SettingSource,
        identity: RecordIdentity,
        setting_id: u32,
        header: &SettingHeader,
        payload: &[u8],
    ) -> Result<Vec<u8>> {
        if payload.len() > MAX_SETTING_SIZE as usize {
            return Err(ProfileError::PayloadTooLarge {
                size: payload.len(),
                max: MAX_SETTING_SIZE as usize,
            });
        }
        Ok(assemble(source, identity, setting_id, &header.pack(), payload))
    }

    /// Unpack a record from bytes
    ///
    /// The caller states how the identity bytes are to be read. The header
    /// tag gates all interpretation of the union and payload.
    pub fn unpack(data: &[u8], kind: IdentityKind) -> Result<Self> {
        if data.len() < SETTING_RECORD_SIZE {
            return Err(ProfileError::TruncatedRecord {
                expected: SETTING_RECORD_SIZE,
                actual: data.len(),
            });
        }

        use std::convert::TryInto;

        let source_raw = u32::from_be_bytes(
            data[0..4]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid source bytes".into()))?,
        );
        let source = SettingSource::from_raw(source_raw);
        let identity = RecordIdentity::unpack(kind, &data[4..12]);
        let setting_id = u32::from_be_bytes(
            data[12..16]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid setting id bytes".into()))?,
        );
        let header = SettingHeader::unpack(&data[RECORD_HEADER_OFFSET..SETTING_RECORD_SIZE])?;

        let payload = match header.value {
            HeaderValue::Size(size) => {
                if size > MAX_SETTING_SIZE {
                    // The encoder caps at the ceiling; a larger declared
                    // length marks a corrupt or forged record.
                    return Err(ProfileError::PayloadTooLarge {
                        size: size as usize,
                        max: MAX_SETTING_SIZE as usize,
                    });
                }
                let end = SETTING_RECORD_SIZE + size as usize;
                if data.len() < end {
                    return Err(ProfileError::TruncatedRecord {
                        expected: end,
                        actual: data.len(),
                    });
                }
                &data[SETTING_RECORD_SIZE..end]
            }
            _ => &[][..],
        };

        let value = UserData::decode(header.setting_type, &header.value, payload)?;

        trace!(
            "unpacked record: id={:#010x}, source={:?}, {} payload bytes",
            setting_id,
            source,
            payload.len()
        );

        Ok(SettingRecord {
            source,
            identity,
            setting_id,
            header,
            data: value,
        })
    }
}

fn assemble(
    source: SettingSource,
    identity: RecordIdentity,
    setting_id: u32,
    header_bytes: &[u8],
    payload: &[u8],
) -> Vec<u8> {
    let mut bytes = vec![0u8; SETTING_RECORD_SIZE + payload.len()];

    bytes[0..4].copy_from_slice(&(source as u32).to_be_bytes());
    identity.pack_into(&mut bytes[4..12]);
    bytes[12..16].copy_from_slice(&setting_id.to_be_bytes());
    bytes[RECORD_HEADER_OFFSET..SETTING_RECORD_SIZE].copy_from_slice(header_bytes);
    bytes[SETTING_RECORD_SIZE..].copy_from_slice(payload);

    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_kind_record_is_40_bytes() {
        let setting = UserSetting::new(0x1000, 42i32);
        let record = SettingRecord::from_setting(&setting, RecordIdentity::LocalSlot(0));
        assert_eq!(record.pack().len(), SETTING_RECORD_SIZE);
    }

    #[test]
    fn test_local_slot_identity_layout() {
        let setting = UserSetting::new(0x1000, 42i32);
        let record = SettingRecord::from_setting(&setting, RecordIdentity::LocalSlot(2));
        let bytes = record.pack();
        assert_eq!(&bytes[4..8], &[0, 0, 0, 2]);
        assert_eq!(&bytes[8..12], &[0; 4]);
    }

    #[test]
    fn test_xuid_identity_layout() {
        let setting = UserSetting::new(0x1000, 42i32);
        let record =
            SettingRecord::from_setting(&setting, RecordIdentity::Xuid(0xE000_0000_0000_0001));
        let bytes = record.pack();
        assert_eq!(&bytes[4..12], &[0xE0, 0, 0, 0, 0, 0, 0, 1]);

        let decoded = SettingRecord::unpack(&bytes, IdentityKind::Xuid).unwrap();
        assert_eq!(decoded.identity, RecordIdentity::Xuid(0xE000_0000_0000_0001));
    }

    #[test]
    fn test_round_trip_with_payload() {
        let setting = UserSetting::new(0x63633F45, UserData::Binary(vec![7; 65]));
        let record = SettingRecord::from_setting(&setting, RecordIdentity::LocalSlot(0));
        let bytes = record.pack();
        assert_eq!(bytes.len(), SETTING_RECORD_SIZE + 65);

        let decoded = SettingRecord::unpack(&bytes, IdentityKind::LocalSlot).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_truncated_record_is_rejected() {
        let setting = UserSetting::new(0x1000, 42i32);
        let bytes = SettingRecord::from_setting(&setting, RecordIdentity::LocalSlot(0)).pack();
        assert!(matches!(
            SettingRecord::unpack(&bytes[..39], IdentityKind::LocalSlot),
            Err(ProfileError::TruncatedRecord { expected: 40, actual: 39 })
        ));
    }

    #[test]
    fn test_truncated_payload_is_rejected() {
        let setting = UserSetting::new(0x2000, UserData::Binary(vec![1; 20]));
        let bytes = SettingRecord::from_setting(&setting, RecordIdentity::LocalSlot(0)).pack();
        let err = SettingRecord::unpack(&bytes[..bytes.len() - 4], IdentityKind::LocalSlot);
        assert!(matches!(err, Err(ProfileError::TruncatedRecord { .. })));
    }

    #[test]
    fn test_pack_raw_rejects_uncapped_payload() {
        let setting = UserSetting::new(0x2000, UserData::Binary(vec![1; 8]));
        let oversized = vec![0u8; 1001];
        let err = SettingRecord::pack_raw(
            SettingSource::Default,
            RecordIdentity::LocalSlot(0),
            0x2000,
            setting.header(),
            &oversized,
        );
        assert!(matches!(
            err,
            Err(ProfileError::PayloadTooLarge { size: 1001, max: 1000 })
        ));
    }

    #[test]
    fn test_forged_length_field_is_rejected() {
        let setting = UserSetting::new(0x2000, UserData::Binary(vec![1; 8]));
        let mut bytes = SettingRecord::from_setting(&setting, RecordIdentity::LocalSlot(0)).pack();
        // Size field lives at header offset 16, record offset 32
        bytes[32..36].copy_from_slice(&0xFFFF_u32.to_be_bytes());
        assert!(matches!(
            SettingRecord::unpack(&bytes, IdentityKind::LocalSlot),
            Err(ProfileError::PayloadTooLarge { .. })
        ));
    }

    #[test]
    fn test_capped_string_scenario() {
        // 600 code units cap to a declared length of exactly 1000 bytes
        let setting = UserSetting::new(0x2000, UserData::UnicodeString("a".repeat(600)));
        let record = SettingRecord::from_setting(&setting, RecordIdentity::LocalSlot(0));
        assert_eq!(record.header.value, HeaderValue::Size(1000));

        let decoded = SettingRecord::unpack(&record.pack(), IdentityKind::LocalSlot).unwrap();
        match decoded.data {
            UserData::UnicodeString(s) => assert_eq!(s.encode_utf16().count(), 500),
            other => panic!("expected a string, got {other:?}"),
        }
    }
}

// 🎮📼🧱
