// src/xam/settings/setting.rs
// The setting entity: id, provenance, header, owned value

use super::constants::{KEY_ID_MASK, KEY_SIZE_MASK, KEY_SIZE_SHIFT, KEY_TYPE_SHIFT, TITLE_SPECIFIC_MASK};
use super::header::SettingHeader;
use super::record::SettingRecord;
use super::user_data::{SettingType, UserData};
use crate::exceptions::Result;

/// Who supplied a setting's current value
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingSource {
    NotSet = 0,
    Default = 1,
    Title = 2,
    Unknown = 3,
}

impl SettingSource {
    /// Raw selector values outside the table collapse to Unknown
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => SettingSource::NotSet,
            1 => SettingSource::Default,
            2 => SettingSource::Title,
            _ => SettingSource::Unknown,
        }
    }
}

/// Bitfield view of a setting id: id:14, unk:2, size:12, type:4
///
/// The platform packs the local id, declared payload size, and data type
/// into the 32-bit setting id itself. The declared fields are advisory;
/// the header remains authoritative for the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettingKey(u32);

impl SettingKey {
    pub fn new(raw: u32) -> Self {
        SettingKey(raw)
    }

    /// The full 32-bit setting id
    pub fn raw(self) -> u32 {
        self.0
    }

    /// Local id portion (low 14 bits)
    pub fn local_id(self) -> u32 {
        self.0 & KEY_ID_MASK
    }

    /// Declared value size in bytes
    pub fn declared_size(self) -> u32 {
        (self.0 >> KEY_SIZE_SHIFT) & KEY_SIZE_MASK
    }

    /// Declared data type (top 4 bits)
    pub fn declared_type(self) -> Result<SettingType> {
        SettingType::from_raw((self.0 >> KEY_TYPE_SHIFT) as u8)
    }
}

/// A single typed, identified setting owned by a profile
#[derive(Clone, Debug)]
pub struct UserSetting {
    key: SettingKey,
    source: SettingSource,
    header: SettingHeader,
    data: UserData,
}

impl UserSetting {
    /// Construct with provenance Default and a header matching the value
    pub fn new(setting_id: u32, data: impl Into<UserData>) -> Self {
        let data = data.into();
        UserSetting {
            key: SettingKey::new(setting_id),
            source: SettingSource::Default,
            header: SettingHeader::for_setting(setting_id, &data),
            data,
        }
    }

    pub fn setting_id(&self) -> u32 {
        self.key.raw()
    }

    pub fn key(&self) -> SettingKey {
        self.key
    }

    pub fn source(&self) -> SettingSource {
        self.source
    }

    pub fn header(&self) -> &SettingHeader {
        &self.header
    }

    pub fn data(&self) -> &UserData {
        &self.data
    }

    pub fn set_source(&mut self, source: SettingSource) {
        self.source = source;
    }

    /// Adopt a freshly decoded record wholesale: header, provenance, and
    /// value. Loaded state supersedes whatever construction produced,
    /// including reserved header bits a synthetic header would not carry.
    pub fn apply_loaded(&mut self, record: SettingRecord) {
        debug_assert_eq!(record.setting_id, self.setting_id());
        self.header = record.header;
        self.source = record.source;
        self.data = record.data;
    }

    /// Whether an id belongs to a title rather than the platform
    pub fn id_is_title_specific(setting_id: u32) -> bool {
        (setting_id & TITLE_SPECIFIC_MASK) == TITLE_SPECIFIC_MASK
    }

    pub fn is_title_specific(&self) -> bool {
        Self::id_is_title_specific(self.key.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xam::settings::header::HeaderValue;

    #[test]
    fn test_new_setting_defaults() {
        let setting = UserSetting::new(0x1000, 42i32);
        assert_eq!(setting.setting_id(), 0x1000);
        assert_eq!(setting.source(), SettingSource::Default);
        assert_eq!(setting.header().setting_id, 0x1000);
        assert_eq!(setting.header().value, HeaderValue::Int32(42));
        assert_eq!(setting.header().setting_type, setting.data().data_type());
    }

    #[test]
    fn test_title_specificity_mask() {
        assert!(UserSetting::id_is_title_specific(0x0000_3F00));
        assert!(UserSetting::id_is_title_specific(0x6363_3F45));
        assert!(!UserSetting::id_is_title_specific(0x0000_1234));
        assert!(!UserSetting::id_is_title_specific(0x0000_3E00));
    }

    #[test]
    fn test_source_from_raw() {
        assert_eq!(SettingSource::from_raw(0), SettingSource::NotSet);
        assert_eq!(SettingSource::from_raw(2), SettingSource::Title);
        assert_eq!(SettingSource::from_raw(17), SettingSource::Unknown);
    }

    #[test]
    fn test_key_bitfields() {
        // XPROFILE_GAMERCARD_MOTTO: wstring, 0x2C bytes, local id 0x11
        let key = SettingKey::new(0x402C_0011);
        assert_eq!(key.local_id(), 0x11);
        assert_eq!(key.declared_size(), 0x2C);
        assert_eq!(key.declared_type().unwrap(), SettingType::UnicodeString);
    }
}

// 🎮🏷️🗃️
