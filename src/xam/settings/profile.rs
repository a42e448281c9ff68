// src/xam/settings/profile.rs
// Per-user settings collection: ordered, id-indexed, load/save orchestration

use log::{debug, trace};
use std::collections::{BTreeMap, HashMap};

use super::record::{IdentityKind, RecordIdentity, SettingRecord};
use super::setting::UserSetting;
use super::store::SettingStore;
use crate::exceptions::{ProfileError, Result};

/// Per-setting result of an aggregate load/save pass
#[derive(Debug)]
pub struct SettingOutcome {
    pub setting_id: u32,
    pub result: Result<()>,
}

/// One user's settings collection
///
/// Settings live in an id-keyed map; a separate id list preserves insertion
/// order so saves are deterministic and reproducible. The two are always
/// mutated together. The profile identity (XUID) is fixed at construction.
pub struct UserProfile {
    xuid: u64,
    name: String,
    order: Vec<u32>,
    settings: HashMap<u32, UserSetting>,
    contexts: BTreeMap<u32, u32>,
}

impl std::fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserProfile")
            .field("xuid", &format_args!("{:#018x}", self.xuid))
            .field("name", &self.name)
            .field("settings", &self.order.len())
            .field("contexts", &self.contexts.len())
            .finish()
    }
}

impl UserProfile {
    pub fn new(xuid: u64, name: impl Into<String>) -> Self {
        UserProfile {
            xuid,
            name: name.into(),
            order: Vec::new(),
            settings: HashMap::new(),
            contexts: BTreeMap::new(),
        }
    }

    pub fn xuid(&self) -> u64 {
        self.xuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signin_state(&self) -> u32 {
        1
    }

    /// local | online profile
    pub fn profile_type(&self) -> u32 {
        1 | 2
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert a setting. An existing setting with the same id is replaced in
    /// place and keeps its original save-order position, so defaults can be
    /// overridden without perturbing the save layout.
    pub fn add_setting(&mut self, setting: UserSetting) {
        let id = setting.setting_id();
        if self.settings.insert(id, setting).is_none() {
            self.order.push(id);
        } else {
            trace!("replacing existing setting {:#010x}", id);
        }
    }

    /// Id-indexed lookup. Never touches the store; callers wanting fresh
    /// data trigger a load explicitly.
    pub fn get_setting(&self, setting_id: u32) -> Option<&UserSetting> {
        self.settings.get(&setting_id)
    }

    /// Settings in insertion order
    pub fn settings(&self) -> impl Iterator<Item = &UserSetting> + '_ {
        self.order.iter().filter_map(|id| self.settings.get(id))
    }

    pub fn set_context(&mut self, context_id: u32, value: u32) {
        self.contexts.insert(context_id, value);
    }

    pub fn context(&self, context_id: u32) -> Option<u32> {
        self.contexts.get(&context_id).copied()
    }

    /// Load one setting from the store
    ///
    /// Returns Ok(true) when stored bytes were decoded and applied, Ok(false)
    /// when the store has nothing for this id (the in-memory setting keeps
    /// its constructed default - absence is not an error and never removes
    /// a setting).
    pub fn load_setting(&mut self, setting_id: u32, store: &dyn SettingStore) -> Result<bool> {
        if !self.settings.contains_key(&setting_id) {
            return Err(ProfileError::Generic(format!(
                "setting {setting_id:#010x} is not in this profile"
            )));
        }

        let Some(bytes) = store.read(setting_id)? else {
            trace!("no stored bytes for {:#010x}, keeping default", setting_id);
            return Ok(false);
        };

        let record = SettingRecord::unpack(&bytes, IdentityKind::Xuid)?;
        if record.setting_id != setting_id {
            return Err(ProfileError::Generic(format!(
                "stored record for {:#010x} carries id {:#010x}",
                setting_id, record.setting_id
            )));
        }

        // Membership was checked above; the entry cannot be gone.
        if let Some(setting) = self.settings.get_mut(&setting_id) {
            setting.apply_loaded(record);
        }
        Ok(true)
    }

    /// Encode one setting and hand it to the store keyed by its id
    pub fn save_setting(&self, setting_id: u32, store: &mut dyn SettingStore) -> Result<()> {
        let setting = self.settings.get(&setting_id).ok_or_else(|| {
            ProfileError::Generic(format!("setting {setting_id:#010x} is not in this profile"))
        })?;
        let record = SettingRecord::from_setting(setting, RecordIdentity::Xuid(self.xuid));
        store.write(setting_id, &record.pack())
    }

    /// Load every setting in the collection. A failed decode is reported in
    /// that id's outcome and does not stop the remaining settings.
    pub fn load_all(&mut self, store: &dyn SettingStore) -> Vec<SettingOutcome> {
        let ids = self.order.clone();
        debug!("loading {} settings for {:#018x}", ids.len(), self.xuid);
        ids.into_iter()
            .map(|setting_id| SettingOutcome {
                setting_id,
                result: self.load_setting(setting_id, store).map(|_| ()),
            })
            .collect()
    }

    /// Save every setting in insertion order. A failed write is reported in
    /// that id's outcome and does not stop the remaining settings.
    pub fn save_all(&self, store: &mut dyn SettingStore) -> Vec<SettingOutcome> {
        debug!("saving {} settings for {:#018x}", self.order.len(), self.xuid);
        self.order
            .iter()
            .map(|&setting_id| SettingOutcome {
                setting_id,
                result: self.save_setting(setting_id, store),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xam::settings::header::HeaderValue;
    use crate::xam::settings::setting::SettingSource;
    use crate::xam::settings::store::MemoryStore;
    use crate::xam::settings::user_data::UserData;

    fn profile() -> UserProfile {
        UserProfile::new(0xE000_0000_0000_0007, "Tester")
    }

    #[test]
    fn test_add_then_get() {
        let mut profile = profile();
        profile.add_setting(UserSetting::new(0x1000, 42i32));

        let setting = profile.get_setting(0x1000).unwrap();
        assert_eq!(setting.header().value, HeaderValue::Int32(42));
        assert_eq!(setting.source(), SettingSource::Default);
        assert!(profile.get_setting(0x9999).is_none());
    }

    #[test]
    fn test_duplicate_add_overwrites_in_place() {
        let mut profile = profile();
        profile.add_setting(UserSetting::new(0x1000, 1i32));
        profile.add_setting(UserSetting::new(0x2000, 2i32));
        profile.add_setting(UserSetting::new(0x1000, 99i32));

        assert_eq!(profile.len(), 2);
        assert_eq!(
            profile.get_setting(0x1000).unwrap().header().value,
            HeaderValue::Int32(99)
        );
        let order: Vec<u32> = profile.settings().map(|s| s.setting_id()).collect();
        assert_eq!(order, vec![0x1000, 0x2000]);
    }

    #[test]
    fn test_load_with_empty_store_keeps_default() {
        let mut profile = profile();
        profile.add_setting(UserSetting::new(0x3000, 5i32));

        let store = MemoryStore::new();
        assert!(!profile.load_setting(0x3000, &store).unwrap());
        assert_eq!(profile.get_setting(0x3000).unwrap().source(), SettingSource::Default);
    }

    #[test]
    fn test_load_adopts_stored_record() {
        let mut store = MemoryStore::new();
        {
            let mut original = profile();
            let mut setting = UserSetting::new(0x3000, 123i32);
            setting.set_source(SettingSource::Title);
            original.add_setting(setting);
            assert!(original.save_all(&mut store).iter().all(|o| o.result.is_ok()));
        }

        let mut fresh = profile();
        fresh.add_setting(UserSetting::new(0x3000, 0i32));
        assert!(fresh.load_setting(0x3000, &store).unwrap());

        let loaded = fresh.get_setting(0x3000).unwrap();
        assert_eq!(loaded.source(), SettingSource::Title);
        assert_eq!(loaded.header().value, HeaderValue::Int32(123));
        assert_eq!(loaded.data(), &UserData::Int32(123));
    }

    #[test]
    fn test_save_then_load_full_round_trip() {
        let mut store = MemoryStore::new();
        let mut original = profile();
        original.add_setting(UserSetting::new(0x1004_0003, 3u32));
        original.add_setting(UserSetting::new(0x402C_0011, "Hello there"));
        original.add_setting(UserSetting::new(0x6363_3F45, UserData::Binary(vec![9; 300])));
        assert!(original.save_all(&mut store).iter().all(|o| o.result.is_ok()));

        let mut restored = profile();
        restored.add_setting(UserSetting::new(0x1004_0003, 0i32));
        restored.add_setting(UserSetting::new(0x402C_0011, ""));
        restored.add_setting(UserSetting::new(0x6363_3F45, UserData::Binary(vec![])));
        assert!(restored.load_all(&store).iter().all(|o| o.result.is_ok()));

        for setting in original.settings() {
            let other = restored.get_setting(setting.setting_id()).unwrap();
            assert_eq!(other.data(), setting.data());
            assert_eq!(other.header(), setting.header());
        }
    }

    #[test]
    fn test_save_order_is_insertion_order() {
        let mut store = MemoryStore::new();
        let mut profile = profile();
        profile.add_setting(UserSetting::new(0x2000, 2i32));
        profile.add_setting(UserSetting::new(0x1000, 1i32));
        profile.add_setting(UserSetting::new(0x3000, 3i32));

        let outcomes = profile.save_all(&mut store);
        let ids: Vec<u32> = outcomes.iter().map(|o| o.setting_id).collect();
        assert_eq!(ids, vec![0x2000, 0x1000, 0x3000]);
    }

    #[test]
    fn test_one_bad_record_does_not_abort_the_rest() {
        let mut store = MemoryStore::new();
        let mut original = profile();
        original.add_setting(UserSetting::new(0x1000, 11i32));
        original.add_setting(UserSetting::new(0x2000, 22i32));
        original.save_all(&mut store);

        // Corrupt one entry down to a truncated record
        let good = store.read(0x1000).unwrap().unwrap();
        store.write(0x1000, &good[..10]).unwrap();

        let mut fresh = profile();
        fresh.add_setting(UserSetting::new(0x1000, 0i32));
        fresh.add_setting(UserSetting::new(0x2000, 0i32));
        let outcomes = fresh.load_all(&store);

        assert!(outcomes[0].result.is_err());
        assert!(outcomes[1].result.is_ok());
        assert_eq!(
            fresh.get_setting(0x2000).unwrap().header().value,
            HeaderValue::Int32(22)
        );
    }

    #[test]
    fn test_contexts() {
        let mut profile = profile();
        profile.set_context(0x0001_0040, 7);
        assert_eq!(profile.context(0x0001_0040), Some(7));
        assert_eq!(profile.context(0xDEAD), None);
    }
}

// 🎮👤🗂️
