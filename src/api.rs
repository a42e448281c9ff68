//! High-level API for profile settings operations

use log::debug;
use serde::Serialize;
use std::path::Path;

use crate::exceptions::Result;
use crate::xam::settings::defaults::dashboard_defaults;
use crate::xam::settings::profile::SettingOutcome;
use crate::xam::settings::{
    FileStore, IdentityKind, SettingRecord, SettingStore, UserProfile, UserSetting,
};

/// Options for creating a profile
#[derive(Debug, Default)]
pub struct ProfileOptions {
    /// Gamertag; a slot-derived one is used when absent
    pub gamertag: Option<String>,
    /// Leave the dashboard defaults out
    pub skip_defaults: bool,
}

/// Offline XUID for a local user slot (0xE top nibble marks offline ids)
pub fn offline_xuid(user_index: u8) -> u64 {
    0xE000_0000_0000_0001 + user_index as u64
}

/// Create a profile for a local user slot
///
/// The slot decides the offline XUID; the dashboard defaults are
/// pre-populated unless the options opt out.
pub fn create_profile(user_index: u8, options: ProfileOptions) -> UserProfile {
    let name = options
        .gamertag
        .unwrap_or_else(|| format!("Player{}", user_index + 1));
    let mut profile = UserProfile::new(offline_xuid(user_index), name);

    if !options.skip_defaults {
        for setting in dashboard_defaults() {
            profile.add_setting(setting);
        }
    }

    debug!(
        "created profile {:?} with {} settings",
        profile.name(),
        profile.len()
    );
    profile
}

/// Save every setting of a profile into a settings directory
pub fn save_profile_settings(profile: &UserProfile, dir: &Path) -> Result<Vec<SettingOutcome>> {
    let mut store = FileStore::open(dir)?;
    Ok(profile.save_all(&mut store))
}

/// Load every setting of a profile from a settings directory
///
/// Settings the directory has no bytes for keep their constructed defaults.
pub fn load_profile_settings(profile: &mut UserProfile, dir: &Path) -> Result<Vec<SettingOutcome>> {
    let store = FileStore::open(dir)?;
    Ok(profile.load_all(&store))
}

/// One decoded record in an inspect report
#[derive(Debug, Serialize)]
pub struct SettingReport {
    pub setting_id: String,
    pub data_type: String,
    pub source: String,
    pub title_specific: bool,
    pub value: String,
}

/// Undecodable entry in an inspect report
#[derive(Debug, Serialize)]
pub struct SettingReportError {
    pub setting_id: String,
    pub error: String,
}

/// Result of inspecting a settings directory
#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub directory: String,
    pub settings: Vec<SettingReport>,
    pub errors: Vec<SettingReportError>,
}

/// Decode every record in a settings directory into a summary
///
/// Records are stored keyed to the owning profile's XUID, so the identity
/// bytes are read as one. A record that fails to decode lands in the error
/// list; the rest of the directory is still reported.
pub fn inspect_settings(dir: &Path) -> Result<InspectReport> {
    let store = FileStore::open(dir)?;
    let mut report = InspectReport {
        directory: dir.display().to_string(),
        settings: Vec::new(),
        errors: Vec::new(),
    };

    for setting_id in store.scan()? {
        let id_str = format!("{setting_id:#010X}");
        let outcome = store.read(setting_id).and_then(|bytes| {
            let bytes = bytes.ok_or_else(|| {
                crate::exceptions::ProfileError::Generic("entry vanished during scan".into())
            })?;
            SettingRecord::unpack(&bytes, IdentityKind::Xuid)
        });
        match outcome {
            Ok(record) => report.settings.push(SettingReport {
                setting_id: id_str,
                data_type: format!("{:?}", record.header.setting_type),
                source: format!("{:?}", record.source),
                title_specific: UserSetting::id_is_title_specific(record.setting_id),
                value: record.data.to_string(),
            }),
            Err(e) => report.errors.push(SettingReportError {
                setting_id: id_str,
                error: e.to_string(),
            }),
        }
    }

    debug!(
        "inspected {:?}: {} decoded, {} failed",
        dir,
        report.settings.len(),
        report.errors.len()
    );
    Ok(report)
}
