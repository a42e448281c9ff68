// src/xam/settings/defaults.rs
// Well-known dashboard setting ids and the defaults a fresh profile carries
// For wire-format constants, see constants.rs

use super::setting::UserSetting;
use super::user_data::UserData;

// Ids follow the platform scheme: type in the top 4 bits, declared size in
// bits 16..28, local id in the low bits.
pub const XPROFILE_PERMISSIONS: u32 = 0x1004_0000;
pub const XPROFILE_GAMER_TYPE: u32 = 0x1004_0001;
pub const XPROFILE_GAMER_YAXIS_INVERSION: u32 = 0x1004_0002;
pub const XPROFILE_OPTION_CONTROLLER_VIBRATION: u32 = 0x1004_0003;
pub const XPROFILE_GAMERCARD_ZONE: u32 = 0x1004_0004;
pub const XPROFILE_GAMERCARD_REGION: u32 = 0x1004_0005;
pub const XPROFILE_GAMERCARD_CRED: u32 = 0x1004_0006;
pub const XPROFILE_GAMERCARD_REP: u32 = 0x5004_000B;
pub const XPROFILE_OPTION_VOICE_MUTED: u32 = 0x1004_000C;
pub const XPROFILE_OPTION_VOICE_THRU_SPEAKERS: u32 = 0x1004_000D;
pub const XPROFILE_OPTION_VOICE_VOLUME: u32 = 0x1004_000E;
pub const XPROFILE_GAMERCARD_PICTURE_KEY: u32 = 0x4064_000F;
pub const XPROFILE_GAMERCARD_MOTTO: u32 = 0x402C_0011;
pub const XPROFILE_GAMERCARD_TITLES_PLAYED: u32 = 0x1004_0012;
pub const XPROFILE_GAMERCARD_ACHIEVEMENTS_EARNED: u32 = 0x1004_0013;
pub const XPROFILE_GAMER_DIFFICULTY: u32 = 0x1004_0015;
pub const XPROFILE_GAMER_CONTROL_SENSITIVITY: u32 = 0x1004_0018;
pub const XPROFILE_GAMER_PREFERRED_COLOR_FIRST: u32 = 0x1004_001D;
pub const XPROFILE_GAMER_PREFERRED_COLOR_SECOND: u32 = 0x1004_001E;
pub const XPROFILE_GAMER_ACTION_AUTO_AIM: u32 = 0x1004_0022;
pub const XPROFILE_GAMER_ACTION_AUTO_CENTER: u32 = 0x1004_0023;
pub const XPROFILE_GAMER_ACTION_MOVEMENT_CONTROL: u32 = 0x1004_0024;
pub const XPROFILE_GAMER_RACE_TRANSMISSION: u32 = 0x1004_0026;
pub const XPROFILE_GAMER_RACE_CAMERA_LOCATION: u32 = 0x1004_0027;
pub const XPROFILE_GAMER_RACE_BRAKE_CONTROL: u32 = 0x1004_0028;
pub const XPROFILE_GAMER_RACE_ACCELERATOR_CONTROL: u32 = 0x1004_0029;
pub const XPROFILE_GAMERCARD_TITLE_CRED_EARNED: u32 = 0x1004_0038;
pub const XPROFILE_GAMERCARD_TITLE_ACHIEVEMENTS_EARNED: u32 = 0x1004_0039;

/// The settings the dashboard expects every profile to answer for
///
/// Values mirror the console's out-of-box state; titles override the ones
/// they care about.
pub fn dashboard_defaults() -> Vec<UserSetting> {
    vec![
        UserSetting::new(XPROFILE_PERMISSIONS, 0i32),
        UserSetting::new(XPROFILE_GAMER_TYPE, 0i32),
        UserSetting::new(XPROFILE_GAMER_YAXIS_INVERSION, 0i32),
        UserSetting::new(XPROFILE_OPTION_CONTROLLER_VIBRATION, 3i32),
        UserSetting::new(XPROFILE_GAMERCARD_ZONE, 0i32),
        UserSetting::new(XPROFILE_GAMERCARD_REGION, 0i32),
        UserSetting::new(XPROFILE_GAMERCARD_CRED, 0i32),
        UserSetting::new(XPROFILE_GAMERCARD_REP, 0.0f32),
        UserSetting::new(XPROFILE_OPTION_VOICE_MUTED, 0i32),
        UserSetting::new(XPROFILE_OPTION_VOICE_THRU_SPEAKERS, 0i32),
        UserSetting::new(XPROFILE_OPTION_VOICE_VOLUME, 0x64i32),
        UserSetting::new(XPROFILE_GAMERCARD_PICTURE_KEY, UserData::from("gamercard_picture_key_default")),
        UserSetting::new(XPROFILE_GAMERCARD_MOTTO, UserData::from("")),
        UserSetting::new(XPROFILE_GAMERCARD_TITLES_PLAYED, 1i32),
        UserSetting::new(XPROFILE_GAMERCARD_ACHIEVEMENTS_EARNED, 0i32),
        UserSetting::new(XPROFILE_GAMER_DIFFICULTY, 0i32),
        UserSetting::new(XPROFILE_GAMER_CONTROL_SENSITIVITY, 0i32),
        UserSetting::new(XPROFILE_GAMER_PREFERRED_COLOR_FIRST, 0i32),
        UserSetting::new(XPROFILE_GAMER_PREFERRED_COLOR_SECOND, 0i32),
        UserSetting::new(XPROFILE_GAMER_ACTION_AUTO_AIM, 1i32),
        UserSetting::new(XPROFILE_GAMER_ACTION_AUTO_CENTER, 0i32),
        UserSetting::new(XPROFILE_GAMER_ACTION_MOVEMENT_CONTROL, 0i32),
        UserSetting::new(XPROFILE_GAMER_RACE_TRANSMISSION, 0i32),
        UserSetting::new(XPROFILE_GAMER_RACE_CAMERA_LOCATION, 0i32),
        UserSetting::new(XPROFILE_GAMER_RACE_BRAKE_CONTROL, 0i32),
        UserSetting::new(XPROFILE_GAMER_RACE_ACCELERATOR_CONTROL, 0i32),
        UserSetting::new(XPROFILE_GAMERCARD_TITLE_CRED_EARNED, 0i32),
        UserSetting::new(XPROFILE_GAMERCARD_TITLE_ACHIEVEMENTS_EARNED, 0i32),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids_are_unique() {
        let defaults = dashboard_defaults();
        let mut ids: Vec<u32> = defaults.iter().map(|s| s.setting_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), defaults.len());
    }

    #[test]
    fn test_default_kinds_match_id_scheme() {
        for setting in dashboard_defaults() {
            let declared = setting.key().declared_type().unwrap();
            assert_eq!(
                declared,
                setting.data().data_type(),
                "kind mismatch for {:#010x}",
                setting.setting_id()
            );
        }
    }

    #[test]
    fn test_none_are_title_specific() {
        assert!(dashboard_defaults().iter().all(|s| !s.is_title_specific()));
    }
}

// 🎮🧰📋
