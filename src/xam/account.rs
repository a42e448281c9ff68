// src/xam/account.rs
// Account metadata record (0x17C bytes) and its stateless bit-flag queries

use super::settings::constants::ACCOUNT_INFO_SIZE;
use crate::exceptions::{ProfileError, Result};

// Reserved-flags bits
pub const ACCOUNT_PASSWORD_PROTECTED: u32 = 0x1000_0000;
pub const ACCOUNT_LIVE_ENABLED: u32 = 0x2000_0000;
pub const ACCOUNT_RECOVERING: u32 = 0x4000_0000;
pub const ACCOUNT_VERSION_MASK: u32 = 0x0000_00FF;

// Cached-user-flags bits
pub const ACCOUNT_PAYMENT_INSTRUMENT_CREDIT_CARD: u32 = 1;
pub const ACCOUNT_COUNTRY_MASK: u32 = 0xFF00;
pub const ACCOUNT_SUBSCRIPTION_TIER_MASK: u32 = 0x00F0_0000;
pub const ACCOUNT_PARENTAL_CONTROL_ENABLED: u32 = 0x0100_0000;
pub const ACCOUNT_LANGUAGE_MASK: u32 = 0x3E00_0000;

// Live-flags bits
pub const ACCOUNT_REQUIRES_MANAGEMENT: u32 = 1;

/// Paid membership tiers
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubscriptionTier {
    Silver = 3,
    Gold = 6,
    FamilyGold = 9,
}

impl SubscriptionTier {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            3 => Some(SubscriptionTier::Silver),
            6 => Some(SubscriptionTier::Gold),
            9 => Some(SubscriptionTier::FamilyGold),
            _ => None,
        }
    }
}

/// Account console language
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountLanguage {
    NoLanguage = 0,
    English = 1,
    Japanese = 2,
    German = 3,
    French = 4,
    Spanish = 5,
    Italian = 6,
    Korean = 7,
    TChinese = 8,
    Portuguese = 9,
    SChinese = 10,
    Polish = 11,
    Russian = 12,
    Norwegian = 15,
}

impl AccountLanguage {
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(AccountLanguage::NoLanguage),
            1 => Some(AccountLanguage::English),
            2 => Some(AccountLanguage::Japanese),
            3 => Some(AccountLanguage::German),
            4 => Some(AccountLanguage::French),
            5 => Some(AccountLanguage::Spanish),
            6 => Some(AccountLanguage::Italian),
            7 => Some(AccountLanguage::Korean),
            8 => Some(AccountLanguage::TChinese),
            9 => Some(AccountLanguage::Portuguese),
            10 => Some(AccountLanguage::SChinese),
            11 => Some(AccountLanguage::Polish),
            12 => Some(AccountLanguage::Russian),
            15 => Some(AccountLanguage::Norwegian),
            _ => None,
        }
    }
}

/// Account info record - 0x17C bytes on the wire, big-endian
///
/// The queries below are pure bit-mask reads over an externally supplied
/// record; nothing here touches the settings store.
#[derive(Clone, PartialEq)]
pub struct AccountInfo {
    pub reserved_flags: u32,
    pub live_flags: u32,
    pub gamertag: [u16; 16],
    pub xuid_online: u64,
    pub cached_user_flags: u32,
    pub network_id: u32,
    pub passcode: [u8; 4],
    pub online_domain: [u8; 0x14],
    pub online_kerberos_realm: [u8; 0x18],
    pub online_key: [u8; 0x10],
    pub passport_membername: [u8; 0x72],
    pub passport_password: [u8; 0x20],
    pub owner_passport_membername: [u8; 0x72],
}

impl std::fmt::Debug for AccountInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountInfo")
            .field("gamertag", &self.gamertag_string())
            .field("xuid_online", &format_args!("{:#018x}", self.xuid_online))
            .field("reserved_flags", &format_args!("{:#010x}", self.reserved_flags))
            .field("cached_user_flags", &format_args!("{:#010x}", self.cached_user_flags))
            .field("network_id", &self.network_id)
            .finish()
    }
}

impl AccountInfo {
    /// Fresh record for a gamertag and online XUID; everything else zeroed
    pub fn new(gamertag: &str, xuid_online: u64) -> Self {
        let mut tag = [0u16; 16];
        for (slot, unit) in tag.iter_mut().zip(gamertag.encode_utf16().take(15)) {
            *slot = unit;
        }
        AccountInfo {
            reserved_flags: 0,
            live_flags: 0,
            gamertag: tag,
            xuid_online,
            cached_user_flags: 0,
            network_id: 0,
            passcode: [0; 4],
            online_domain: [0; 0x14],
            online_kerberos_realm: [0; 0x18],
            online_key: [0; 0x10],
            passport_membername: [0; 0x72],
            passport_password: [0; 0x20],
            owner_passport_membername: [0; 0x72],
        }
    }

    pub fn is_passcode_enabled(&self) -> bool {
        self.reserved_flags & ACCOUNT_PASSWORD_PROTECTED != 0
    }

    pub fn is_live_enabled(&self) -> bool {
        self.reserved_flags & ACCOUNT_LIVE_ENABLED != 0
    }

    pub fn is_recovering(&self) -> bool {
        self.reserved_flags & ACCOUNT_RECOVERING != 0
    }

    pub fn account_version(&self) -> u32 {
        self.reserved_flags & ACCOUNT_VERSION_MASK
    }

    pub fn is_payment_instrument_credit_card(&self) -> bool {
        self.cached_user_flags & ACCOUNT_PAYMENT_INSTRUMENT_CREDIT_CARD != 0
    }

    pub fn is_parental_controlled(&self) -> bool {
        self.cached_user_flags & ACCOUNT_PARENTAL_CONTROL_ENABLED != 0
    }

    pub fn requires_management(&self) -> bool {
        self.live_flags & ACCOUNT_REQUIRES_MANAGEMENT != 0
    }

    pub fn is_xuid_offline(&self) -> bool {
        (self.xuid_online >> 60) & 0xF == 0xE
    }

    pub fn is_xuid_online(&self) -> bool {
        (self.xuid_online >> 48) & 0xFFFF == 0x9
    }

    pub fn is_xuid_valid(&self) -> bool {
        self.is_xuid_offline() != self.is_xuid_online()
    }

    pub fn is_team_xuid(&self) -> bool {
        self.xuid_online & 0xFF00_0000_0000_0140 == 0xFE00_0000_0000_0100
    }

    pub fn country(&self) -> u32 {
        (self.cached_user_flags & ACCOUNT_COUNTRY_MASK) >> 8
    }

    pub fn subscription_tier(&self) -> Option<SubscriptionTier> {
        SubscriptionTier::from_raw((self.cached_user_flags & ACCOUNT_SUBSCRIPTION_TIER_MASK) >> 20)
    }

    pub fn language(&self) -> Option<AccountLanguage> {
        AccountLanguage::from_raw((self.cached_user_flags & ACCOUNT_LANGUAGE_MASK) >> 25)
    }

    /// Gamertag as a native string, cut at the first NUL unit
    pub fn gamertag_string(&self) -> String {
        let end = self
            .gamertag
            .iter()
            .position(|&u| u == 0)
            .unwrap_or(self.gamertag.len());
        String::from_utf16_lossy(&self.gamertag[..end])
    }

    /// Pack record to bytes
    pub fn pack(&self) -> [u8; ACCOUNT_INFO_SIZE] {
        let mut bytes = [0u8; ACCOUNT_INFO_SIZE];

        bytes[0..4].copy_from_slice(&self.reserved_flags.to_be_bytes());
        bytes[4..8].copy_from_slice(&self.live_flags.to_be_bytes());
        for (i, unit) in self.gamertag.iter().enumerate() {
            bytes[8 + i * 2..10 + i * 2].copy_from_slice(&unit.to_be_bytes());
        }
        bytes[40..48].copy_from_slice(&self.xuid_online.to_be_bytes());
        bytes[48..52].copy_from_slice(&self.cached_user_flags.to_be_bytes());
        bytes[52..56].copy_from_slice(&self.network_id.to_be_bytes());
        bytes[56..60].copy_from_slice(&self.passcode);
        bytes[60..80].copy_from_slice(&self.online_domain);
        bytes[80..104].copy_from_slice(&self.online_kerberos_realm);
        bytes[104..120].copy_from_slice(&self.online_key);
        bytes[120..234].copy_from_slice(&self.passport_membername);
        bytes[234..266].copy_from_slice(&self.passport_password);
        bytes[266..380].copy_from_slice(&self.owner_passport_membername);

        bytes
    }

    /// Unpack record from bytes
    pub fn unpack(data: &[u8]) -> Result<Self> {
        if data.len() < ACCOUNT_INFO_SIZE {
            return Err(ProfileError::TruncatedRecord {
                expected: ACCOUNT_INFO_SIZE,
                actual: data.len(),
            });
        }

        use std::convert::TryInto;

        let mut info = AccountInfo::new("", 0);
        info.reserved_flags = u32::from_be_bytes(
            data[0..4]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid reserved flags bytes".into()))?,
        );
        info.live_flags = u32::from_be_bytes(
            data[4..8]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid live flags bytes".into()))?,
        );
        for (i, slot) in info.gamertag.iter_mut().enumerate() {
            *slot = u16::from_be_bytes([data[8 + i * 2], data[9 + i * 2]]);
        }
        info.xuid_online = u64::from_be_bytes(
            data[40..48]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid xuid bytes".into()))?,
        );
        info.cached_user_flags = u32::from_be_bytes(
            data[48..52]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid user flags bytes".into()))?,
        );
        info.network_id = u32::from_be_bytes(
            data[52..56]
                .try_into()
                .map_err(|_| ProfileError::Generic("invalid network id bytes".into()))?,
        );
        info.passcode.copy_from_slice(&data[56..60]);
        info.online_domain.copy_from_slice(&data[60..80]);
        info.online_kerberos_realm.copy_from_slice(&data[80..104]);
        info.online_key.copy_from_slice(&data[104..120]);
        info.passport_membername.copy_from_slice(&data[120..234]);
        info.passport_password.copy_from_slice(&data[234..266]);
        info.owner_passport_membername.copy_from_slice(&data[266..380]);

        Ok(info)
    }
}


// 🎮🪪🚩
