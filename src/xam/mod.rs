//! XAM user profile layer: settings store, account records, tile assets

pub mod account;
pub mod settings;
pub mod tiles;

pub use account::AccountInfo;
pub use settings::{UserProfile, UserSetting};
