//! Profile settings store: typed values, wire codecs, per-user collection

pub mod constants;
pub mod defaults;
pub mod header;
pub mod profile;
pub mod record;
pub mod setting;
pub mod store;
pub mod user_data;

// Re-export the types most callers need
pub use header::{HeaderValue, SettingHeader};
pub use profile::{SettingOutcome, UserProfile};
pub use record::{IdentityKind, RecordIdentity, SettingRecord};
pub use setting::{SettingKey, SettingSource, UserSetting};
pub use store::{FileStore, MemoryStore, SettingStore};
pub use user_data::{SettingType, UserData};
