//! xamprofile - Xbox 360 XAM user profile settings store
//!
//! This crate models the per-user profile settings system: typed setting
//! values, their fixed-layout wire encoding, the per-profile collection,
//! and the account metadata record.

// Enforce strict code quality and reliability
#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,
    unreachable_pub,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,

    // All warnings must be fixed
    warnings,
)]
#![warn(
    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Performance
    clippy::inefficient_to_string,
    clippy::large_enum_variant,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]

pub mod api;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod version;
pub mod xam;

// Re-export main API functions
pub use api::{
    ProfileOptions, create_profile, inspect_settings, load_profile_settings,
    save_profile_settings,
};
pub use exceptions::ProfileError;

// Re-export core types for advanced usage
pub use xam::account::AccountInfo;
pub use xam::settings::{
    FileStore, MemoryStore, SettingHeader, SettingRecord, SettingStore, SettingType, UserData,
    UserProfile, UserSetting,
};
