use std::env;

fn main() {
    // Version can be pinned from the outside (release pipeline), otherwise
    // the crate version is used.
    let version = env::var("XAMPROFILE_VERSION")
        .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    println!("cargo:rustc-env=XAMPROFILE_VERSION={}", version);
    println!("cargo:rerun-if-env-changed=XAMPROFILE_VERSION");
}
