//! Build-time metadata embedded by the build script.
//!
//! Used to identify this client to the relay backend through the
//! `User-Agent` header.

/// The git commit hash at build time (short form).
pub const GIT_HASH: &str = env!("IPTV_RELAY_GIT_HASH");

/// The build profile (`debug` or `release`).
pub const BUILD_PROFILE: &str = env!("IPTV_RELAY_BUILD_PROFILE");

/// The crate version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Return a formatted version string including git hash and profile.
///
/// Example: `"0.1.0 (abc1234, debug)"`
pub fn version_string() -> String {
    format!("{VERSION} ({GIT_HASH}, {BUILD_PROFILE})")
}

/// The `User-Agent` value sent with every request.
///
/// Example: `"iptv-relay/0.1.0 (abc1234, debug)"`
pub fn user_agent() -> String {
    format!("iptv-relay/{}", version_string())
}
