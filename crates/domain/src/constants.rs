//! Upstream endpoint and identification constants

use once_cell::sync::Lazy;

/// Base URL of the Ghink Open API.
pub const DEFAULT_ENDPOINT: &str = "https://api.gh.ink/v3";

/// Path of the token exchange endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "/openAPI/token";

/// SDK version triple reported in the User-Agent header.
pub const VERSION: [u32; 3] = [1, 0, 6];

/// Fixed User-Agent identifying the SDK, its version, and the platform.
pub static USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "GhinkOpenAPISDK-Rust/{}.{}.{} ({}; {})",
        VERSION[0],
        VERSION[1],
        VERSION[2],
        std::env::consts::OS,
        std::env::consts::ARCH,
    )
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_version_and_platform() {
        let ua = USER_AGENT.as_str();
        assert!(ua.starts_with("GhinkOpenAPISDK-Rust/1.0.6 ("));
        assert!(ua.contains(std::env::consts::OS));
        assert!(ua.ends_with(&format!("{})", std::env::consts::ARCH)));
    }
}
