//! Version and environment report for bug reports.

use quaver_client::{BASE_URL, ClientConfig, VERSION, VERSION_INFO};

/// One `- ...` line per entry, matching what users paste into issues.
pub fn version_report(config: &ClientConfig) -> String {
    let mut entries = vec![format!("- quaver-client v{VERSION_INFO}")];
    if VERSION_INFO.release_level != "final" {
        entries.push(format!("    - quaver-client package: v{VERSION}"));
    }
    entries.push("- reqwest v0.12".to_string());
    entries.push(format!(
        "- system info: {} {} ({})",
        std::env::consts::OS,
        std::env::consts::ARCH,
        std::env::consts::FAMILY
    ));
    if config.base_url != BASE_URL {
        entries.push(format!("- api base: {}", config.base_url));
    }
    entries.join("\n")
}
