use crate::shared::constants::DEFAULT_API_BASE_URL;

/// Base URL of the Oracle backend.
///
/// On native builds `ORACLE_API_BASE_URL` overrides the default; in the
/// browser the compiled-in default is used.
pub fn api_base_url() -> String {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Ok(url) = std::env::var("ORACLE_API_BASE_URL") {
            let trimmed = url.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    DEFAULT_API_BASE_URL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_has_no_trailing_slash() {
        assert!(!api_base_url().ends_with('/'));
    }
}
