// SPDX-License-Identifier: Apache-2.0

pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// HTTP-facing limits and switches, resolved from the environment once at
/// startup and validated before the listener binds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub max_body_bytes: usize,
    pub enable_audit_log: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            enable_audit_log: true,
        }
    }
}

impl ApiConfig {
    /// Startup contract: refuse a config that cannot serve a single request.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_body_bytes == 0 {
            return Err("max_body_bytes must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_passes_validation() {
        ApiConfig::default().validate().expect("default config is valid");
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let config = ApiConfig {
            max_body_bytes: 0,
            ..ApiConfig::default()
        };
        let reason = config.validate().expect_err("zero body limit");
        assert!(reason.contains("max_body_bytes"), "got: {reason}");
    }
}
