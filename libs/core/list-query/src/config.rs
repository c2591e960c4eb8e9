use core_config::{ConfigError, FromEnv, env_parse};

pub const DEFAULT_PAGE_LIMIT: u64 = 4;

/// Page size used when a request omits `limit` or sends an unusable one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    pub default_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl FromEnv for PaginationConfig {
    /// `PAGINATION_LIMIT` (default 4)
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            default_limit: env_parse("PAGINATION_LIMIT", DEFAULT_PAGE_LIMIT)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_is_four() {
        temp_env::with_var_unset("PAGINATION_LIMIT", || {
            assert_eq!(PaginationConfig::from_env().unwrap().default_limit, 4);
        });
    }

    #[test]
    fn test_limit_from_env() {
        temp_env::with_var("PAGINATION_LIMIT", Some("20"), || {
            assert_eq!(PaginationConfig::from_env().unwrap().default_limit, 20);
        });
    }

    #[test]
    fn test_invalid_limit_env() {
        temp_env::with_var("PAGINATION_LIMIT", Some("many"), || {
            assert!(PaginationConfig::from_env().is_err());
        });
    }
}
