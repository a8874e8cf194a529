// =============================================================================
// Dexter Web - Build Configuration
// =============================================================================
// The site has no runtime environment. Everything here is fixed at compile
// time through `option_env!`.
// =============================================================================

/// Build environment, read from `ENVIRONMENT` at compile time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse an environment name. Anything but `development` is production.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") => Environment::Development,
            _ => Environment::Production,
        }
    }
}

/// Compile-time site configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub environment: Environment,
}

impl SiteConfig {
    /// Configuration baked into this build.
    pub fn current() -> Self {
        Self {
            environment: Environment::from_name(option_env!("ENVIRONMENT")),
        }
    }

    /// Console log level for this build.
    pub fn log_level(&self) -> log::Level {
        match self.environment {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name(Some("development")), Environment::Development);
        assert_eq!(Environment::from_name(Some("staging")), Environment::Production);
        assert_eq!(Environment::from_name(None), Environment::Production);
    }

    #[test]
    fn test_log_level_follows_environment() {
        let dev = SiteConfig { environment: Environment::Development };
        let prod = SiteConfig { environment: Environment::Production };
        assert_eq!(dev.log_level(), log::Level::Debug);
        assert_eq!(prod.log_level(), log::Level::Info);
    }
}
