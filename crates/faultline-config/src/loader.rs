use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, a referenced
    /// environment variable is unset, TOML parsing fails, or validation
    /// fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path is malformed or the log filter
    /// is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!(
                "server.health.path must start with '/', got '{}'",
                self.server.health.path
            );
        }

        if self.log.filter.trim().is_empty() {
            anyhow::bail!("log.filter must not be empty");
        }

        Ok(())
    }
}
