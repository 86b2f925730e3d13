use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    /// Load `~/.marketmind/config.toml`, writing defaults on first run, then
    /// apply environment overrides and validate.
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let mut config = Self::load_or_init_in(&home.join(".marketmind"))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load or create the config file inside `root`, without environment
    /// overrides.
    pub fn load_or_init_in(root: &Path) -> Result<Self> {
        let config_path = root.join("config.toml");
        let workspace_dir = root.join("workspace");

        fs::create_dir_all(&workspace_dir).context("Failed to create workspace directory")?;

        if config_path.exists() {
            let contents =
                fs::read_to_string(&config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path;
            config.workspace_dir = workspace_dir;
            Ok(config)
        } else {
            let config = Self {
                config_path,
                workspace_dir,
                ..Self::default()
            };
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let completion = &self.completion;
        anyhow::ensure!(
            (0.0..=2.0).contains(&completion.temperature),
            "completion.temperature must be within 0.0..=2.0 (got {})",
            completion.temperature
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&completion.top_p),
            "completion.top_p must be within 0.0..=1.0 (got {})",
            completion.top_p
        );
        anyhow::ensure!(
            completion.max_tokens > 0 && completion.narrative_max_tokens > 0,
            "completion token limits must be greater than zero"
        );
        anyhow::ensure!(
            !completion.model.trim().is_empty(),
            "completion.model must not be empty"
        );
        anyhow::ensure!(
            self.prompts.max_field_chars > 0,
            "prompts.max_field_chars must be greater than zero"
        );
        Ok(())
    }
}
