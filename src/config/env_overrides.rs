use super::{CREDENTIAL_ENV_VAR, Config};
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides read through `lookup`. Environment wins over the file.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(key) = non_empty(CREDENTIAL_ENV_VAR).or_else(|| non_empty("MARKETMIND_API_KEY"))
        {
            self.api_key = Some(key);
        }

        if let Some(model) = non_empty("MARKETMIND_MODEL") {
            self.completion.model = model;
        }

        if let Some(base_url) = non_empty("MARKETMIND_BASE_URL") {
            self.completion.base_url = base_url;
        }

        if let Some(temp) = non_empty("MARKETMIND_TEMPERATURE")
            .and_then(|raw| raw.parse::<f64>().ok())
            .filter(|temp| (0.0..=2.0).contains(temp))
        {
            self.completion.temperature = temp;
        }

        if let Some(workspace) = non_empty("MARKETMIND_WORKSPACE") {
            self.workspace_dir = PathBuf::from(workspace);
        }

        if let Some(port) = non_empty("MARKETMIND_GATEWAY_PORT")
            .or_else(|| non_empty("PORT"))
            .and_then(|raw| raw.parse::<u16>().ok())
        {
            self.gateway.port = port;
        }

        if let Some(host) = non_empty("MARKETMIND_GATEWAY_HOST").or_else(|| non_empty("HOST")) {
            self.gateway.host = host;
        }
    }
}
