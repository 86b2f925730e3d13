use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable holding the completion API credential.
pub const CREDENTIAL_ENV_VAR: &str = "GROQ_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Workspace directory - computed from home, not serialized
    #[serde(skip)]
    pub workspace_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,
    /// Completion API key. `GROQ_API_KEY` takes precedence when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default)]
    pub completion: CompletionConfig,

    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub prompts: PromptConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_dir: PathBuf::new(),
            config_path: PathBuf::new(),
            api_key: None,
            completion: CompletionConfig::default(),
            gateway: GatewayConfig::default(),
            storage: StorageConfig::default(),
            prompts: PromptConfig::default(),
        }
    }
}

impl Config {
    /// The trimmed credential, or `None` when unset or blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn activity_db_path(&self) -> PathBuf {
        self.resolve_in_workspace(&self.storage.activity_db)
    }

    pub fn archive_dir(&self) -> PathBuf {
        match &self.storage.archive_dir {
            Some(dir) => self.resolve_in_workspace(dir),
            None => self.workspace_dir.clone(),
        }
    }

    fn resolve_in_workspace(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_dir.join(path)
        }
    }
}

// ── Completion ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// OpenAI-compatible API root (default: Groq)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Output cap for structured (JSON) generations
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Output cap for the CLI's free-text generations
    #[serde(default = "default_narrative_max_tokens")]
    pub narrative_max_tokens: u32,
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".into()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".into()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_narrative_max_tokens() -> u32 {
    2048
}

fn default_top_p() -> f64 {
    1.0
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            narrative_max_tokens: default_narrative_max_tokens(),
            top_p: default_top_p(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ── Gateway ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Gateway port (default: 5000)
    #[serde(default = "default_gateway_port")]
    pub port: u16,
    /// Gateway host (default: 127.0.0.1)
    #[serde(default = "default_gateway_host")]
    pub host: String,
    /// Allow binding to non-localhost (default: false)
    #[serde(default)]
    pub allow_public_bind: bool,
    /// Allowed CORS origins; `"*"` allows any origin, empty disables CORS
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_gateway_port() -> u16 {
    5000
}

fn default_gateway_host() -> String {
    "127.0.0.1".into()
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".into()]
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_gateway_port(),
            host: default_gateway_host(),
            allow_public_bind: false,
            cors_origins: default_cors_origins(),
        }
    }
}

// ── Storage ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Activity log database, relative to the workspace unless absolute
    #[serde(default = "default_activity_db")]
    pub activity_db: PathBuf,
    /// Directory for `saved_*.json` archives (default: the workspace)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_dir: Option<PathBuf>,
}

fn default_activity_db() -> PathBuf {
    PathBuf::from("marketmind.db")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            activity_db: default_activity_db(),
            archive_dir: None,
        }
    }
}

// ── Prompts ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Per-field cap applied before a value is embedded in a prompt
    #[serde(default = "default_max_field_chars")]
    pub max_field_chars: usize,
    /// Number of entries in the dashboard's recent activity list
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: u32,
}

fn default_max_field_chars() -> usize {
    2000
}

fn default_recent_activity_limit() -> u32 {
    5
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_field_chars: default_max_field_chars(),
            recent_activity_limit: default_recent_activity_limit(),
        }
    }
}
