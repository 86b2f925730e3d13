mod env_overrides;
mod loader;
pub mod schema;

pub use schema::{
    CREDENTIAL_ENV_VAR, CompletionConfig, Config, GatewayConfig, PromptConfig, StorageConfig,
};
