use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_PATH: &str = "ai_config.json";
const CONFIG_PATH_ENV: &str = "OTHELLO_AI_CONFIG";

static CONFIG: OnceCell<AIConfig> = OnceCell::new();

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AIConfig {
    pub version: String,
    /// First line written on the protocol channel.
    pub engine_name: String,
    pub evaluation: EvaluationConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Use the positional evaluator instead of the plain disk differential.
    pub positional: bool,
    pub corner_bonus: i32,
    pub x_square_penalty: i32,
    pub c_square_penalty: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchConfig {
    /// Tag alpha-beta cache entries with the bound they were searched under.
    /// When false every entry is a point value reused unconditionally, which
    /// can make cached and uncached alpha-beta disagree.
    pub bounded_cache: bool,
}

impl AIConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        let config: AIConfig = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                let missing = e
                    .downcast_ref::<std::io::Error>()
                    .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound);
                if missing {
                    tracing::debug!("no AI config file, using defaults");
                } else {
                    tracing::warn!("invalid AI config, using defaults: {}", e);
                }
                Self::default()
            }
        }
    }

    /// Process-wide config, loaded on first access.
    pub fn get() -> &'static AIConfig {
        CONFIG.get_or_init(Self::load_or_default)
    }
}

impl Default for AIConfig {
    fn default() -> Self {
        AIConfig {
            version: "1.0".to_string(),
            engine_name: "Othello AI".to_string(),
            evaluation: EvaluationConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        EvaluationConfig {
            positional: false,
            corner_bonus: 3,
            x_square_penalty: 4,
            c_square_penalty: 1,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            bounded_cache: true,
        }
    }
}
