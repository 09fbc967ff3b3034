//! Agent configuration gate
//!
//! The agent configuration is a JSON document with three recognised sections:
//!
//! ```json
//! {
//!   "cross_agent":  { "enabled": true },
//!   "jules_agent":  { "enabled": true, "multi_agent_mode": true, "github_integration": true },
//!   "gemini_agent": { "enabled": true, "model": "gemini-pro", "pr_review_enabled": true,
//!                     "code_analysis_enabled": true, "api_key_env": "GEMINI_API_KEY" }
//! }
//! ```
//!
//! Every field is optional; missing flags read as `false`. The document is
//! loaded through a [`ConfigProvider`] on every request, so edits to the file
//! take effect on the next call without a restart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Default Gemini model name when none is configured
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

/// Default environment variable holding the Gemini API key
pub const DEFAULT_GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Default location of the agent configuration file
pub const DEFAULT_AGENTS_CONFIG_PATH: &str = "config/config.json";

/// Top-level agent configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// Cross-agent collaboration switch
    #[serde(default)]
    pub cross_agent: CrossAgentConfig,
    /// Implementation agent settings
    #[serde(default)]
    pub jules_agent: JulesAgentConfig,
    /// Analysis agent settings
    #[serde(default)]
    pub gemini_agent: GeminiAgentConfig,
}

/// `cross_agent` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossAgentConfig {
    /// Whether collaboration endpoints are reachable at all
    #[serde(default)]
    pub enabled: bool,
}

/// `jules_agent` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JulesAgentConfig {
    /// Agent switch
    #[serde(default)]
    pub enabled: bool,
    /// Multi-agent (planner/developer/reviewer) mode
    #[serde(default)]
    pub multi_agent_mode: bool,
    /// GitHub integration toggle
    #[serde(default)]
    pub github_integration: bool,
}

/// `gemini_agent` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeminiAgentConfig {
    /// Agent switch
    #[serde(default)]
    pub enabled: bool,
    /// Model name
    #[serde(default)]
    pub model: Option<String>,
    /// Pull request review toggle
    #[serde(default)]
    pub pr_review_enabled: bool,
    /// Code analysis toggle
    #[serde(default)]
    pub code_analysis_enabled: bool,
    /// Name of the environment variable holding the API key
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl GeminiAgentConfig {
    /// Configured model, falling back to [`DEFAULT_GEMINI_MODEL`]
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }

    /// API key variable name, falling back to [`DEFAULT_GEMINI_API_KEY_ENV`]
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_GEMINI_API_KEY_ENV)
    }

    /// Whether the API key variable is set to a non-empty value.
    ///
    /// Only presence is reported; the value never leaves this function.
    pub fn api_key_configured(&self) -> bool {
        std::env::var(self.api_key_env())
            .map(|value| !value.is_empty())
            .unwrap_or(false)
    }
}

/// The two toggleable agents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    /// Implementation agent
    Jules,
    /// Analysis agent
    Gemini,
}

impl AgentKind {
    /// Configuration section name
    pub fn section(&self) -> &'static str {
        match self {
            Self::Jules => "jules_agent",
            Self::Gemini => "gemini_agent",
        }
    }

    /// Display name used in messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Jules => "Jules",
            Self::Gemini => "Gemini",
        }
    }

    /// Participant identifier used in collaboration payloads
    pub fn participant(&self) -> &'static str {
        match self {
            Self::Jules => "jules-agent",
            Self::Gemini => "gemini-coding-agent",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jules => write!(f, "jules"),
            Self::Gemini => write!(f, "gemini"),
        }
    }
}

impl FromStr for AgentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "jules" | "jules_agent" | "jules-agent" => Ok(Self::Jules),
            "gemini" | "gemini_agent" | "gemini-coding-agent" => Ok(Self::Gemini),
            other => Err(Error::Internal(format!("unknown agent: {}", other))),
        }
    }
}

impl AgentsConfig {
    /// Whether cross-agent collaboration is enabled
    pub fn cross_agent_enabled(&self) -> bool {
        self.cross_agent.enabled
    }

    /// Whether the given agent is enabled
    pub fn agent_enabled(&self, agent: AgentKind) -> bool {
        match agent {
            AgentKind::Jules => self.jules_agent.enabled,
            AgentKind::Gemini => self.gemini_agent.enabled,
        }
    }

    /// Whether the named agent is enabled; unknown names read as disabled
    pub fn agent_enabled_by_name(&self, name: &str) -> bool {
        name.parse::<AgentKind>()
            .map(|agent| self.agent_enabled(agent))
            .unwrap_or(false)
    }

    /// Gemini-specific settings
    pub fn gemini(&self) -> &GeminiAgentConfig {
        &self.gemini_agent
    }

    /// Jules-specific settings
    pub fn jules(&self) -> &JulesAgentConfig {
        &self.jules_agent
    }

    /// Fail unless cross-agent mode is on
    pub fn require_cross_agent(&self) -> Result<()> {
        if self.cross_agent_enabled() {
            Ok(())
        } else {
            warn!("Rejected request: cross-agent collaboration disabled");
            Err(Error::agent_unavailable(
                "cross_agent",
                "Cross-agent collaboration not enabled",
            ))
        }
    }

    /// Fail unless the given agent is enabled
    pub fn require_agent(&self, agent: AgentKind) -> Result<()> {
        if self.agent_enabled(agent) {
            Ok(())
        } else {
            warn!(agent = %agent, "Rejected request: agent disabled");
            Err(Error::agent_unavailable(
                agent.section(),
                format!("{} agent not enabled", agent.display_name()),
            ))
        }
    }

    /// Fail unless cross-agent mode and both agents are enabled.
    ///
    /// The agent failure names both flags so a client can tell which one is off.
    pub fn require_collaboration(&self) -> Result<()> {
        if !self.cross_agent_enabled() {
            warn!("Rejected collaboration: multi-agent mode disabled");
            return Err(Error::agent_unavailable(
                "cross_agent",
                "Multi-agent collaboration not enabled",
            ));
        }

        let jules = self.agent_enabled(AgentKind::Jules);
        let gemini = self.agent_enabled(AgentKind::Gemini);
        if jules && gemini {
            return Ok(());
        }

        warn!(jules, gemini, "Rejected collaboration: agent disabled");
        let component = if !jules {
            AgentKind::Jules.section()
        } else {
            AgentKind::Gemini.section()
        };
        Err(Error::agent_unavailable(
            component,
            format!(
                "Both agents must be enabled. Jules: {}, Gemini: {}",
                jules, gemini
            ),
        ))
    }
}

/// Source of the agent configuration.
///
/// Handlers call [`ConfigProvider::load`] once per request; implementations
/// must not cache across calls.
pub trait ConfigProvider: Send + Sync {
    /// Load the current configuration
    fn load(&self) -> Result<AgentsConfig>;
}

/// File-backed JSON configuration, re-read on every load
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    path: PathBuf,
}

impl FileConfigProvider {
    /// Create a provider for the given JSON file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path being read
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigProvider {
    fn default() -> Self {
        Self::new(DEFAULT_AGENTS_CONFIG_PATH)
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load(&self) -> Result<AgentsConfig> {
        debug!(path = %self.path.display(), "Loading agent configuration");

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::ConfigurationUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        // Keys are matched exactly; differently-cased sections are ignored.
        serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigurationUnavailable(format!("{}: {}", self.path.display(), e))
        })
    }
}

/// In-memory configuration, for tests and embedding
#[derive(Debug, Clone)]
pub struct StaticConfigProvider {
    outcome: std::result::Result<AgentsConfig, String>,
}

impl StaticConfigProvider {
    /// Always return the given configuration
    pub fn new(config: AgentsConfig) -> Self {
        Self {
            outcome: Ok(config),
        }
    }

    /// Always fail with `ConfigurationUnavailable`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(message.into()),
        }
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn load(&self) -> Result<AgentsConfig> {
        self.outcome
            .clone()
            .map_err(Error::ConfigurationUnavailable)
    }
}

impl AgentsConfig {
    /// Everything on: cross-agent mode and both agents with all toggles
    pub fn all_enabled() -> Self {
        Self {
            cross_agent: CrossAgentConfig { enabled: true },
            jules_agent: JulesAgentConfig {
                enabled: true,
                multi_agent_mode: true,
                github_integration: true,
            },
            gemini_agent: GeminiAgentConfig {
                enabled: true,
                model: Some(DEFAULT_GEMINI_MODEL.to_string()),
                pr_review_enabled: true,
                code_analysis_enabled: true,
                api_key_env: Some(DEFAULT_GEMINI_API_KEY_ENV.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults_are_disabled() {
        let config = AgentsConfig::default();
        assert!(!config.cross_agent_enabled());
        assert!(!config.agent_enabled(AgentKind::Jules));
        assert!(!config.agent_enabled(AgentKind::Gemini));
        assert_eq!(config.gemini().model(), "gemini-pro");
        assert_eq!(config.gemini().api_key_env(), "GEMINI_API_KEY");
    }

    #[test]
    fn test_agent_enabled_by_name() {
        let config = AgentsConfig::all_enabled();
        assert!(config.agent_enabled_by_name("jules"));
        assert!(config.agent_enabled_by_name("gemini_agent"));
        assert!(config.agent_enabled_by_name("Gemini"));
        assert!(!config.agent_enabled_by_name("copilot"));
    }

    #[test]
    fn test_require_collaboration_names_both_flags() {
        let mut config = AgentsConfig::all_enabled();
        config.gemini_agent.enabled = false;

        let err = config.require_collaboration().unwrap_err();
        match err {
            Error::AgentUnavailable { component, message } => {
                assert_eq!(component, "gemini_agent");
                assert!(message.contains("Jules: true"));
                assert!(message.contains("Gemini: false"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_require_collaboration_checks_cross_agent_first() {
        let mut config = AgentsConfig::all_enabled();
        config.cross_agent.enabled = false;
        config.jules_agent.enabled = false;

        let err = config.require_collaboration().unwrap_err();
        assert_eq!(err.to_string(), "Multi-agent collaboration not enabled");
    }

    #[test]
    fn test_require_agent() {
        let mut config = AgentsConfig::all_enabled();
        assert!(config.require_agent(AgentKind::Jules).is_ok());

        config.jules_agent.enabled = false;
        let err = config.require_agent(AgentKind::Jules).unwrap_err();
        assert_eq!(err.to_string(), "Jules agent not enabled");
    }

    #[test]
    fn test_file_provider_reads_partial_document() {
        let file = write_json(r#"{"cross_agent": {"enabled": true}, "gemini_agent": {"model": "gemini-1.5"}}"#);
        let config = FileConfigProvider::new(file.path()).load().unwrap();

        assert!(config.cross_agent_enabled());
        assert!(!config.agent_enabled(AgentKind::Jules));
        assert!(!config.jules().github_integration);
        assert_eq!(config.gemini().model(), "gemini-1.5");
    }

    #[test]
    fn test_file_provider_keys_are_case_sensitive() {
        let file = write_json(r#"{"Cross_Agent": {"Enabled": true}}"#);
        let config = FileConfigProvider::new(file.path()).load().unwrap();
        assert!(!config.cross_agent_enabled());

        let file = write_json(
            r#"{
                "cross_agent": {"enabled": true},
                "jules_agent": {"enabled": true},
                "gemini_agent": {"enabled": false},
                "GEMINI_AGENT": {"enabled": true}
            }"#,
        );
        let config = FileConfigProvider::new(file.path()).load().unwrap();
        assert!(!config.agent_enabled(AgentKind::Gemini));
        assert!(config.require_collaboration().is_err());
    }

    #[test]
    fn test_file_provider_rereads_on_every_load() {
        let file = write_json(r#"{"cross_agent": {"enabled": false}}"#);
        let provider = FileConfigProvider::new(file.path());
        assert!(!provider.load().unwrap().cross_agent_enabled());

        std::fs::write(file.path(), r#"{"cross_agent": {"enabled": true}}"#).unwrap();
        assert!(provider.load().unwrap().cross_agent_enabled());
    }

    #[test]
    fn test_file_provider_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let provider = FileConfigProvider::new(dir.path().join("absent.json"));
        let err = provider.load().unwrap_err();
        assert!(matches!(err, Error::ConfigurationUnavailable(_)));
    }

    #[test]
    fn test_file_provider_malformed_json() {
        let file = write_json("{ not json");
        let err = FileConfigProvider::new(file.path()).load().unwrap_err();
        assert!(matches!(err, Error::ConfigurationUnavailable(_)));
    }

    #[test]
    fn test_static_provider_failing() {
        let err = StaticConfigProvider::failing("boom").load().unwrap_err();
        assert_eq!(err.to_string(), "configuration unavailable: boom");
    }

    #[test]
    fn test_api_key_presence_only() {
        let config = GeminiAgentConfig {
            api_key_env: Some("DUET_TEST_UNSET_GEMINI_KEY_VAR".to_string()),
            ..Default::default()
        };
        assert!(!config.api_key_configured());
    }
}
