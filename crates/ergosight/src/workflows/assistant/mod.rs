//! Keyword-dispatched chat assistants. Both widgets share one dispatch
//! algorithm and differ only in their reply tables.

pub mod cad;
pub mod copilot;
mod dispatcher;
pub mod markup;
mod session;

pub use dispatcher::{AssistantReply, Dispatcher, IntentRule, Matcher, FALLBACK_INTENT};
pub use session::{ChatError, ChatMessage, ChatSession, Role};

use crate::config::AssistantConfig;
use crate::workflows::catalog::CatalogError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantKind {
    Copilot,
    Cad,
}

impl AssistantKind {
    pub const fn ordered() -> [AssistantKind; 2] {
        [AssistantKind::Copilot, AssistantKind::Cad]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            AssistantKind::Copilot => "copilot",
            AssistantKind::Cad => "cad",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            AssistantKind::Copilot => "Ergo AI Copilot",
            AssistantKind::Cad => "CAD AI Assistant",
        }
    }

    pub const fn greeting(self) -> &'static str {
        match self {
            AssistantKind::Copilot => copilot::GREETING,
            AssistantKind::Cad => cad::GREETING,
        }
    }

    pub fn delay(self, config: &AssistantConfig) -> Duration {
        match self {
            AssistantKind::Copilot => config.copilot_delay,
            AssistantKind::Cad => config.cad_delay,
        }
    }
}

impl fmt::Display for AssistantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for AssistantKind {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "copilot" | "ergo" => Ok(AssistantKind::Copilot),
            "cad" | "cad-assistant" | "preprocessing" => Ok(AssistantKind::Cad),
            _ => Err(CatalogError::UnknownAssistant {
                name: raw.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assistant_slugs() {
        assert_eq!("Copilot".parse::<AssistantKind>(), Ok(AssistantKind::Copilot));
        assert_eq!(" cad ".parse::<AssistantKind>(), Ok(AssistantKind::Cad));
        assert!(matches!(
            "oracle".parse::<AssistantKind>(),
            Err(CatalogError::UnknownAssistant { .. })
        ));
    }

    #[test]
    fn delay_follows_config() {
        let config = AssistantConfig {
            copilot_delay: Duration::from_millis(1500),
            cad_delay: Duration::from_millis(2000),
        };
        assert_eq!(AssistantKind::Cad.delay(&config), Duration::from_millis(2000));
        assert_eq!(AssistantKind::Copilot.delay(&config), Duration::from_millis(1500));
    }
}
