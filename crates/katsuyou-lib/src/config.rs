use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind};
use crate::phrase::QUESTION_PARTICLE;

/// How the causative form of ichidan verbs is produced.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IchidanCausative {
    /// Causative shares the `られ` stem with potential, passive and the
    /// conditional forms.
    #[default]
    Collapsed,
    /// Causative uses its own `させ` stem.
    Split,
}

/// A configuration used by the conjugation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    /// Causative handling for ichidan verbs.
    pub ichidan_causative: IchidanCausative,
    /// Question particle used by interrogative phrases unless overridden.
    pub question_particle: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ichidan_causative: IchidanCausative::default(),
            question_particle: String::from(QUESTION_PARTICLE),
        }
    }
}

impl Config {
    /// Parse a configuration from its TOML representation.
    ///
    /// Missing keys take their default values.
    pub fn from_toml(data: &str) -> Result<Self, Error> {
        let config: Self = toml::from_str(data).map_err(ErrorKind::Config)?;
        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, IchidanCausative};

    #[test]
    fn empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn split_causative() {
        let config = Config::from_toml(
            r#"
            ichidan-causative = "split"
            question-particle = "の"
            "#,
        )
        .unwrap();

        assert_eq!(config.ichidan_causative, IchidanCausative::Split);
        assert_eq!(config.question_particle, "の");
    }

    #[test]
    fn unknown_mode() {
        let error = Config::from_toml(r#"ichidan-causative = "sometimes""#).unwrap_err();
        assert!(!error.is_invalid_lexeme());
        assert!(!error.is_unsupported_form());
    }
}
