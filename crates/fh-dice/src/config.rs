//! Configuration for a dice roller.

use std::env;

use tracing::warn;

use crate::error::{FarhomeError, FarhomeResult};

/// Default cap on the number of dice in one roll.
pub const DEFAULT_MAX_DICE: u64 = 100;

/// Configuration for a [`Roller`](crate::Roller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollerConfig {
    /// Chat command word, without the leading slash.
    pub command: String,
    /// RNG seed for reproducible rolls. `None` uses the secure source.
    pub seed: Option<u64>,
    /// Directory prefix for die face images.
    pub image_root: String,
    /// Leave zero tallies out of rendered summaries.
    pub hide_zero: bool,
    /// Largest pool a single roll may hold.
    pub max_dice: u64,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            command: "fh".to_string(),
            seed: None,
            image_root: "systems/farhome/images/dice".to_string(),
            hide_zero: true,
            max_dice: DEFAULT_MAX_DICE,
        }
    }
}

impl RollerConfig {
    /// Default configuration overlaid with environment variables.
    ///
    /// Environment variables:
    /// - `FARHOME_COMMAND` - chat command word (default: `fh`)
    /// - `FARHOME_SEED` - RNG seed (default: unset)
    /// - `FARHOME_IMAGE_ROOT` - image directory prefix
    /// - `FARHOME_SHOW_ZERO` - `true` to show zero tallies (default: `false`)
    /// - `FARHOME_MAX_DICE` - largest pool per roll (default: 100)
    ///
    /// A variable that is set but cannot be parsed is an error.
    pub fn from_env() -> FarhomeResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Default configuration overlaid with values from `lookup`, keyed by
    /// the same names as [`from_env`](Self::from_env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> FarhomeResult<Self> {
        let mut config = Self::default();

        if let Some(command) = lookup("FARHOME_COMMAND") {
            config.command = command;
        }
        if let Some(seed) = read_var::<u64>(&lookup, "FARHOME_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(root) = lookup("FARHOME_IMAGE_ROOT") {
            config.image_root = root;
        }
        if let Some(show_zero) = read_var::<bool>(&lookup, "FARHOME_SHOW_ZERO")? {
            config.hide_zero = !show_zero;
        }
        if let Some(max_dice) = read_var::<u64>(&lookup, "FARHOME_MAX_DICE")? {
            config.max_dice = max_dice;
        }

        Ok(config)
    }

    /// Set the chat command word. A leading `/` is dropped.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        let command = command.into();
        self.command = command.trim_start_matches('/').to_string();
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the image directory prefix.
    pub fn with_image_root(mut self, root: impl Into<String>) -> Self {
        self.image_root = root.into();
        self
    }

    /// Show or hide zero tallies.
    pub fn with_hide_zero(mut self, hide_zero: bool) -> Self {
        self.hide_zero = hide_zero;
        self
    }

    /// Set the largest pool a single roll may hold.
    pub fn with_max_dice(mut self, max_dice: u64) -> Self {
        self.max_dice = max_dice;
        self
    }

    /// Check that the command word is usable and the dice cap is positive.
    pub fn validate(&self) -> FarhomeResult<()> {
        if self.command.is_empty() {
            return Err(FarhomeError::InvalidConfig(
                "command word is empty".to_string(),
            ));
        }
        if self.command.chars().any(char::is_whitespace) {
            return Err(FarhomeError::InvalidConfig(format!(
                "command word '{}' contains whitespace",
                self.command
            )));
        }
        if self.max_dice == 0 {
            return Err(FarhomeError::InvalidConfig(
                "max dice must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn read_var<T>(lookup: impl Fn(&str) -> Option<String>, key: &str) -> FarhomeResult<Option<T>>
where
    T: std::str::FromStr,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    raw.trim().parse().map(Some).map_err(|_| {
        warn!(key, value = %raw, "unparsable environment variable");
        FarhomeError::InvalidConfig(format!("{key}={raw:?} is not a valid value"))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn default_config() {
        let cfg = RollerConfig::default();
        assert_eq!(cfg.command, "fh");
        assert_eq!(cfg.seed, None);
        assert!(cfg.hide_zero);
        assert_eq!(cfg.max_dice, DEFAULT_MAX_DICE);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let cfg = RollerConfig::default()
            .with_command("/roll")
            .with_seed(123)
            .with_image_root("img")
            .with_hide_zero(false);
        assert_eq!(cfg.command, "roll");
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.image_root, "img");
        assert!(!cfg.hide_zero);
    }

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn lookup_overlays_defaults() {
        let cfg = RollerConfig::from_lookup(lookup(&[
            ("FARHOME_COMMAND", "farhome"),
            ("FARHOME_SEED", "42"),
            ("FARHOME_SHOW_ZERO", "true"),
            ("FARHOME_MAX_DICE", "20"),
        ]))
        .unwrap();
        assert_eq!(cfg.command, "farhome");
        assert_eq!(cfg.seed, Some(42));
        assert!(!cfg.hide_zero);
        assert_eq!(cfg.max_dice, 20);
        assert_eq!(cfg.image_root, RollerConfig::default().image_root);
    }

    #[test]
    fn empty_lookup_is_default() {
        let cfg = RollerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, RollerConfig::default());
    }

    #[test]
    fn unparsable_seed_is_an_error() {
        let err = RollerConfig::from_lookup(lookup(&[("FARHOME_SEED", "abc")])).unwrap_err();
        match err {
            FarhomeError::InvalidConfig(msg) => assert!(msg.contains("FARHOME_SEED")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unparsable_flag_is_an_error() {
        assert!(matches!(
            RollerConfig::from_lookup(lookup(&[("FARHOME_SHOW_ZERO", "maybe")])),
            Err(FarhomeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_max_dice_rejected() {
        let cfg = RollerConfig::default().with_max_dice(0);
        assert!(matches!(cfg.validate(), Err(FarhomeError::InvalidConfig(_))));
    }

    #[test]
    fn empty_command_rejected() {
        let cfg = RollerConfig::default().with_command("");
        assert!(matches!(cfg.validate(), Err(FarhomeError::InvalidConfig(_))));
    }

    #[test]
    fn whitespace_command_rejected() {
        let cfg = RollerConfig::default().with_command("f h");
        assert!(matches!(cfg.validate(), Err(FarhomeError::InvalidConfig(_))));
    }
}
