//! Chat command handling and the reroll protocol.
//!
//! A roller owns a command word. Any message of the form
//! `/<command> <formula> [# flavor]` is handled by rolling the formula.

use tracing::{debug, warn};

use crate::config::RollerConfig;
use crate::dice::Roll;
use crate::error::{FarhomeError, FarhomeResult};
use crate::evaluate;
use crate::format::{RollReport, escape_html, format_rolls};
use crate::formula::ParserRegistry;
use crate::random::{RandomSource, SecureRandom, SeededRandom};

/// A chat message addressed to a roller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatCommand {
    /// The formula exactly as typed, surrounding spaces included.
    pub formula: String,
    /// Flavor text after `#`, if any.
    pub flavor: Option<String>,
}

impl ChatCommand {
    /// Parse a message for the given command word.
    ///
    /// Returns `None` unless the message starts with `/<command> `.
    pub fn parse(command: &str, message: &str) -> Option<Self> {
        let rest = message
            .strip_prefix('/')?
            .strip_prefix(command)?
            .strip_prefix(' ')?;
        let (formula, flavor) = match rest.split_once('#') {
            Some((formula, flavor)) => (formula, Some(flavor.trim())),
            None => (rest, None),
        };
        Some(Self {
            formula: formula.to_string(),
            flavor: flavor.filter(|f| !f.is_empty()).map(str::to_string),
        })
    }
}

/// What a roller answers to a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// The formula was rolled.
    Rolled(RollReport),
    /// The formula was rejected; the text is HTML-escaped and safe to post.
    Error(String),
}

/// Parses, rolls, and rerolls formulas for one ruleset.
pub struct Roller {
    config: RollerConfig,
    parsers: ParserRegistry,
    rng: Box<dyn RandomSource>,
}

impl Roller {
    /// Create a roller with the Farhome parser.
    ///
    /// Uses a seeded source when the config has a seed, the secure source otherwise.
    pub fn new(config: RollerConfig) -> FarhomeResult<Self> {
        let rng: Box<dyn RandomSource> = match config.seed {
            Some(seed) => Box::new(SeededRandom::new(seed)),
            None => Box::new(SecureRandom::new()),
        };
        Self::with_random(config, rng)
    }

    /// Create a roller drawing from the given random source.
    pub fn with_random(
        config: RollerConfig,
        rng: impl RandomSource + 'static,
    ) -> FarhomeResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            parsers: ParserRegistry::farhome(),
            rng: Box::new(rng),
        })
    }

    /// Replace the parser registry.
    pub fn with_parsers(mut self, parsers: ParserRegistry) -> Self {
        self.parsers = parsers;
        self
    }

    /// The roller configuration.
    pub fn config(&self) -> &RollerConfig {
        &self.config
    }

    /// The registered parsers.
    pub fn parsers(&self) -> &ParserRegistry {
        &self.parsers
    }

    /// Returns true if the message is a command for this roller.
    pub fn handles(&self, message: &str) -> bool {
        ChatCommand::parse(&self.config.command, message).is_some()
    }

    /// Parse and roll a formula.
    ///
    /// Pools larger than the configured `max_dice` are rejected before any
    /// die is rolled.
    pub fn roll_formula(
        &mut self,
        formula: &str,
        flavor: Option<String>,
    ) -> FarhomeResult<RollReport> {
        let pool = self.parsers.parse(formula)?;
        if pool.total() > self.config.max_dice {
            return Err(FarhomeError::TooManyDice {
                formula: formula.to_string(),
                count: pool.total(),
                max: self.config.max_dice,
            });
        }
        let rolls = evaluate::evaluate(&pool, &mut self.rng)?;
        debug!(formula, dice = rolls.len(), "rolled formula");
        RollReport::new(formula.trim(), flavor, &rolls, &self.config.image_root)
    }

    /// Answer a chat message.
    ///
    /// Returns `Ok(None)` for messages meant for someone else. Formula errors
    /// become an escaped [`ChatReply::Error`]; anything else is returned as
    /// an error.
    pub fn handle_message(&mut self, message: &str) -> FarhomeResult<Option<ChatReply>> {
        let Some(command) = ChatCommand::parse(&self.config.command, message) else {
            return Ok(None);
        };
        match self.roll_formula(&command.formula, command.flavor) {
            Ok(report) => Ok(Some(ChatReply::Rolled(report))),
            Err(err @ (FarhomeError::FormulaParse { .. } | FarhomeError::TooManyDice { .. })) => {
                warn!(%err, "rejected chat formula");
                Ok(Some(ChatReply::Error(escape_html(&err.to_string()))))
            }
            Err(err) => Err(err),
        }
    }

    /// Reroll the selected dice of a report.
    ///
    /// The selected dice stay where they are but are discarded; the fresh
    /// dice are appended after every existing die. Disabled dice cannot be
    /// selected.
    pub fn reroll(&mut self, report: &RollReport, selected: &[usize]) -> FarhomeResult<RollReport> {
        let mut selected = selected.to_vec();
        selected.sort_unstable();
        selected.dedup();

        let mut to_reroll = Vec::with_capacity(selected.len());
        for &index in &selected {
            let view = report
                .rolls
                .get(index)
                .ok_or(FarhomeError::InvalidSelection(index))?;
            if view.disabled {
                return Err(FarhomeError::DieDisabled(index));
            }
            to_reroll.push(view.roll());
        }

        let kept: Vec<Roll> = report
            .rolls
            .iter()
            .enumerate()
            .filter(|(index, view)| !view.discarded && selected.binary_search(index).is_err())
            .map(|(_, view)| view.roll())
            .collect();

        let rolled = evaluate::reroll(&kept, &to_reroll, &mut self.rng)?;
        let fresh = format_rolls(&rolled[kept.len()..], &self.config.image_root)?;

        let mut views = report.rolls.clone();
        for &index in &selected {
            if let Some(view) = views.get_mut(index) {
                view.discard();
            }
        }
        views.extend(fresh);

        Ok(RollReport::from_views(
            report.formula.clone(),
            report.flavor.clone(),
            views,
        ))
    }

    /// Render a report as chat HTML using the configured zero handling.
    pub fn render(&self, report: &RollReport) -> String {
        report.render_html(self.config.hide_zero)
    }
}

impl std::fmt::Debug for Roller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roller")
            .field("config", &self.config)
            .field("parsers", &self.parsers)
            .finish_non_exhaustive()
    }
}
