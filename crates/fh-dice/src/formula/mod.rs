//! Dice formula parsing.
//!
//! A formula is a sequence of `(digits)? letter` groups such as `3s2e4w`.
//! Each letter selects a die category; the optional number in front of it
//! is the count, defaulting to one. Whitespace is ignored, so `3s 2e` is the
//! same formula.
//!
//! Several parsers can be registered in a [`ParserRegistry`]. The first one
//! that accepts a formula parses it.

pub mod lexer;

use std::ops::Range;

use tracing::debug;

use crate::dice::{DicePool, Die};
use crate::error::{FarhomeError, FarhomeResult};
use lexer::Token;

/// One `(count, die)` group of a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceGroup {
    /// How many dice.
    pub count: u32,
    /// Which die.
    pub die: Die,
}

/// Turns formula text into dice pools.
pub trait FormulaParser: Send + Sync {
    /// Split a whitespace-free formula into dice groups.
    ///
    /// Returns the span of the first offending token if the formula is not
    /// accepted. An empty formula fails with an empty span.
    fn groups(&self, formula: &str) -> Result<Vec<DiceGroup>, Range<usize>>;

    /// Legal letters and what they mean, e.g. `h = hero, s = superior`.
    fn help(&self) -> String;

    /// Returns true if this parser accepts the formula.
    fn validate(&self, formula: &str) -> bool {
        self.groups(&strip_whitespace(formula)).is_ok()
    }

    /// Parse a formula into a pool.
    fn parse(&self, formula: &str) -> FarhomeResult<DicePool> {
        let groups = self
            .groups(&strip_whitespace(formula))
            .map_err(|span| FarhomeError::FormulaParse {
                formula: formula.to_string(),
                help: self.help(),
                span,
            })?;
        fold_groups(formula, groups)
    }
}

/// Remove every whitespace character.
pub fn strip_whitespace(formula: &str) -> String {
    formula.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Sum the groups into one pool. A category that would hold more than
/// `u32::MAX` dice is rejected rather than clamped.
fn fold_groups(formula: &str, groups: Vec<DiceGroup>) -> FarhomeResult<DicePool> {
    groups
        .iter()
        .try_fold(DicePool::new(), |pool, group| {
            pool.checked_add(group.die, group.count)
        })
        .ok_or_else(|| FarhomeError::TooManyDice {
            formula: formula.to_string(),
            count: groups.iter().map(|group| u64::from(group.count)).sum(),
            max: u64::from(u32::MAX),
        })
}

/// A letter of a parser's alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letter {
    /// The character typed in the formula.
    pub letter: char,
    /// The die it selects.
    pub die: Die,
    /// What the letter means, shown in help text.
    pub meaning: String,
}

/// Parser for the letter-and-count mini-language over a fixed alphabet.
#[derive(Debug, Clone)]
pub struct LetterParser {
    alphabet: Vec<Letter>,
}

impl LetterParser {
    /// Create a parser from its alphabet. Letters are case-sensitive.
    pub fn new(alphabet: impl IntoIterator<Item = Letter>) -> Self {
        Self {
            alphabet: alphabet.into_iter().collect(),
        }
    }

    /// The Farhome alphabet: one lowercase letter per die category.
    pub fn farhome() -> Self {
        Self::new(Die::ALL.into_iter().map(|die| Letter {
            letter: die.letter(),
            die,
            meaning: die.label().to_string(),
        }))
    }

    /// The letters this parser accepts.
    pub fn alphabet(&self) -> &[Letter] {
        &self.alphabet
    }

    fn die_for(&self, letter: char) -> Option<Die> {
        self.alphabet
            .iter()
            .find(|l| l.letter == letter)
            .map(|l| l.die)
    }
}

impl FormulaParser for LetterParser {
    fn groups(&self, formula: &str) -> Result<Vec<DiceGroup>, Range<usize>> {
        let tokens = lexer::lex(formula)?;
        let mut groups = Vec::new();
        let mut pending: Option<(u32, Range<usize>)> = None;

        for (token, span) in tokens {
            match token {
                Token::Number(digits) => {
                    let count = digits.parse::<u32>().map_err(|_| span.clone())?;
                    pending = Some((count, span));
                }
                Token::Letter(c) => {
                    let die = self.die_for(c).ok_or(span)?;
                    let count = pending.take().map_or(1, |(count, _)| count);
                    groups.push(DiceGroup { count, die });
                }
            }
        }

        if let Some((_, span)) = pending {
            return Err(span);
        }
        if groups.is_empty() {
            return Err(0..0);
        }
        Ok(groups)
    }

    fn help(&self) -> String {
        self.alphabet
            .iter()
            .map(|l| format!("{} = {}", l.letter, l.meaning))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// An ordered list of parsers; the first parser that accepts a formula wins.
#[derive(Default)]
pub struct ParserRegistry {
    parsers: Vec<Box<dyn FormulaParser>>,
}

impl ParserRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding only the Farhome letter parser.
    pub fn farhome() -> Self {
        Self::new().with(LetterParser::farhome())
    }

    /// Append a parser. Parsers are tried in registration order.
    pub fn with(mut self, parser: impl FormulaParser + 'static) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Number of registered parsers.
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if no parser is registered.
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }

    /// Help text of every parser, joined with `; `.
    pub fn help(&self) -> String {
        self.parsers
            .iter()
            .map(|p| p.help())
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Parse with the first parser that accepts the formula.
    pub fn parse(&self, formula: &str) -> FarhomeResult<DicePool> {
        let trimmed = strip_whitespace(formula);
        let mut first_span = None;

        for parser in &self.parsers {
            match parser.groups(&trimmed) {
                Ok(groups) => {
                    let pool = fold_groups(formula, groups)?;
                    debug!(formula, %pool, "parsed formula");
                    return Ok(pool);
                }
                Err(span) => {
                    first_span.get_or_insert(span);
                }
            }
        }

        debug!(formula, "no parser accepted formula");
        Err(FarhomeError::FormulaParse {
            formula: formula.to_string(),
            help: self.help(),
            span: first_span.unwrap_or(0..0),
        })
    }
}

impl std::fmt::Debug for ParserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserRegistry")
            .field("parsers", &self.parsers.len())
            .finish()
    }
}
