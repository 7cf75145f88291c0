//! Display views of rolled dice.
//!
//! Formatting is pure: it turns rolls into views and views into HTML or
//! text. Sending the result anywhere is up to the caller.

use serde::{Deserialize, Serialize};

use crate::dice::table::image_name;
use crate::dice::{Die, Face, Roll, RollValues};
use crate::error::FarhomeResult;

/// One rendered die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollView {
    /// Die category id.
    pub die: Die,
    /// Face id.
    pub face: Face,
    /// Image path for the face on this die.
    pub image: String,
    /// The die cannot be selected for a reroll.
    pub disabled: bool,
    /// The die was produced by a reroll.
    pub rerolled: bool,
    /// The die was replaced by a reroll and no longer counts.
    pub discarded: bool,
}

impl RollView {
    /// Build the view of a roll, resolving its image below `image_root`.
    pub fn from_roll(roll: &Roll, image_root: &str) -> FarhomeResult<Self> {
        let image = image_name(roll.die, roll.face)?;
        let image = if image_root.is_empty() {
            image.to_string()
        } else {
            format!("{}/{image}", image_root.trim_end_matches('/'))
        };
        Ok(Self {
            die: roll.die,
            face: roll.face,
            image,
            disabled: roll.rerolled,
            rerolled: roll.rerolled,
            discarded: false,
        })
    }

    /// The roll this view shows.
    pub fn roll(&self) -> Roll {
        Roll {
            die: self.die,
            face: self.face,
            rerolled: self.rerolled,
        }
    }

    /// Mark the die as replaced by a reroll.
    pub fn discard(&mut self) {
        self.discarded = true;
        self.disabled = true;
    }
}

/// Build views for a sequence of rolls.
pub fn format_rolls(rolls: &[Roll], image_root: &str) -> FarhomeResult<Vec<RollView>> {
    rolls
        .iter()
        .map(|roll| RollView::from_roll(roll, image_root))
        .collect()
}

/// The folded tally, ready for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryView {
    /// Net successes.
    pub successes: i32,
    /// Net critical hits.
    pub crits: i32,
    /// Net wounds.
    pub wounds: i32,
}

impl SummaryView {
    /// Labelled fields in display order. With `hide_zero`, zero fields are left out.
    pub fn fields(&self, hide_zero: bool) -> Vec<(&'static str, i32)> {
        [
            ("Successes", self.successes),
            ("Crits", self.crits),
            ("Wounds", self.wounds),
        ]
        .into_iter()
        .filter(|&(_, value)| !hide_zero || value != 0)
        .collect()
    }
}

impl From<RollValues> for SummaryView {
    fn from(values: RollValues) -> Self {
        Self {
            successes: values.successes,
            crits: values.crits,
            wounds: values.wounds,
        }
    }
}

/// A complete roll, as shown in chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollReport {
    /// The formula as typed.
    pub formula: String,
    /// Optional flavor text after `#`.
    pub flavor: Option<String>,
    /// Every die, including discarded ones.
    pub rolls: Vec<RollView>,
    /// Tally of the dice that still count.
    pub summary: SummaryView,
}

impl RollReport {
    /// Build a report for freshly evaluated rolls.
    pub fn new(
        formula: impl Into<String>,
        flavor: Option<String>,
        rolls: &[Roll],
        image_root: &str,
    ) -> FarhomeResult<Self> {
        Ok(Self::from_views(
            formula.into(),
            flavor,
            format_rolls(rolls, image_root)?,
        ))
    }

    /// Build a report from views, recomputing the summary.
    pub fn from_views(formula: String, flavor: Option<String>, rolls: Vec<RollView>) -> Self {
        let mut report = Self {
            formula,
            flavor,
            rolls,
            summary: SummaryView::default(),
        };
        report.summary = RollValues::of(&report.counted_rolls()).into();
        report
    }

    /// Rolls that still count towards the tally.
    pub fn counted_rolls(&self) -> Vec<Roll> {
        self.rolls
            .iter()
            .filter(|view| !view.discarded)
            .map(RollView::roll)
            .collect()
    }

    /// Render the report as chat HTML.
    ///
    /// Every die is a checkbox carrying its die and face ids as data
    /// attributes, so a reroll can be built from the selected elements.
    pub fn render_html(&self, hide_zero: bool) -> String {
        let mut lines = vec![
            "<div class=\"fh-roll\">".to_string(),
            format!(
                "<div class=\"fh-formula\">{}</div>",
                escape_html(&self.formula)
            ),
        ];
        if let Some(flavor) = &self.flavor {
            lines.push(format!(
                "<div class=\"fh-flavor\">{}</div>",
                escape_html(flavor)
            ));
        }
        lines.push("<div class=\"fh-dice\">".to_string());
        for (index, view) in self.rolls.iter().enumerate() {
            lines.push(render_die(index, view));
        }
        lines.push("</div>".to_string());

        let fields: Vec<String> = self
            .summary
            .fields(hide_zero)
            .into_iter()
            .map(|(label, value)| {
                format!(
                    "<span class=\"fh-{}\">{label}: {value}</span>",
                    label.to_lowercase()
                )
            })
            .collect();
        lines.push(format!(
            "<div class=\"fh-summary\">{}</div>",
            fields.join("")
        ));
        lines.push("</div>".to_string());
        lines.join("\n")
    }
}

fn render_die(index: usize, view: &RollView) -> String {
    let mut classes = String::from("fh-die");
    if view.rerolled {
        classes.push_str(" fh-rerolled");
    }
    if view.discarded {
        classes.push_str(" fh-discarded");
    }
    let disabled = if view.disabled { " disabled" } else { "" };
    format!(
        "<label class=\"{classes}\"><input type=\"checkbox\" data-index=\"{index}\" \
         data-die=\"{}\" data-face=\"{}\"{disabled}><img src=\"{}\" alt=\"{}\"></label>",
        view.die.id(),
        view.face.id(),
        escape_html(&view.image),
        view.face,
    )
}

impl std::fmt::Display for RollReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula)?;
        if let Some(flavor) = &self.flavor {
            write!(f, " # {flavor}")?;
        }
        writeln!(f)?;
        for (index, view) in self.rolls.iter().enumerate() {
            let roll = view.roll();
            if view.discarded {
                writeln!(f, "  [{index}] {roll} (discarded)")?;
            } else {
                writeln!(f, "  [{index}] {roll}")?;
            }
        }
        let summary = self
            .summary
            .fields(false)
            .into_iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "  {summary}")
    }
}

/// Escape text for safe embedding in HTML.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
