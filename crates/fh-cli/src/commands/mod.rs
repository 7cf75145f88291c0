pub mod chat;
pub mod dice;
pub mod parse;
pub mod roll;

use ariadne::{Color, Label, Report, ReportKind, Source};
use colored::{ColoredString, Colorize};
use fh_dice::formula::strip_whitespace;
use fh_dice::{FarhomeError, Face, RollReport, Roller, RollerConfig};

/// How a roll is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal text
    Text,
    /// Pretty-printed JSON
    Json,
    /// Chat HTML
    Html,
}

/// Build a roller from the environment, with an optional seed override.
fn build_roller(seed: Option<u64>) -> Result<Roller, String> {
    let mut config = RollerConfig::from_env().map_err(|e| e.to_string())?;
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Roller::new(config).map_err(|e| e.to_string())
}

/// Turn an engine error into a CLI error, pointing at the bad part of a formula.
fn report_error(err: FarhomeError) -> String {
    if let FarhomeError::FormulaParse { formula, help, span } = &err {
        let source = strip_whitespace(formula);
        if !source.is_empty() {
            eprint!("{}", render_formula_error(&source, span.clone(), help));
        }
    }
    err.to_string()
}

/// Render a formula error using ariadne.
fn render_formula_error(source: &str, span: std::ops::Range<usize>, help: &str) -> String {
    let mut output = Vec::new();
    let filename = "formula";
    let message = format!("unexpected '{}'", source.get(span.clone()).unwrap_or(""));

    Report::build(ReportKind::Error, (filename, span.clone()))
        .with_message(&message)
        .with_label(
            Label::new((filename, span))
                .with_message(format!("allowed letters: {help}"))
                .with_color(Color::Red),
        )
        .finish()
        .write((filename, Source::from(source)), &mut output)
        .ok();

    String::from_utf8(output).unwrap_or_default()
}

fn colorize_face(face: Face) -> ColoredString {
    let text = face.to_string();
    match face {
        Face::CriticalSuccess => text.green().bold(),
        Face::DoubleSuccess | Face::Success => text.green(),
        Face::Blank => text.dimmed(),
        Face::Failure | Face::DoubleFailure => text.red(),
        Face::CriticalFailure => text.red().bold(),
        Face::Defense | Face::DoubleDefense => text.blue(),
        Face::CriticalDefense => text.blue().bold(),
        Face::Wound => text.magenta(),
    }
}

/// Print a report in the requested format.
fn print_report(report: &RollReport, roller: &Roller, output: OutputFormat) -> Result<(), String> {
    match output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(report)
                .map_err(|e| format!("failed to serialize roll: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Html => println!("{}", roller.render(report)),
        OutputFormat::Text => print_text(report, roller.config().hide_zero),
    }
    Ok(())
}

fn print_text(report: &RollReport, hide_zero: bool) {
    match &report.flavor {
        Some(flavor) => println!("  {} {}", report.formula.bold(), flavor.dimmed()),
        None => println!("  {}", report.formula.bold()),
    }
    println!();

    for (index, view) in report.rolls.iter().enumerate() {
        let position = format!("[{index}]").dimmed();
        let die = format!("{:<17}", view.die.id());
        if view.discarded {
            println!(
                "  {position} {} {}",
                die.dimmed().strikethrough(),
                view.face.to_string().dimmed().strikethrough()
            );
        } else if view.rerolled {
            println!(
                "  {position} {die} {} {}",
                colorize_face(view.face),
                "(rerolled)".dimmed()
            );
        } else {
            println!("  {position} {die} {}", colorize_face(view.face));
        }
    }
    println!();

    let fields: Vec<String> = report
        .summary
        .fields(hide_zero)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();
    if fields.is_empty() {
        println!("  {}", "no effect".dimmed());
    } else {
        println!("  {}", fields.join("  ").bold());
    }
}
