use fh_dice::ChatReply;

use super::OutputFormat;

pub fn run(message: &str, seed: Option<u64>, output: OutputFormat) -> Result<(), String> {
    let mut roller = super::build_roller(seed)?;

    let reply = roller
        .handle_message(message)
        .map_err(super::report_error)?;

    match reply {
        Some(ChatReply::Rolled(report)) => super::print_report(&report, &roller, output),
        // Rejected formulas are answered in chat, not treated as failures.
        Some(ChatReply::Error(text)) => {
            println!("  {text}");
            Ok(())
        }
        None => Err(format!(
            "not a roll command, expected '/{} <formula> [# flavor]'",
            roller.config().command
        )),
    }
}
