use super::OutputFormat;

pub fn run(
    formula: &str,
    flavor: Option<String>,
    seed: Option<u64>,
    reroll: &[usize],
    output: OutputFormat,
) -> Result<(), String> {
    let mut roller = super::build_roller(seed)?;

    let mut report = roller
        .roll_formula(formula, flavor)
        .map_err(super::report_error)?;

    if !reroll.is_empty() {
        report = roller
            .reroll(&report, reroll)
            .map_err(super::report_error)?;
    }

    super::print_report(&report, &roller, output)
}
