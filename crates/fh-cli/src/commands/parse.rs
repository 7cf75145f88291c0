use comfy_table::{ContentArrangement, Table};
use fh_dice::{Die, ParserRegistry};

pub fn run(formula: &str) -> Result<(), String> {
    let pool = ParserRegistry::farhome()
        .parse(formula)
        .map_err(super::report_error)?;

    if pool.is_empty() {
        println!("  Empty pool, nothing to roll.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Letter", "Count"]);

    for (die, count) in pool.iter() {
        table.add_row(vec![
            die.label().to_string(),
            die.letter().to_string(),
            count.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {pool} = {} dice", pool.total());
    let unused = Die::ALL.len() - pool.iter().count();
    if unused > 0 {
        println!("  {unused} die categories unused");
    }

    Ok(())
}
