use comfy_table::{ContentArrangement, Table};
use fh_dice::Die;
use fh_dice::dice::face_table;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Die", "Letter", "1", "2", "3", "4", "5", "6"]);

    for die in Die::ALL {
        let mut row = vec![die.label().to_string(), die.letter().to_string()];
        row.extend(face_table(die).iter().map(|face| face.to_string()));
        table.add_row(row);
    }

    println!("{table}");

    Ok(())
}
