use colbreak::optimizer::SearchResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

pub fn format_key(key: &[u8]) -> String {
    key.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn print_improvement(plaintext: &str, score: f64, key: &[u8]) {
    println!("\n📈 {:>12.4}  [{}]", score, format_key(key));
    println!("   {}", plaintext);
}

pub fn print_final_result(result: &SearchResult) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("🏆 Best Guess").add_attribute(Attribute::Bold),
        Cell::new(format!("{} tries, {} restarts", result.tries, result.restarts)),
    ]);
    table.add_row(vec![
        Cell::new("Score"),
        Cell::new(format!("{:.4}", result.score)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Key"), Cell::new(format_key(&result.key))]);
    table.add_row(vec![Cell::new("Plaintext"), Cell::new(&result.plaintext)]);

    println!("\n{}", table);
}

pub fn print_audit(plaintext: &str, score: f64, key: &[u8]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("🔎 Key Audit").add_attribute(Attribute::Bold),
        Cell::new(format_key(key)),
    ]);
    table.add_row(vec![
        Cell::new("Score"),
        Cell::new(format!("{:.4}", score)).set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![Cell::new("Plaintext"), Cell::new(plaintext)]);

    println!("\n{}", table);
}
