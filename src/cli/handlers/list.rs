use hd44780_charset::{CharsetRegistry, Table};

pub fn handle(registry: &CharsetRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let table = Table::from_registry(registry)?;

    println!("Available blocks:\n");
    for block in table.blocks() {
        println!(
            "  {:<10} {:#04x}..={:#04x} {:>4} rows",
            block.name(),
            block.start(),
            block.last_code(),
            block.row_count()
        );
    }

    Ok(())
}
