use anyhow::Result;

use folio_core::AppConfig;

pub fn run(config: &AppConfig) -> Result<()> {
    println!("Sections ({}):\n", config.sections.len());

    for (index, section) in config.sections.iter().enumerate() {
        let lines = section.body.lines().count();
        println!("  {}  {:<16} {}", index, section.id, section.title);
        println!("     {} line{}", lines, if lines == 1 { "" } else { "s" });
    }

    println!("\nStart on a section with:");
    println!("  folio run --start <id|index>");
    Ok(())
}
