use ampref_registry::{declaration, Category};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct ValidateCommand {
    /// Declaration file to validate
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = declaration::DEFAULT_PATH
    )]
    file: PathBuf,
}

/// Parse the declaration and check its shape invariants
pub fn run(command: &ValidateCommand) -> eyre::Result<()> {
    let registry = declaration::parse_file(&command.file)?;
    let count = registry.resources(Category::Function).count();

    println!(
        "{} {} ({} function{})",
        console::style("OK").green().bold(),
        command.file.display(),
        count,
        if count == 1 { "" } else { "s" }
    );

    Ok(())
}
