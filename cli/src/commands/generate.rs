use ampref_registry::{declaration, Category, Scanner};
use clap::Args;
use eyre::WrapErr;
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateCommand {
    /// Backend directory containing function subdirectories
    #[arg(short, long, value_name = "PATH", default_value = "amplify/backend")]
    backend: PathBuf,

    /// Declaration file to (re)write
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = declaration::DEFAULT_PATH
    )]
    out: PathBuf,
}

/// Scan the backend and rewrite the declaration wholesale
pub fn run(command: &GenerateCommand) -> eyre::Result<()> {
    let scanner = Scanner::new(Some(&command.backend))
        .wrap_err("Failed to scan the backend directory")?;

    let registry = scanner
        .registry()
        .wrap_err("Failed to build the resource registry")?;

    registry.validate()?;
    declaration::write_file(&registry, &command.out)?;

    let count = registry.resources(Category::Function).count();
    log::info!("Rendered {count} function resources into {:?}", command.out);

    println!(
        "{} {} ({} function{})",
        console::style("Updated").green().bold(),
        command.out.display(),
        count,
        if count == 1 { "" } else { "s" }
    );

    Ok(())
}
