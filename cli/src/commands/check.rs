use ampref_registry::{declaration, Attribute, Category, Registry};
use clap::Args;
use std::path::PathBuf;

#[derive(Args)]
pub struct CheckCommand {
    /// Resource name, e.g. apiGetVisuals
    #[arg(value_name = "RESOURCE")]
    resource: String,

    /// Attribute name, e.g. Region
    #[arg(value_name = "ATTRIBUTE")]
    attribute: String,

    /// Declaration file to check against (built-in registry when omitted)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

/// Check one resource.attribute reference against the registry
///
/// Accepted references print the attribute's value type. Rejected ones
/// terminate with an error naming the offending identifier.
pub fn run(command: &CheckCommand) -> eyre::Result<()> {
    let registry = match &command.file {
        Some(path) => declaration::parse_file(path)?,
        None => Registry::builtin(),
    };

    let attribute = command.attribute.parse::<Attribute>()?;
    let value_type = registry.attribute(Category::Function, &command.resource, attribute)?;

    println!(
        "{} {}.{}: {}",
        console::style("OK").green().bold(),
        command.resource,
        attribute,
        value_type
    );

    Ok(())
}
