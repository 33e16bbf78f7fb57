pub mod check;
pub mod generate;
pub mod list;
pub mod validate;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate the declaration from the backend directory
    Generate(generate::GenerateCommand),

    /// Validate the shape of a declaration file
    Validate(validate::ValidateCommand),

    /// List resources and their attributes
    List(list::ListCommand),

    /// Check that a resource exports an attribute
    Check(check::CheckCommand),
}
