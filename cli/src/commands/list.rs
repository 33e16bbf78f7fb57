use ampref_registry::{declaration, Attribute, Category, Registry};
use clap::Args;
use std::path::PathBuf;
use tabled::settings::{peaker::Priority, style::Style, Settings, Width};
use tabled::{Table, Tabled};
use terminal_size::{terminal_size, Width as TerminalWidth};

#[derive(Args)]
pub struct ListCommand {
    /// Declaration file to list (built-in registry when omitted)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,
}

#[derive(Tabled)]
struct FunctionRow {
    #[tabled(rename = "Function")]
    function: String,

    #[tabled(rename = "Attributes")]
    attributes: String,
}

fn get_terminal_width() -> usize {
    match terminal_size() {
        Some((TerminalWidth(width), _)) => width as usize,
        None => 100,
    }
}

/// Print all registered resources and their attributes
pub fn run(command: &ListCommand) -> eyre::Result<()> {
    let registry = match &command.file {
        Some(path) => declaration::parse_file(path)?,
        None => Registry::builtin(),
    };

    let rows: Vec<FunctionRow> = registry
        .resources(Category::Function)
        .map(|(name, attributes)| FunctionRow {
            function: name.clone(),
            attributes: attributes
                .keys()
                .map(Attribute::to_string)
                .collect::<Vec<_>>()
                .join("\n"),
        })
        .collect();

    if rows.is_empty() {
        println!("{}", console::style("No functions found").yellow());
        return Ok(());
    }

    let width = get_terminal_width();

    let settings = Settings::default()
        .with(Width::wrap(width).priority(Priority::max(true)))
        .with(Width::increase(width));

    let mut table = Table::new(rows);
    table.with(Style::modern()).with(settings);

    println!("Functions:\n{}", table);

    Ok(())
}
