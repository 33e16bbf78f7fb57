/// User-facing error shown in unified format
#[derive(Debug)]
pub struct Error {
    message: String,
    hint: Option<String>,
}

impl Error {
    pub fn new(message: &str, hint: Option<&str>) -> Self {
        Error {
            message: message.to_string(),
            hint: hint.map(|h| h.to_string()),
        }
    }
}

/// Display the message, followed by the hint when there is one
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(hint) = &self.hint {
            write!(f, "\n\n{}", console::style(hint).dim())?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

/// Automatically convert all eyre error reports
///
/// The report's context chain names the offending identifier, so the whole
/// chain is printed inline.
impl From<eyre::ErrReport> for Error {
    fn from(error: eyre::ErrReport) -> Self {
        let error = Error::new(&format!("{error:#}"), None);

        eprintln!("\n{}\n{error}", console::style("Error").red().bold());

        // The Error is used as a terminating error
        std::process::exit(1)
    }
}
