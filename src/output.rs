//! Output formatting for the validation command.

use std::io::{self, Write};

use github_pr_resource::{ResourceError, ValidatedSource};

/// Writes the summary of an accepted source to stdout.
pub fn write_summary(validated: &ValidatedSource) -> Result<(), ResourceError> {
    let mut stdout = io::stdout().lock();
    write_summary_to(&mut stdout, validated)
}

/// Writes the summary of an accepted source to the given writer.
pub fn write_summary_to<W: Write>(
    writer: &mut W,
    validated: &ValidatedSource,
) -> Result<(), ResourceError> {
    writeln!(writer, "{}", validated.summary()).map_err(|error| ResourceError::Io {
        message: error.to_string(),
    })
}
