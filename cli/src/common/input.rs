//! Input utilities.

use std::io::Read;

use crate::cli::SequenceArgs;
use crate::common::{CliError, CliResult};

/// Read input from a file path or stdin if path is "-".
///
/// Returns the content and a display name for error messages.
pub fn read_input(path: &str) -> CliResult<(String, String)> {
    if is_stdin(path) {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| CliError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
        Ok((content, "<stdin>".to_string()))
    } else {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok((content, path.to_string()))
    }
}

/// Check if the path represents stdin.
pub fn is_stdin(path: &str) -> bool {
    path == "-"
}

/// Parse integers separated by whitespace and/or commas.
pub fn parse_items(content: &str) -> CliResult<Vec<i64>> {
    content
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|source| CliError::InvalidItem {
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Resolve the sequence a command operates on: positional arguments, or the
/// contents of `--input`.
pub fn read_items(args: &SequenceArgs) -> CliResult<Vec<i64>> {
    let items = match &args.input {
        Some(path) => {
            let (content, display_name) = read_input(path)?;
            tracing::debug!(source = %display_name, "reading sequence from input");
            parse_items(&content)?
        }
        None => args.items.clone(),
    };
    tracing::debug!(len = items.len(), "parsed input sequence");
    Ok(items)
}
