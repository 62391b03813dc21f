use crate::error::CliError;
use std::fs;
use std::io::Read;

/// Reads `path`, or stdin if `path == "-"`, per §6.4.
pub fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::Read("<stdin>".to_string(), e))?;
        Ok(buf)
    } else {
        fs::read_to_string(path).map_err(|e| CliError::Read(path.to_string(), e))
    }
}
