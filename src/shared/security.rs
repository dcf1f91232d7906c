use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for scenario and config files read by the CLI (10 MB).
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Fails if `path` is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or its metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} of {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not allowed for {}.",
            path.display(),
            operation
        );
    }
    Ok(())
}

/// Reads a UTF-8 input file after checking it is a regular file no larger
/// than `max_size` bytes.
///
/// # Errors
/// Returns an error if:
/// - The path does not exist or is a symbolic link
/// - The path is not a regular file
/// - The file exceeds `max_size`
/// - The content cannot be read as UTF-8
pub fn read_input_file(path: &Path, description: &str, max_size: u64) -> Result<String> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }
    if metadata.len() > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            max_size
        );
    }

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
}
