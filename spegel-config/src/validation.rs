//! Custom validators shared by the configuration models.

use std::borrow::Cow;
use std::path::Path;

use validator::ValidationError;

/// The rendezvous path must be absolute so producer and consumer agree on
/// it regardless of working directory.
pub fn validate_socket_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("socket_path")
            .with_message(Cow::Borrowed("socket path must not be empty")));
    }
    if !path.is_absolute() {
        return Err(ValidationError::new("socket_path")
            .with_message(Cow::Borrowed("socket path must be absolute")));
    }
    Ok(())
}
