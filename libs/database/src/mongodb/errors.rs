use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server code reported when a unique index rejects a write.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// True when `err` was caused by a unique index violation.
pub fn is_duplicate_key_error(err: &Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) => write.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command) => command.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
