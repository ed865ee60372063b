//! Exit code constants for the yamato-jobs CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable or invalid input files)
//! - 2: Descriptor error (missing field, key outside the naming alphabet)
//! - 3: Output failure (YAML rendering or writing a job document)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, invalid config or metafile.
pub const USER_ERROR: i32 = 1;

/// Descriptor error: a dereferenced field is absent or a key cannot form a job ID.
pub const DESCRIPTOR_ERROR: i32 = 2;

/// Output failure: serialization or filesystem write of a job document.
pub const OUTPUT_FAILURE: i32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, DESCRIPTOR_ERROR, OUTPUT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
