//! Hook generation and custom-hook validation.

use crate::error::{AppError, InvalidReason};
use rand::{Rng, distr::Alphanumeric};

/// Default hook length in characters.
pub const DEFAULT_HOOK_LENGTH: usize = 8;

/// Generates a pseudo-random alphanumeric hook of exactly `length` characters.
///
/// Collisions are possible and are not resolved here; the caller checks the
/// candidate against the store and surfaces a collision as an error.
pub fn generate_hook(length: usize) -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Validates a user-provided custom hook against the target length.
///
/// A custom hook shorter than `length` is rejected; a longer one is truncated
/// to its leading `length` characters.
///
/// # Errors
///
/// Returns [`AppError::InvalidParameter`] with [`InvalidReason::HookTooShort`]
/// when the input is too short.
pub fn normalize_custom_hook(custom: &str, length: usize) -> Result<String, AppError> {
    if custom.chars().count() < length {
        return Err(AppError::invalid(
            "custom_hook",
            InvalidReason::HookTooShort,
        ));
    }

    Ok(custom.chars().take(length).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashSet;

    #[test]
    fn test_generated_hook_has_requested_length() {
        assert_eq!(generate_hook(DEFAULT_HOOK_LENGTH).len(), 8);
        assert_eq!(generate_hook(12).len(), 12);
    }

    #[test]
    fn test_generated_hook_is_alphanumeric() {
        let hook = generate_hook(DEFAULT_HOOK_LENGTH);
        assert!(hook.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_hooks_are_distinct() {
        let mut hooks = HashSet::new();
        for _ in 0..1000 {
            hooks.insert(generate_hook(DEFAULT_HOOK_LENGTH));
        }
        assert_eq!(hooks.len(), 1000);
    }

    #[test]
    fn test_custom_hook_exact_length_kept() {
        let hook = normalize_custom_hook("abcd1234", 8).unwrap();
        assert_eq!(hook, "abcd1234");
    }

    #[test]
    fn test_custom_hook_truncated_to_leading_chars() {
        let hook = normalize_custom_hook("abcdefghijkl", 8).unwrap();
        assert_eq!(hook, "abcdefgh");
    }

    #[test]
    fn test_custom_hook_too_short_rejected() {
        let err = normalize_custom_hook("abc", 8).unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidParameter {
                field: "custom_hook",
                reason: InvalidReason::HookTooShort,
            }
        ));
    }
}
