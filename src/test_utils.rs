//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a plain directory or file name (never `.` or `..`)
    pub fn segment_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_-][a-zA-Z0-9_.-]{0,11}".prop_filter("Name must not be a dot component", |s| {
            s != "." && s != ".."
        })
    }

    /// Generate a separator run, mixing posix and windows styles
    pub fn separator() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("/".to_string()),
            Just("\\".to_string()),
            Just("//".to_string()),
            Just("\\/".to_string()),
            Just("/\\".to_string()),
        ]
    }

    /// Generate a windows drive-letter root such as `c:\` or `\Z:/`
    pub fn drive_root() -> impl Strategy<Value = String> {
        (
            prop_oneof![Just(""), Just("/"), Just("\\")],
            "[a-zA-Z]",
            prop_oneof![Just("/"), Just("\\")],
        )
            .prop_map(|(lead, letter, sep)| format!("{lead}{letter}:{sep}"))
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_segment_name_generator(name in segment_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('/') && !name.contains('\\'));
            prop_assert!(name != "." && name != "..");
        }

        #[test]
        fn test_drive_root_generator(root in drive_root()) {
            prop_assert!(root.contains(':'));
            prop_assert!(root.ends_with('/') || root.ends_with('\\'));
        }
    }
}
