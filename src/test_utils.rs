//! Test utilities for property-based testing
//!
//! This module provides generators and helpers for proptest.

#[cfg(test)]
pub mod generators {
    use proptest::prelude::*;

    /// Generate a distribution name (lowercase alphanumeric, no hyphens so
    /// distribution/architecture pairs cannot alias in the hash input)
    pub fn distribution_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9]{0,15}"
    }

    /// Generate an architecture name
    pub fn architecture_name() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("amd64".to_string()),
            Just("arm64".to_string()),
            Just("armhf".to_string()),
            Just("i386".to_string()),
            Just("riscv64".to_string()),
            "[a-z][a-z0-9]{0,10}",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::generators::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn test_distribution_name_generator(name in distribution_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('-'));
            prop_assert!(name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }

        #[test]
        fn test_architecture_name_generator(name in architecture_name()) {
            prop_assert!(!name.is_empty());
            prop_assert!(!name.contains('-'));
        }
    }
}
