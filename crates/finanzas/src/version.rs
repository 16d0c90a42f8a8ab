//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line with the crate name, as printed by `--version`.
#[must_use]
pub fn full_version() -> String {
    format!("finanzas {}", version())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_not_empty() {
        assert!(!version().is_empty());
    }

    #[test]
    fn full_version_has_name() {
        assert!(full_version().starts_with("finanzas "));
    }
}
