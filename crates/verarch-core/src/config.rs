//! Verification run configuration.

/// Configuration for a verification run.
///
/// Threaded explicitly into [`crate::verify`]; there is no ambient global
/// state. Pass by reference rather than cloning.
///
/// # Examples
///
/// ```
/// use verarch_core::VerifyConfig;
///
/// // Stop at the first mismatch (the default contract)
/// let config = VerifyConfig::default();
/// assert!(config.fail_fast);
///
/// // Collect every mismatch instead
/// let config = VerifyConfig::keep_going();
/// assert!(!config.fail_fast);
/// ```
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Abort the drive phase at the first content mismatch.
    ///
    /// When `false`, every mismatch is recorded and the run continues through
    /// the post-walk. Reference files that cannot be opened abort the run in
    /// either mode.
    pub fail_fast: bool,

    /// Maximum number of components allowed in an entry path.
    pub max_path_depth: usize,
}

impl Default for VerifyConfig {
    /// Creates a `VerifyConfig` with the baseline settings.
    ///
    /// Default values:
    /// - `fail_fast`: true
    /// - `max_path_depth`: 32
    fn default() -> Self {
        Self {
            fail_fast: true,
            max_path_depth: 32,
        }
    }
}

impl VerifyConfig {
    /// Creates a configuration that reports every mismatch instead of
    /// stopping at the first.
    #[must_use]
    pub fn keep_going() -> Self {
        Self {
            fail_fast: false,
            ..Default::default()
        }
    }
}
