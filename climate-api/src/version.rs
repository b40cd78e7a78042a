/// Firmware version format check.
///
/// Accepts `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]` as defined by semantic
/// versioning 2.0.0. The whole string has to conform, only ASCII digits count
/// as digits.
pub struct VersionValidator;

impl VersionValidator {
    pub fn is_valid(value: &str) -> bool {
        let (version, build) = match value.split_once('+') {
            Some((version, build)) => (version, Some(build)),
            None => (value, None),
        };

        // The core never contains a hyphen, so the first one opens the pre-release.
        let (core, pre_release) = match version.split_once('-') {
            Some((core, pre_release)) => (core, Some(pre_release)),
            None => (version, None),
        };

        Self::is_valid_core(core)
            && pre_release.is_none_or(Self::is_valid_pre_release)
            && build.is_none_or(Self::is_valid_build)
    }

    fn is_valid_core(core: &str) -> bool {
        let parts: Vec<&str> = core.split('.').collect();

        parts.len() == 3 && parts.iter().all(|part| Self::is_numeric_identifier(part))
    }

    fn is_valid_pre_release(pre_release: &str) -> bool {
        pre_release.split('.').all(|identifier| {
            if Self::is_digits(identifier) {
                Self::is_numeric_identifier(identifier)
            } else {
                Self::is_alphanumeric_identifier(identifier)
            }
        })
    }

    fn is_valid_build(build: &str) -> bool {
        build.split('.').all(Self::is_alphanumeric_identifier)
    }

    /// `0` or a digit sequence without a leading zero.
    fn is_numeric_identifier(identifier: &str) -> bool {
        Self::is_digits(identifier) && (identifier == "0" || !identifier.starts_with('0'))
    }

    fn is_alphanumeric_identifier(identifier: &str) -> bool {
        !identifier.is_empty()
            && identifier
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-')
    }

    fn is_digits(identifier: &str) -> bool {
        !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
    }
}
