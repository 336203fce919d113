/// Returns `true` if `domain` looks like a usable email domain.
///
/// `domain` must already be trimmed and lower-cased. Only a structural
/// check is done; nothing is looked up against a TLD registry.
///
/// # Examples
/// ```
/// use disposable_email::validation::domain::validate_domain;
///
/// assert!(validate_domain("good.co"));
/// assert!(!validate_domain("-bad.com"));
/// assert!(!validate_domain("x.c"));
/// ```
pub fn validate_domain(domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }

    if domain.starts_with(['.', '-']) || domain.ends_with(['.', '-']) {
        return false;
    }

    let allowed = |c: char| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '.' | '-' | '_');
    if !domain.chars().all(allowed) {
        return false;
    }

    // Every char is ASCII here, so byte length is the label length.
    domain
        .rsplit('.')
        .next()
        .is_some_and(|label| label.len() >= 2)
}
