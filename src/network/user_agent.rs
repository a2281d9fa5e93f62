//! User agent for outgoing API requests

/// Identify the client honestly, with an optional operator suffix
pub fn user_agent(suffix: Option<&str>) -> String {
    let base = format!("craving-lunch/{}", crate::VERSION);
    match suffix.map(str::trim) {
        Some(s) if !s.is_empty() => format!("{} {}", base, s),
        _ => base,
    }
}
