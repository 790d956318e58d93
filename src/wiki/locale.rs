use std::env;

const LOCALE_VARS: [&str; 4] = ["LC_ALL", "LC_CTYPE", "LANG", "LANGUAGE"];

/// The first non-empty locale variable, e.g. `"de_DE.UTF-8"`.
pub fn system_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

/// Two-letter language code from a locale string.
///
/// Accepts `de_DE.UTF-8`, `pt-BR`, `fr`, and colon lists such as `LANGUAGE=sv:en`.
/// The `C`/`POSIX` locales carry no language.
pub fn language_code(locale: &str) -> Option<String> {
    let first = locale.split(':').next()?.trim();
    if first.is_empty() || first == "C" || first.starts_with("C.") || first == "POSIX" {
        return None;
    }
    let code: String = first.chars().take(2).collect();
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_alphabetic()) {
        Some(code.to_ascii_lowercase())
    } else {
        None
    }
}
