// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! Discovery of the host's OEM code page, which archiving tools on that host will have used for entry names.
//!
//! Windows reports it directly. Elsewhere it's derived from the `LC_ALL`, `LC_CTYPE` or `LANG` locale, using the
//! OEM code page Windows pairs with the same language and territory.

use crate::string::codepage::CodePage;

/// Returns the host's OEM code page, or IBM437 if it can't be determined or isn't supported by this build.
pub fn host_code_page() -> CodePage {
    match system_code_page() {
        Some(code_page) if code_page.is_supported() => code_page,
        Some(code_page) => {
            tracing::warn!(%code_page, "host code page not supported, falling back to cp437");
            CodePage::IBM437
        }
        None => CodePage::IBM437,
    }
}

#[cfg(windows)]
fn system_code_page() -> Option<CodePage> {
    // SAFETY: GetOEMCP takes no arguments and only reads process-wide locale state.
    let code_page = unsafe { windows_sys::Win32::Globalization::GetOEMCP() };
    u16::try_from(code_page).ok().filter(|&value| value != 0).map(CodePage)
}

#[cfg(not(windows))]
fn system_code_page() -> Option<CodePage> {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|value| !value.is_empty())
        .map(|locale| locale_code_page(&locale))
}

/// Maps a POSIX locale name such as `de_DE.UTF-8` or `sr_RS@latin` to its OEM code page.
pub(crate) fn locale_code_page(locale: &str) -> CodePage {
    let name = locale.split(['.', '@']).next().unwrap_or_default();
    let mut parts = name.split(['_', '-']);
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    let territory = parts.next().unwrap_or_default().to_ascii_uppercase();

    let code_page = match (language.as_str(), territory.as_str()) {
        ("c" | "posix" | "", _) => 437,
        ("en", "US" | "") => 437,
        ("pt", "PT") => 860,
        ("fr", "CA") => 863,
        ("zh", "TW" | "HK" | "MO") => 950,
        ("zh", _) => 936,
        ("en" | "de" | "fr" | "es" | "it" | "pt" | "nl" | "sv" | "da" | "fi" | "is" | "ca" | "eu" | "gl" | "af"
        | "id" | "ms" | "ga" | "cy", _) => 850,
        ("nb" | "nn" | "no", _) => 865,
        ("pl" | "cs" | "sk" | "hu" | "hr" | "sl" | "ro" | "sq" | "bs", _) => 852,
        ("ru" | "uk" | "be" | "bg" | "kk" | "mk" | "sr", _) => 866,
        ("lt" | "lv" | "et", _) => 775,
        ("el", _) => 737,
        ("tr" | "az", _) => 857,
        ("he", _) => 862,
        ("ar" | "fa" | "ur", _) => 720,
        ("ja", _) => 932,
        ("ko", _) => 949,
        ("th", _) => 874,
        ("vi", _) => 1258,
        _ => 437,
    };

    CodePage(code_page)
}
