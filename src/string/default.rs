// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The process-wide default code page.
//!
//! Reads and writes are atomic but unsynchronised with any conversion in flight: a conversion racing a call to
//! [`set_default_code_page()`] may use either value. Callers needing a fixed code page across threads should pass a
//! [`TextCodec`](crate::string::TextCodec) around instead.

use crate::string::codepage::CodePage;
use crate::string::host::host_code_page;

use std::sync::atomic::{AtomicU16, Ordering};

/// Zero until the host's code page is first looked up.
static DEFAULT_CODE_PAGE: AtomicU16 = AtomicU16::new(UNRESOLVED);

const UNRESOLVED: u16 = 0;

/// Returns the code page used by conversions which aren't given one explicitly.
///
/// Until one is set, this is the host's OEM code page (see [`host_code_page()`]), looked up on first use.
pub fn default_code_page() -> CodePage {
    match DEFAULT_CODE_PAGE.load(Ordering::Relaxed) {
        UNRESOLVED => {
            let host = host_code_page();

            // A concurrent set_default_code_page() wins over the lookup.
            match DEFAULT_CODE_PAGE.compare_exchange(UNRESOLVED, host.0, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => {
                    tracing::trace!(code_page = %host, "default code page resolved from host");
                    host
                }
                Err(current) => CodePage(current),
            }
        }
        value => CodePage(value),
    }
}

/// Replaces the process-wide default code page.
///
/// No validation takes place here. An unsupported code page only surfaces as an error from the next conversion.
/// Setting code page 0 returns to the host's code page.
pub fn set_default_code_page(code_page: CodePage) {
    let previous = DEFAULT_CODE_PAGE.swap(code_page.0, Ordering::Relaxed);
    tracing::trace!(%code_page, previous, "default code page changed");
}
