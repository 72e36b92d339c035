use std::panic;
use leptos::logging::{error, log};

use crate::utils::location::current_path;

/// Wraps the current panic hook so the console also shows which page panicked
/// and where.
pub fn set_custom_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        // Call the original hook first
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        error!("[PANIC] {} at {} on page {}", message, location, current_path());

        if message.contains("OwnerDisposed") {
            log!("[PANIC] A response arrived after its page was torn down");
        }
    }));
}

/// Call once at startup, after `console_error_panic_hook::set_once`.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
