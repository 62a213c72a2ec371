use leptos::{RwSignal, SignalUpdate};

/// Applies `f` to a signal that may have been disposed while a request was
/// in flight. A late result for an unmounted view is logged and dropped.
pub fn update_if_alive<T: 'static, R>(
    signal: RwSignal<T>,
    log_context: &str,
    f: impl FnOnce(&mut T) -> R,
) -> Option<R> {
    let result = signal.try_update(f);
    if result.is_none() {
        leptos::logging::log!("[OWNER] Dropping result for unmounted view: {}", log_context);
    }
    result
}
