//! Scanner state shared across views using Leptos signals

use crate::storage;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use scan_lite_routes::Barcode;

/// How long an input error stays visible
pub const ERROR_DISPLAY_MS: u32 = 4000;

/// Recent scans and the current input error
#[derive(Clone, Copy)]
pub struct ScanState {
    pub history: RwSignal<Vec<Barcode>>,
    pub error: RwSignal<Option<String>>,
    capacity: usize,
    error_seq: RwSignal<u32>,
}

impl ScanState {
    pub fn new(history: Vec<Barcode>, capacity: usize) -> Self {
        let mut history = history;
        history.truncate(capacity);
        Self {
            history: RwSignal::new(history),
            error: RwSignal::new(None),
            capacity,
            error_seq: RwSignal::new(0),
        }
    }

    /// Add a scan to the front of the history and persist it
    pub fn record(&self, barcode: Barcode) {
        let capacity = self.capacity;
        self.history
            .update(|history| push_recent(history, barcode, capacity));
        self.history.with_untracked(|history| storage::save_history(history));
    }

    pub fn clear_history(&self) {
        self.history.set(Vec::new());
        storage::clear_history();
    }

    /// Show an error that hides itself after [`ERROR_DISPLAY_MS`]
    pub fn show_error(&self, message: String) {
        self.error.set(Some(message));
        self.error_seq.update(|n| *n = n.wrapping_add(1));

        let seq = self.error_seq.get_untracked();
        let error = self.error;
        let error_seq = self.error_seq;
        Timeout::new(ERROR_DISPLAY_MS, move || {
            // A newer error restarted the countdown
            if error_seq.get_untracked() == seq {
                error.set(None);
            }
        })
        .forget();
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

/// Move `barcode` to the front, dropping duplicates and anything past
/// `capacity`
pub fn push_recent(history: &mut Vec<Barcode>, barcode: Barcode, capacity: usize) {
    history.retain(|b| b != &barcode);
    history.insert(0, barcode);
    history.truncate(capacity);
}

/// Provide scan state (restored from storage) to the component tree
pub fn provide_scan_state(capacity: usize) {
    let state = ScanState::new(storage::load_history(), capacity);
    provide_context(state);
}

/// Hook to access scan state from context
pub fn use_scan_state() -> ScanState {
    expect_context::<ScanState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Barcode {
        Barcode::parse(s).unwrap()
    }

    #[test]
    fn test_push_recent_orders_newest_first() {
        let mut history = Vec::new();
        push_recent(&mut history, code("111"), 10);
        push_recent(&mut history, code("222"), 10);
        assert_eq!(history, vec![code("222"), code("111")]);
    }

    #[test]
    fn test_push_recent_moves_duplicate_to_front() {
        let mut history = vec![code("222"), code("111"), code("333")];
        push_recent(&mut history, code("111"), 10);
        assert_eq!(history, vec![code("111"), code("222"), code("333")]);
    }

    #[test]
    fn test_push_recent_respects_capacity() {
        let mut history = Vec::new();
        for i in 0..5 {
            push_recent(&mut history, code(&i.to_string()), 3);
        }
        assert_eq!(history, vec![code("4"), code("3"), code("2")]);
    }
}
