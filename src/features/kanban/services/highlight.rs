use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::core::models::Column;

/// Sets the column's badge highlight and clears it after `duration_ms`.
pub fn flash_count(highlighted: RwSignal<[bool; 3]>, column: Column, duration_ms: u32) {
    highlighted.update(|h| h[column.index()] = true);
    Timeout::new(duration_ms, move || {
        highlighted.update(|h| h[column.index()] = false);
    })
    .forget();
}
