//! Cooperative timers for view-scoped animations.
//!
//! Nothing here spawns. Callers run these futures inside a component-owned
//! task (`use_future`), so unmounting the component drops the timer.

pub use api::timing::sleep_ms;

/// Calls `on_tick` every `period_ms` until the future is dropped.
pub async fn every_ms<F: FnMut()>(period_ms: u64, mut on_tick: F) {
    loop {
        sleep_ms(period_ms).await;
        on_tick();
    }
}
