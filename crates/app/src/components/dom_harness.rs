use std::time::Duration;

use dioxus::dioxus_core::{NoOpMutations, VirtualDom};

/// Drive `dom` for `duration` of (paused) tokio time, running tasks, effects
/// and re-renders as they come due.
pub(super) async fn run_for(dom: &mut VirtualDom, duration: Duration) {
    let deadline = tokio::time::Instant::now() + duration;
    while tokio::time::Instant::now() < deadline {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(10)) => {}
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}
