use flambe_view::view_state::PollOutcome;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use super::ViewHandles;

/// Call `on_tick` every `period_ms` until [`stop_interval`] is called with the
/// returned handle.
pub(super) fn start_interval(
    period_ms: u32,
    mut on_tick: impl FnMut() + 'static,
) -> Result<i32, String> {
    let window = web_sys::window().ok_or("no window")?;

    let cb = Closure::wrap(Box::new(move || on_tick()) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            period_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|e| format!("setInterval threw: {e:?}"))?;
    cb.forget();
    Ok(id)
}

pub(super) fn stop_interval(id: i32) {
    if let Some(w) = web_sys::window() {
        w.clear_interval_with_handle(id);
    }
}

/// One poll tick. Each tick runs on its own; a slow request does not hold
/// back the next one, and results are folded in as they arrive.
pub(super) fn poll_once(view: ViewHandles) {
    let Some(ticket) = view.state.try_update_value(|s| s.begin_poll()) else {
        tracing::debug!("view gone; skipping poll tick");
        return;
    };
    let client = view.client.get_value();

    spawn_local(async move {
        let started = web_time::Instant::now();
        let result = client.fetch_vector().await;
        tracing::trace!(
            ?ticket,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            ok = result.is_ok(),
            "poll finished"
        );

        match view.state.try_update_value(|s| s.finish_poll(ticket, result)) {
            Some(PollOutcome::Applied(_)) => view.show_vector(),
            Some(PollOutcome::Stale) => tracing::debug!(?ticket, "dropping stale vector"),
            Some(PollOutcome::Failed(e)) => tracing::error!("Error fetching vector: {e}"),
            None => tracing::debug!(?ticket, "view gone; dropping poll result"),
        }
    });
}
