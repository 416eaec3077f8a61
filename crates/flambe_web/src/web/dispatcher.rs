use flambe_view::wire::{Action, Command};
use wasm_bindgen_futures::spawn_local;

use super::ViewHandles;

/// Fire-and-forget `POST /command`. Failures are logged and otherwise ignored.
pub(super) fn send(view: ViewHandles, action: Action) {
    let client = view.client.get_value();

    spawn_local(async move {
        match client.send_command(Command::new(action)).await {
            Ok(resp) => {
                tracing::debug!(action = action.name(), ?resp, "command response");

                let mirrored = view.state.try_update_value(|s| {
                    s.apply_command_response(&resp);
                    (s.threshold_text(), s.filter_active())
                });
                let Some((threshold, filter_active)) = mirrored else {
                    tracing::debug!(action = action.name(), "view gone; dropping command response");
                    return;
                };

                view.set_threshold.set(threshold);
                view.set_filter_active.set(filter_active);
            }
            Err(e) => tracing::error!(action = action.name(), "Error sending command: {e}"),
        }
    });
}
