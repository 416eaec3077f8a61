use flambe_view::prelude::*;
use flambe_view::ui_binding::{ACTIVE_CLASS, CANVAS_ID, THRESHOLD_ID, VECTOR_X_ID, VECTOR_Y_ID};
use leptos::html;
use leptos::prelude::*;

mod canvas;
mod dispatcher;
mod http;
mod logging;
mod poller;
mod query;

use http::BackendClient;

/// Read settings from the page URL, install logging, and mount the app.
pub fn start() {
    let (cfg, config_errors) = query::load_config();
    logging::init(cfg.log_level);
    for e in &config_errors {
        tracing::warn!("ignoring setting: {e}");
    }
    tracing::info!(
        backend = %cfg.backend_url,
        interval_ms = cfg.poll_interval_ms,
        policy = ?cfg.apply_policy,
        "starting vector view"
    );

    mount_to_body(move || view! { <App cfg=cfg /> });
}

/// Handles shared by the poll timer, the command buttons, and the view.
///
/// Everything here is an arena handle, so the struct is `Copy` and can be moved
/// into as many callbacks as needed.
#[derive(Clone, Copy)]
pub(super) struct ViewHandles {
    pub(super) state: StoredValue<ViewState>,
    pub(super) client: StoredValue<BackendClient>,
    pub(super) style: StoredValue<RenderStyle>,
    pub(super) canvas: NodeRef<html::Canvas>,
    pub(super) set_vector_x: WriteSignal<String>,
    pub(super) set_vector_y: WriteSignal<String>,
    pub(super) set_threshold: WriteSignal<Option<String>>,
    pub(super) set_filter_active: WriteSignal<bool>,
}

impl ViewHandles {
    /// Redraw the canvas from the stored vector. A no-op until the canvas is
    /// mounted.
    pub(super) fn redraw(&self) {
        let Some(el) = self.canvas.get_untracked() else {
            return;
        };
        let v = self.state.with_value(|s| s.vector());
        self.style.with_value(|style| {
            if let Err(e) = canvas::draw_vector(&el, v, style) {
                tracing::error!("canvas: {e}");
            }
        });
    }

    pub(super) fn show_vector(&self) {
        let (x, y) = self.state.with_value(|s| s.vector_text());
        self.set_vector_x.set(x);
        self.set_vector_y.set(y);
        self.redraw();
    }
}

#[component]
fn App(cfg: ClientConfig) -> impl IntoView {
    let canvas_ref: NodeRef<html::Canvas> = NodeRef::new();

    let initial = ViewState::new(cfg.apply_policy);
    let (x0, y0) = initial.vector_text();
    let (vector_x, set_vector_x) = signal(x0);
    let (vector_y, set_vector_y) = signal(y0);
    let (threshold, set_threshold) = signal::<Option<String>>(None);
    let (filter_active, set_filter_active) = signal(false);
    let (interval_id, set_interval_id) = signal::<Option<i32>>(None);

    let handles = ViewHandles {
        state: StoredValue::new(initial),
        client: StoredValue::new(BackendClient::new(&cfg)),
        style: StoredValue::new(cfg.render_style()),
        canvas: canvas_ref,
        set_vector_x,
        set_vector_y,
        set_threshold,
        set_filter_active,
    };

    // Initial frame once the canvas exists.
    Effect::new(move |_| {
        if canvas_ref.get().is_some() {
            handles.redraw();
        }
    });

    match poller::start_interval(cfg.poll_interval_ms, move || poller::poll_once(handles)) {
        Ok(id) => set_interval_id.set(Some(id)),
        Err(e) => tracing::error!("failed to start polling: {e}"),
    }

    on_cleanup(move || {
        if let Some(id) = interval_id.get_untracked() {
            poller::stop_interval(id);
            set_interval_id.set(None);
            tracing::info!("polling stopped");
        }
    });

    let width = cfg.canvas_width.to_string();
    let height = cfg.canvas_height.to_string();

    view! {
        <main class="scope">
            <canvas id=CANVAS_ID width=width height=height node_ref=canvas_ref></canvas>

            <section class="readout">
                <div>
                    <span class="label">"X"</span>
                    <span id=VECTOR_X_ID class="value">{move || vector_x.get()}</span>
                </div>
                <div>
                    <span class="label">"Y"</span>
                    <span id=VECTOR_Y_ID class="value">{move || vector_y.get()}</span>
                </div>
                <div>
                    <span class="label">"Threshold"</span>
                    <span id=THRESHOLD_ID class="value">
                        {move || threshold.get().unwrap_or_else(|| "--".to_string())}
                    </span>
                </div>
            </section>

            <section class="controls">
                {Control::all()
                    .iter()
                    .copied()
                    .map(move |c| {
                        let class = move || {
                            if c.has_active_state() && filter_active.get() {
                                ACTIVE_CLASS
                            } else {
                                ""
                            }
                        };
                        view! {
                            <button
                                id=c.element_id()
                                class=class
                                on:click=move |_| dispatcher::send(handles, c.action())
                            >
                                {c.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </section>
        </main>
    }
}
