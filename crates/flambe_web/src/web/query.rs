use flambe_view::config::{ClientConfig, ConfigError};
use wasm_bindgen::JsCast;

/// Build the config from the page's query string, e.g. `?scale=2&log=debug`.
pub(super) fn load_config() -> (ClientConfig, Vec<ConfigError>) {
    ClientConfig::from_pairs(query_pairs())
}

fn query_pairs() -> Vec<(String, String)> {
    let Some(search) = web_sys::window().and_then(|w| w.location().search().ok()) else {
        return Vec::new();
    };
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return Vec::new();
    };
    let Ok(Some(iter)) = js_sys::try_iter(params.as_ref()) else {
        return Vec::new();
    };

    // Each entry is a `[key, value]` array with values already percent-decoded.
    iter.filter_map(|entry| {
        let pair = entry.ok()?.dyn_into::<js_sys::Array>().ok()?;
        Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
    })
    .collect()
}
