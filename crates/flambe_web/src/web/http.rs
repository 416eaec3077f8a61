use flambe_view::config::ClientConfig;
use flambe_view::error::ClientError;
use flambe_view::vector::Vector;
use flambe_view::wire::{decode_vector, Command, CommandResponse};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Plain JSON-over-HTTP client for the vector backend.
///
/// Requests are never cancelled once issued; callers decide what to do with
/// late responses.
#[derive(Debug, Clone)]
pub(super) struct BackendClient {
    poll_url: String,
    command_url: String,
}

impl BackendClient {
    pub(super) fn new(cfg: &ClientConfig) -> Self {
        Self {
            poll_url: cfg.poll_url().to_string(),
            command_url: cfg.command_url(),
        }
    }

    /// `GET /` and decode `{"vector": [x, y]}`.
    pub(super) async fn fetch_vector(&self) -> Result<Vector, ClientError> {
        let resp = self.get(&self.poll_url).await?;
        let text = read_text(resp).await?;
        decode_vector(&text)
    }

    /// `POST /command` with `{"action": ...}`.
    pub(super) async fn send_command(&self, cmd: Command) -> Result<CommandResponse, ClientError> {
        let body = cmd.to_json()?;
        let resp = self.post(&self.command_url, &body).await?;
        let text = read_text(resp).await?;
        CommandResponse::from_json(&text)
    }

    async fn get(&self, url: &str) -> Result<Response, ClientError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        do_fetch(request).await
    }

    async fn post(&self, url: &str, body: &str) -> Result<Response, ClientError> {
        let headers = Headers::new().map_err(js_err)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_err)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_headers(&headers.into());
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(body));

        let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
        do_fetch(request).await
    }
}

async fn do_fetch(request: Request) -> Result<Response, ClientError> {
    let window = web_sys::window().ok_or_else(|| ClientError::network("no window"))?;
    let resp_val = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_val
        .dyn_into()
        .map_err(|_| ClientError::network("not a Response"))?;

    if !resp.ok() {
        let status = resp.status();
        let body = read_text(resp).await.unwrap_or_default();
        return Err(ClientError::Status { status, body });
    }
    Ok(resp)
}

async fn read_text(resp: Response) -> Result<String, ClientError> {
    let promise = resp.text().map_err(js_err)?;
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    value
        .as_string()
        .ok_or_else(|| ClientError::network("response body is not text"))
}

fn js_err(e: JsValue) -> ClientError {
    ClientError::Network(format!("{e:?}"))
}
