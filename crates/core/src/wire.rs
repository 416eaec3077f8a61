//! JSON payloads exchanged with the vector backend.

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::vector::Vector;

/// A named user action. The backend receives it as `{"action": "<name>"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Calibrate,
    ToggleFilter,
    ThresholdUp,
    ThresholdDown,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[
            Action::Calibrate,
            Action::ToggleFilter,
            Action::ThresholdUp,
            Action::ThresholdDown,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            Action::Calibrate => "calibrate",
            Action::ToggleFilter => "toggle_filter",
            Action::ThresholdUp => "threshold_up",
            Action::ThresholdDown => "threshold_down",
        }
    }
}

/// Body of `POST /command`. Not retained after the request completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Command {
    pub action: Action,
}

impl Command {
    pub fn new(action: Action) -> Self {
        Self { action }
    }

    pub fn to_json(&self) -> Result<String, ClientError> {
        serde_json::to_string(self).map_err(|e| ClientError::Encode(e.to_string()))
    }
}

/// Body of `GET /`. Fields other than `vector` are ignored.
#[derive(Debug, Clone, Deserialize)]
struct VectorReply {
    vector: [f64; 2],
}

/// Decode the poll body into a vector. Anything but a two-number `vector`
/// array is malformed.
pub fn decode_vector(body: &str) -> Result<Vector, ClientError> {
    let reply: VectorReply = serde_json::from_str(body)?;
    Ok(Vector::from(reply.vector))
}

/// Body returned by `POST /command`. Both fields are optional; the backend
/// only includes the state the action touched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CommandResponse {
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub show_filtered: Option<bool>,
}

impl CommandResponse {
    pub fn from_json(body: &str) -> Result<Self, ClientError> {
        Ok(serde_json::from_str(body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_payloads_are_bare_action_names() {
        let cases = [
            (Action::Calibrate, r#"{"action":"calibrate"}"#),
            (Action::ToggleFilter, r#"{"action":"toggle_filter"}"#),
            (Action::ThresholdUp, r#"{"action":"threshold_up"}"#),
            (Action::ThresholdDown, r#"{"action":"threshold_down"}"#),
        ];
        for (action, expected) in cases {
            assert_eq!(Command::new(action).to_json().unwrap(), expected);
        }
    }

    #[test]
    fn action_names_match_serde_names() {
        for &a in Action::all() {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.name()));
        }
    }

    #[test]
    fn decodes_vector_and_ignores_extra_fields() {
        let v = decode_vector(r#"{"vector": [1.5, -2], "fps": 30}"#).unwrap();
        assert_eq!(v, Vector::new(1.5, -2.0));
    }

    #[test]
    fn rejects_malformed_vector_bodies() {
        for body in [
            "",
            "not json",
            "{}",
            r#"{"vector": [1.0]}"#,
            r#"{"vector": [1.0, 2.0, 3.0]}"#,
            r#"{"vector": ["a", "b"]}"#,
            r#"{"vector": null}"#,
        ] {
            assert!(
                matches!(decode_vector(body), Err(ClientError::Decode(_))),
                "accepted {body:?}"
            );
        }
    }

    #[test]
    fn command_response_fields_are_optional() {
        assert_eq!(
            CommandResponse::from_json("{}").unwrap(),
            CommandResponse::default()
        );

        let r = CommandResponse::from_json(r#"{"threshold": 0.75, "status": "ok"}"#).unwrap();
        assert_eq!(r.threshold, Some(0.75));
        assert_eq!(r.show_filtered, None);

        let r = CommandResponse::from_json(r#"{"show_filtered": true}"#).unwrap();
        assert_eq!(r.show_filtered, Some(true));
    }
}
