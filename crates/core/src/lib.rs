//! # flambe_view
//!
//! Host-testable core of the vector scope page: the vector and command
//! payloads, the view state folded from backend responses, and a renderer
//! that draws onto any [`render::Surface`].
//!
//! The browser bindings live in `flambe_web`; nothing here touches the DOM.
//!
//! ```
//! use flambe_view::prelude::*;
//!
//! let mut state = ViewState::default();
//! let ticket = state.begin_poll();
//! state.finish_poll(ticket, decode_vector(r#"{"vector": [100, -50]}"#));
//!
//! let mut surface = RecordingSurface::new(400.0, 400.0);
//! render(&mut surface, state.vector(), &RenderStyle::default());
//! assert_eq!(surface.last_dot(), Some(Point::new(300.0, 150.0)));
//! ```

pub mod config;
pub mod error;
pub mod float_fmt;
pub mod render;
pub mod ui_binding;
pub mod vector;
pub mod view_state;
pub mod wire;

pub mod prelude {
    pub use crate::config::{ClientConfig, ConfigError};
    pub use crate::error::ClientError;
    pub use crate::render::{render, RecordingSurface, RenderStyle, Surface};
    pub use crate::ui_binding::Control;
    pub use crate::vector::{Point, Vector};
    pub use crate::view_state::{ApplyPolicy, PollOutcome, PollTicket, ViewState};
    pub use crate::wire::{decode_vector, Action, Command, CommandResponse};
}
