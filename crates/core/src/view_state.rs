//! State behind the view: the last vector, mirrored backend state, and poll
//! sequencing.
//!
//! Created at startup, mutated on the event-loop thread as responses arrive,
//! dropped when the view is torn down. Nothing is queued; a new vector
//! overwrites the previous one.

use crate::error::ClientError;
use crate::float_fmt::fmt_2dp;
use crate::vector::Vector;
use crate::wire::CommandResponse;

/// Which overlapping poll response wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApplyPolicy {
    /// Apply every response as it arrives; a slow earlier request can
    /// overwrite a newer value.
    #[default]
    Arrival,
    /// Drop responses issued before the newest one already applied.
    Issue,
}

impl ApplyPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arrival" => Some(ApplyPolicy::Arrival),
            "issue" => Some(ApplyPolicy::Issue),
            _ => None,
        }
    }
}

/// Issue-order tag handed out when a poll starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollTicket(u64);

#[derive(Debug)]
pub enum PollOutcome {
    /// The vector was stored and should be displayed and redrawn.
    Applied(Vector),
    /// A newer poll was already applied; nothing changed.
    Stale,
    /// The request failed; nothing changed.
    Failed(ClientError),
}

#[derive(Debug, Clone)]
pub struct ViewState {
    vector: Vector,
    threshold: Option<f64>,
    filter_active: bool,
    policy: ApplyPolicy,
    next_ticket: u64,
    newest_applied: Option<PollTicket>,
}

impl ViewState {
    pub fn new(policy: ApplyPolicy) -> Self {
        Self {
            vector: Vector::ZERO,
            threshold: None,
            filter_active: false,
            policy,
            next_ticket: 0,
            newest_applied: None,
        }
    }

    pub fn vector(&self) -> Vector {
        self.vector
    }

    /// Whether the filter control shows as active.
    pub fn filter_active(&self) -> bool {
        self.filter_active
    }

    /// Text for the x and y displays.
    pub fn vector_text(&self) -> (String, String) {
        (fmt_2dp(self.vector.x), fmt_2dp(self.vector.y))
    }

    /// Text for the threshold display; `None` until the backend reports one.
    pub fn threshold_text(&self) -> Option<String> {
        self.threshold.map(fmt_2dp)
    }

    pub fn begin_poll(&mut self) -> PollTicket {
        let t = PollTicket(self.next_ticket);
        self.next_ticket += 1;
        t
    }

    /// Fold a finished poll into the state.
    pub fn finish_poll(
        &mut self,
        ticket: PollTicket,
        result: Result<Vector, ClientError>,
    ) -> PollOutcome {
        let v = match result {
            Ok(v) => v,
            Err(e) => return PollOutcome::Failed(e),
        };

        if self.policy == ApplyPolicy::Issue {
            if let Some(newest) = self.newest_applied {
                if ticket < newest {
                    return PollOutcome::Stale;
                }
            }
        }

        self.vector = v;
        self.newest_applied = Some(match self.newest_applied {
            Some(prev) => prev.max(ticket),
            None => ticket,
        });
        PollOutcome::Applied(v)
    }

    /// Mirror whatever backend state the response carries. Last value wins;
    /// fields the response leaves out keep their previous value.
    pub fn apply_command_response(&mut self, resp: &CommandResponse) {
        if let Some(t) = resp.threshold {
            self.threshold = Some(t);
        }
        if let Some(f) = resp.show_filtered {
            self.filter_active = f;
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(ApplyPolicy::default())
    }
}
