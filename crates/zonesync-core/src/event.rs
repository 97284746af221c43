//! Instance lifecycle event boundary
//!
//! The core is driven by instance state-change notifications delivered by an
//! external event loop. Only two states carry meaning here: `running` (the
//! record should exist and point at the current public address) and
//! `shutting-down` (the record should be removed). Every other state is
//! preserved verbatim in [`InstanceState::Other`] and ignored by the
//! handler.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::instance::InstanceId;

/// Lifecycle state carried by a state-change notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InstanceState {
    /// The instance is running; its address record should exist
    Running,
    /// The instance is shutting down; its address record should be removed
    ShuttingDown,
    /// Any other lifecycle state; ignored by the handler
    Other(String),
}

impl From<String> for InstanceState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "running" => InstanceState::Running,
            "shutting-down" => InstanceState::ShuttingDown,
            _ => InstanceState::Other(raw),
        }
    }
}

impl From<InstanceState> for String {
    fn from(state: InstanceState) -> Self {
        match state {
            InstanceState::Running => "running".to_string(),
            InstanceState::ShuttingDown => "shutting-down".to_string(),
            InstanceState::Other(raw) => raw,
        }
    }
}

/// A validated lifecycle event, ready for the handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    /// The instance the event concerns
    pub instance_id: InstanceId,

    /// The state the instance transitioned to
    pub state: InstanceState,
}

/// Wire shape of an instance state-change notification
///
/// Matches the event-bus envelope the original notifications arrive in:
/// the fields the core needs live under `detail`, everything else is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct StateChangeNotification {
    /// Notification kind, e.g. "EC2 Instance State-change Notification"
    #[serde(rename = "detail-type", default)]
    pub detail_type: Option<String>,

    /// Event payload
    pub detail: StateChangeDetail,
}

/// The `detail` payload of a state-change notification
#[derive(Debug, Clone, Deserialize)]
pub struct StateChangeDetail {
    /// Raw instance identifier
    #[serde(rename = "instance-id")]
    pub instance_id: String,

    /// New lifecycle state
    pub state: InstanceState,
}

impl StateChangeNotification {
    /// Extract a validated [`LifecycleEvent`] from the notification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) when the
    /// instance identifier is malformed.
    pub fn event(&self) -> Result<LifecycleEvent> {
        Ok(LifecycleEvent {
            instance_id: InstanceId::new(self.detail.instance_id.clone())?,
            state: self.detail.state.clone(),
        })
    }
}
