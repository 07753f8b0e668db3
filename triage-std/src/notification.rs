//! Notification variants and their importance rules.
//!
//! | variant          | identity | value                               |
//! |------------------|----------|-------------------------------------|
//! | [`DirectMessage`] | sender   | [`URGENT_SCORE`] if urgent, else priority |
//! | [`GroupMessage`]  | group    | priority                            |
//! | [`SystemAlert`]   | code     | [`ALERT_SCORE`]                     |

use triage_core::{Behavior, Identify, Record, Score, Scored};

/// Score of an urgent direct message, regardless of its stored priority.
pub const URGENT_SCORE: u32 = 50;

/// Score of every system alert.
pub const ALERT_SCORE: u32 = 100;

/// A message sent to a single recipient.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectMessage {
    sender: String,
    content: String,
    priority: u32,
    urgent: bool,
}

impl DirectMessage {
    /// Create a new direct message.
    pub fn new(
        sender: impl Into<String>,
        content: impl Into<String>,
        priority: u32,
        urgent: bool,
    ) -> Self {
        Self {
            sender: sender.into(),
            content: content.into(),
            priority,
            urgent,
        }
    }

    /// Who sent it.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Message body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Stored priority level.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Whether the sender flagged it urgent.
    pub fn is_urgent(&self) -> bool {
        self.urgent
    }
}

impl Record for DirectMessage {}

impl Identify for DirectMessage {
    fn identity(&self) -> &str {
        &self.sender
    }
}

impl Score for DirectMessage {
    fn score(&self) -> u32 {
        if self.urgent {
            URGENT_SCORE
        } else {
            self.priority
        }
    }
}

/// A message posted to a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupMessage {
    group: String,
    content: String,
    priority: u32,
}

impl GroupMessage {
    /// Create a new group message.
    pub fn new(group: impl Into<String>, content: impl Into<String>, priority: u32) -> Self {
        Self {
            group: group.into(),
            content: content.into(),
            priority,
        }
    }

    /// Target group name.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Message body.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Stored priority level.
    pub fn priority(&self) -> u32 {
        self.priority
    }
}

impl Record for GroupMessage {}

impl Identify for GroupMessage {
    fn identity(&self) -> &str {
        &self.group
    }
}

impl Score for GroupMessage {
    fn score(&self) -> u32 {
        self.priority
    }
}

/// An alert raised by the system itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SystemAlert {
    code: String,
    content: String,
}

impl SystemAlert {
    /// Create a new alert.
    pub fn new(code: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            content: content.into(),
        }
    }

    /// Alert code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Alert body.
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Record for SystemAlert {}

impl Identify for SystemAlert {
    fn identity(&self) -> &str {
        &self.code
    }
}

impl Score for SystemAlert {
    fn score(&self) -> u32 {
        ALERT_SCORE
    }
}

crate::closed_set! {
    /// Every kind of notification the dispatcher understands.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub enum Notification: Behavior {
        /// A [`DirectMessage`].
        Direct(DirectMessage),
        /// A [`GroupMessage`].
        Group(GroupMessage),
        /// A [`SystemAlert`].
        Alert(SystemAlert),
    }
}

/// Identify a notification and compute its importance.
pub fn compute_and_identify(notification: &Notification) -> Scored {
    notification.compute_and_identify()
}
