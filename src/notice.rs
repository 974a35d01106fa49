//! Transient Notices
//!
//! One error slot and one success slot. Posting replaces the slot's
//! message; each post gets a ticket so only its own timer can clear it.

/// How long a notice stays on screen
pub const NOTICE_DURATION_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Posted {
    ticket: u64,
    message: String,
}

/// Currently visible notices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    error: Option<Posted>,
    success: Option<Posted>,
    next_ticket: u64,
}

impl NoticeBoard {
    fn slot_mut(&mut self, kind: NoticeKind) -> &mut Option<Posted> {
        match kind {
            NoticeKind::Error => &mut self.error,
            NoticeKind::Success => &mut self.success,
        }
    }

    /// Show `notice`, replacing whatever its slot held. Returns the ticket
    /// to pass to [`NoticeBoard::expire`] when the display window ends.
    pub fn post(&mut self, notice: Notice) -> u64 {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        *self.slot_mut(notice.kind) = Some(Posted { ticket, message: notice.message });
        ticket
    }

    /// Clear the slot if it still shows the notice posted with `ticket`
    pub fn expire(&mut self, kind: NoticeKind, ticket: u64) -> bool {
        let slot = self.slot_mut(kind);
        if slot.as_ref().is_some_and(|posted| posted.ticket == ticket) {
            *slot = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self, kind: NoticeKind) -> Option<&str> {
        match kind {
            NoticeKind::Error => self.error.as_ref(),
            NoticeKind::Success => self.success.as_ref(),
        }
        .map(|posted| posted.message.as_str())
    }
}
