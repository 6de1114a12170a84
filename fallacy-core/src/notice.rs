//! Transient, non-blocking notifications.
//!
//! A notice stays visible for [`NOTICE_VISIBLE_MS`], fades for
//! [`NOTICE_FADE_MS`] and is then dismissed. The host drives the timers.
//!
//! [`NOTICE_VISIBLE_MS`]: crate::constants::NOTICE_VISIBLE_MS
//! [`NOTICE_FADE_MS`]: crate::constants::NOTICE_FADE_MS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u32,
    pub message: String,
    pub tone: Tone,
    pub fading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoticeBoard {
    next_id: u32,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            notices: Vec::new(),
        }
    }

    /// Add a notice and return its id.
    pub fn show(&mut self, message: impl Into<String>, tone: Tone) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.notices.push(Notice {
            id,
            message: message.into(),
            tone,
            fading: false,
        });
        id
    }

    /// Start fading a notice. Returns false if it is already gone.
    pub fn fade(&mut self, id: u32) -> bool {
        self.notices
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| n.fading = true)
            .is_some()
    }

    /// Remove a notice. Returns false if it is already gone.
    pub fn dismiss(&mut self, id: u32) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
