use crate::coupon::CouponCard;
use crate::models::{Message, Role};
use crate::typing;

/// Sequence number of a transcript entry; stable key for list rendering.
pub type EntryId = u64;

/// Rendering surface the pipeline writes into.
///
/// The orchestrator and renderer only ever talk to this trait, so the same
/// pipeline drives the browser widget, the terminal client and test fakes.
pub trait TranscriptView {
    fn append_user(&mut self, message: Message);

    /// `card` is the structured form of `message` when it is a coupon payload.
    fn append_bot(&mut self, message: Message, card: Option<CouponCard>);

    /// Inserts the typing placeholder unless one is already live.
    fn show_typing(&mut self);

    /// Removes the typing placeholder; a no-op when none is live.
    fn hide_typing(&mut self);

    fn scroll_to_latest(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Message {
        message: Message,
        card: Option<CouponCard>,
    },
    Typing {
        marker: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: EntryId,
    pub kind: EntryKind,
}

impl Entry {
    pub fn message(&self) -> Option<&Message> {
        match &self.kind {
            EntryKind::Message { message, .. } => Some(message),
            EntryKind::Typing { .. } => None,
        }
    }

    pub fn card(&self) -> Option<&CouponCard> {
        match &self.kind {
            EntryKind::Message { card, .. } => card.as_ref(),
            EntryKind::Typing { .. } => None,
        }
    }

    pub fn marker(&self) -> Option<&'static str> {
        match self.kind {
            EntryKind::Typing { marker } => Some(marker),
            EntryKind::Message { .. } => None,
        }
    }
}

/// In-memory transcript: display order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_id: EntryId,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    /// Messages only, without the typing placeholder.
    pub fn messages(&self) -> impl Iterator<Item = &Message> + '_ {
        self.entries.iter().filter_map(Entry::message)
    }

    pub fn count_role(&self, role: Role) -> usize {
        self.messages().filter(|m| m.role == role).count()
    }

    pub(crate) fn push(&mut self, kind: EntryKind) -> EntryId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry { id, kind });
        id
    }

    pub(crate) fn position_of_marker(&self, marker: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.marker() == Some(marker))
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Entry {
        self.entries.remove(index)
    }
}

impl TranscriptView for Transcript {
    fn append_user(&mut self, message: Message) {
        self.push(EntryKind::Message { message, card: None });
    }

    fn append_bot(&mut self, message: Message, card: Option<CouponCard>) {
        self.push(EntryKind::Message { message, card });
    }

    fn show_typing(&mut self) {
        typing::show(self);
    }

    fn hide_typing(&mut self) {
        typing::remove(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_in_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.append_user(Message::user("hi"));
        transcript.show_typing();
        transcript.hide_typing();
        transcript.append_bot(Message::bot("hello"), None);

        let ids: Vec<_> = transcript.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![0, 2]);
        let texts: Vec<_> = transcript.messages().map(|m| m.raw_text.as_str()).collect();
        assert_eq!(texts, vec!["hi", "hello"]);
    }

    #[test]
    fn typing_placeholder_is_not_a_message() {
        let mut transcript = Transcript::new();
        transcript.show_typing();
        assert_eq!(transcript.entries().len(), 1);
        assert_eq!(transcript.messages().count(), 0);
        assert_eq!(transcript.last().and_then(Entry::marker), Some(typing::TYPING_MARKER));
    }
}
