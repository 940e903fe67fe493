//! Append-only ordered record of the current conversation.

use jiff::Timestamp;

use crate::models::{Message, MessageId, Reply, Sender};

/// Ordered sequence of exchanged messages.
///
/// Messages are only ever appended or cleared wholesale; order in the log is
/// the causal order of creation. Identifiers keep increasing across clears.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
    next_id: u64,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message, stamping it with a fresh id and the current time.
    pub fn append(&mut self, sender: Sender, reply: Reply, generation: u64) -> MessageId {
        self.next_id += 1;
        let id = MessageId(self.next_id);
        self.messages.push(Message {
            id,
            content: reply.content,
            sender,
            timestamp: Timestamp::now(),
            kind: reply.kind,
            suggestions: reply.suggestions,
            generation,
        });
        id
    }

    /// Removes every message. Identifiers are not reused afterwards.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Read-only view of the log in append order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: MessageId) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// Most recent message that offers suggestions.
    pub fn latest_with_suggestions(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.suggestions.is_some())
    }

    /// Messages appended after `id`, in order.
    pub fn since(&self, id: Option<MessageId>) -> &[Message] {
        match id {
            Some(id) => {
                let start = self.messages.partition_point(|m| m.id <= id);
                &self.messages[start..]
            }
            None => &self.messages,
        }
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HandlerId;

    #[test]
    fn test_append_preserves_order() {
        let mut log = MessageLog::new();
        let first = log.append(Sender::Assistant, Reply::text("one"), 1);
        let second = log.append(Sender::User, Reply::text("two"), 1);

        assert!(first < second);
        let contents: Vec<_> = log.all().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["one", "two"]);
        assert_eq!(log.all()[1].sender, Sender::User);
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut log = MessageLog::new();
        let before = log.append(Sender::Assistant, Reply::text("old"), 1);
        log.clear();
        assert!(log.is_empty());

        let after = log.append(Sender::Assistant, Reply::text("new"), 2);
        assert!(after > before);
        assert!(log.get(before).is_none());
        assert_eq!(log.get(after).map(|m| m.generation), Some(2));
    }

    #[test]
    fn test_latest_with_suggestions() {
        let mut log = MessageLog::new();
        assert!(log.latest_with_suggestions().is_none());

        log.append(
            Sender::Assistant,
            Reply::suggestions("first", &["a"], HandlerId::General),
            1,
        );
        let id = log.append(
            Sender::Assistant,
            Reply::suggestions("second", &["b"], HandlerId::Dashboard),
            1,
        );
        log.append(Sender::User, Reply::text("b"), 1);

        assert_eq!(log.latest_with_suggestions().map(|m| m.id), Some(id));
    }

    #[test]
    fn test_since() {
        let mut log = MessageLog::new();
        let a = log.append(Sender::Assistant, Reply::text("a"), 1);
        log.append(Sender::Assistant, Reply::text("b"), 1);

        assert_eq!(log.since(None).len(), 2);
        assert_eq!(log.since(Some(a)).len(), 1);
        assert_eq!(log.since(Some(a))[0].content, "b");

        log.clear();
        log.append(Sender::Assistant, Reply::text("c"), 2);
        assert_eq!(log.since(Some(a)).len(), 1);
        assert_eq!(log.len(), 1);
    }
}
