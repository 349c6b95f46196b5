#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown in the toaster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn message_sent() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Message sent!".to_string(),
            description: "Thank you for your message. I'll get back to you soon.".to_string(),
        }
    }

    pub fn message_failed(reason: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: "Message not sent".to_string(),
            description: reason.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueuedNotice {
    pub id: u64,
    pub notice: Notice,
}

/// Visible notices, newest first. Pushing past `limit` drops the oldest.
#[derive(Clone, Debug, PartialEq)]
pub struct NoticeQueue {
    limit: usize,
    next_id: u64,
    notices: Vec<QueuedNotice>,
}

impl NoticeQueue {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            next_id: 0,
            notices: Vec::new(),
        }
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.insert(0, QueuedNotice { id, notice });
        self.notices.truncate(self.limit);
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|queued| queued.id != id);
        self.notices.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueuedNotice> {
        self.notices.iter()
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

impl Default for NoticeQueue {
    fn default() -> Self {
        Self::new(crate::configs::SiteConfig::default().notice_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_keeps_newest() {
        let mut queue = NoticeQueue::new(1);
        queue.push(Notice::message_failed("first"));
        let id = queue.push(Notice::message_sent());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().map(|q| q.id), Some(id));
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NoticeQueue::new(3);
        let a = queue.push(Notice::message_sent());
        let b = queue.push(Notice::message_sent());
        assert!(queue.dismiss(a));
        assert!(!queue.dismiss(a));
        assert_eq!(queue.iter().map(|q| q.id).collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn test_zero_limit_is_clamped() {
        let mut queue = NoticeQueue::new(0);
        queue.push(Notice::message_sent());
        assert_eq!(queue.len(), 1);
    }
}
