use std::sync::Arc;

use tracing::info;

use crate::models::Member;

/// One-shot message addressed to a member. Built, delivered, dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub member_id: String,
    pub member_name: String,
    pub message: String,
}

/// Delivery sink for notifications. Production uses the log-backed channel;
/// tests swap in a recording double.
pub trait NotificationChannel: Send + Sync {
    fn deliver(&self, notification: &Notification);
}

#[derive(Clone, Default)]
pub struct LogChannel;

impl NotificationChannel for LogChannel {
    fn deliver(&self, notification: &Notification) {
        info!(
            member_id = %notification.member_id,
            "Notification sent to {}: {}",
            notification.member_name, notification.message
        );
    }
}

pub struct NotificationDispatcher {
    channel: Arc<dyn NotificationChannel>,
}

impl NotificationDispatcher {
    pub fn new(channel: Arc<dyn NotificationChannel>) -> Self {
        Self { channel }
    }

    /// Fire-and-forget: no retry, no queue, no delivery confirmation.
    pub fn notify(&self, member: &Member, message: &str) {
        let notification = Notification {
            member_id: member.member_id.clone(),
            member_name: member.name.clone(),
            message: message.to_string(),
        };
        self.channel.deliver(&notification);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct RecordingChannel {
        delivered: Mutex<Vec<Notification>>,
    }

    impl NotificationChannel for RecordingChannel {
        fn deliver(&self, notification: &Notification) {
            self.delivered.lock().unwrap().push(notification.clone());
        }
    }

    #[test]
    fn test_notify_delivers_to_channel() {
        let channel = Arc::new(RecordingChannel::default());
        let dispatcher = NotificationDispatcher::new(channel.clone());
        let member = Member::new(
            "M001".to_string(),
            "John Doe".to_string(),
            "johndoe@example.com".to_string(),
        );

        dispatcher.notify(&member, "Welcome to Cardinal Fitness!");

        let delivered = channel.delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].member_id, "M001");
        assert_eq!(delivered[0].member_name, "John Doe");
        assert_eq!(delivered[0].message, "Welcome to Cardinal Fitness!");
    }
}
