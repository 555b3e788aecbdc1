pub mod contact_notifier;
pub mod email_sender;

pub use contact_notifier::{ContactMessage, ContactNotificationError, ContactNotifier};
pub use email_sender::{EmailSendError, EmailSender, OutgoingEmail};
