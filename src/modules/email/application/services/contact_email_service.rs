use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    ContactMessage, ContactNotificationError, ContactNotifier, EmailSender, OutgoingEmail,
};

#[derive(Clone)]
pub struct ContactEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
}

impl fmt::Debug for ContactEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactEmailService")
            .field("sender", &"<dyn EmailSender>")
            .finish()
    }
}

impl ContactEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>) -> Self {
        Self { sender }
    }
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_body(message: &ContactMessage) -> String {
    format!(
        "<p>You received a new message through <strong>{title}</strong>.</p>\
         <p><strong>From:</strong> {name} &lt;{email}&gt;</p>\
         <p style=\"white-space: pre-wrap\">{body}</p>",
        title = escape_html(&message.portfolio_title),
        name = escape_html(&message.sender_name),
        email = escape_html(&message.sender_email),
        body = escape_html(&message.message),
    )
}

#[async_trait]
impl ContactNotifier for ContactEmailService {
    async fn notify_owner(&self, message: ContactMessage) -> Result<(), ContactNotificationError> {
        let email = OutgoingEmail {
            to: message.owner_email.clone(),
            reply_to: Some(message.sender_email.clone()),
            subject: format!("New message from {}", message.sender_name),
            html_body: render_body(&message),
        };

        self.sender
            .send_email(email)
            .await
            .map_err(|e| ContactNotificationError::EmailSendingFailed(e.to_string()))
    }
}
