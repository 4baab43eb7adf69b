use chrono::Utc;
use uuid::Uuid;

use super::account::Role;
use super::email::Email;

/// Ephemeral notification event: destination plus a formatted body.
///
/// Built per call, handed to the dispatcher, never persisted.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: Email,
    pub subject: String,
    pub html: String,
}

/// Metadata about the account that uploaded a note.
#[derive(Debug, Clone)]
pub struct UploadActor {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub consent: Option<bool>,
    pub ip: Option<String>,
}

/// Metadata about the uploaded artifact.
#[derive(Debug, Clone)]
pub struct UploadedNote {
    pub subject: String,
    pub category: String,
    pub institute: String,
    pub file_name: String,
    pub file_size_bytes: u64,
}

impl EmailMessage {
    /// Recovery-link email sent to the account's registered address.
    pub fn password_reset(to: Email, reset_link: &str) -> Self {
        let html = format!(
            "<h2>Password Reset</h2>\
             <p>We received a request to reset the password for your account.</p>\
             <p><a href=\"{reset_link}\">Reset your password</a></p>\
             <p>This link expires in 1 hour. If you did not request a reset, \
             you can ignore this email.</p>"
        );
        Self {
            to,
            subject: "Password Reset Request".to_owned(),
            html,
        }
    }

    /// Upload notification sent to the administrative address.
    pub fn upload_notification(to: Email, actor: &UploadActor, note: &UploadedNote) -> Self {
        let consent = if actor.consent.unwrap_or(false) {
            "Yes"
        } else {
            "No"
        };
        let ip = actor.ip.as_deref().unwrap_or("");
        let size_mb = note.file_size_bytes as f64 / (1024.0 * 1024.0);
        let html = format!(
            "<h2>New Note Upload</h2>\
             <p><strong>Uploaded by:</strong> {name}</p>\
             <p><strong>Email:</strong> {email}</p>\
             <p><strong>Phone:</strong> {phone}</p>\
             <p><strong>User Role:</strong> {role}</p>\
             <p><strong>User ID:</strong> {id}</p>\
             <p><strong>Consent:</strong> {consent}</p>\
             <p><strong>IP Address:</strong> {ip}</p>\
             <hr>\
             <h3>Note Details:</h3>\
             <p><strong>Subject:</strong> {subject}</p>\
             <p><strong>Category:</strong> {category}</p>\
             <p><strong>Institute:</strong> {institute}</p>\
             <p><strong>File Name:</strong> {file_name}</p>\
             <p><strong>File Size:</strong> {size_mb:.2} MB</p>\
             <p><strong>Upload Time:</strong> {uploaded_at}</p>",
            name = actor.name,
            email = actor.email,
            phone = actor.phone,
            role = actor.role.as_str(),
            id = actor.id,
            subject = note.subject,
            category = note.category,
            institute = note.institute,
            file_name = note.file_name,
            uploaded_at = Utc::now().to_rfc2822(),
        );
        Self {
            to,
            subject: "New Note Upload Notification".to_owned(),
            html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor() -> UploadActor {
        UploadActor {
            id: Uuid::new_v4(),
            name: "Ann".to_owned(),
            email: "ann@x.com".to_owned(),
            phone: "5551234567".to_owned(),
            role: Role::Student,
            consent: Some(true),
            ip: None,
        }
    }

    fn note() -> UploadedNote {
        UploadedNote {
            subject: "Calculus".to_owned(),
            category: "Math".to_owned(),
            institute: "State".to_owned(),
            file_name: "calc.pdf".to_owned(),
            file_size_bytes: 2 * 1024 * 1024,
        }
    }

    #[test]
    fn reset_email_embeds_the_link() {
        let to = Email::try_from("ann@x.com").unwrap();
        let message = EmailMessage::password_reset(
            to,
            "https://app.example.com/reset-password?token=abc",
        );
        assert!(message.html.contains("reset-password?token=abc"));
        assert_eq!(message.subject, "Password Reset Request");
    }

    #[test]
    fn upload_notification_reports_size_in_megabytes() {
        let to = Email::try_from("admin@x.com").unwrap();
        let message = EmailMessage::upload_notification(to, &actor(), &note());
        assert!(message.html.contains("2.00 MB"));
        assert!(message.html.contains("Consent:</strong> Yes"));
    }
}
