//! Contact form: composes a `mailto:` link and hands it to the visitor's
//! email client. No backend is involved anywhere.

use eframe::egui;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::info;

use crate::theme::colors;
use super::PortfolioApp;

/// Delay between pressing Send and opening the email client, so the
/// "Sending..." state is visible.
pub(crate) const SEND_DELAY_SECONDS: f64 = 1.5;

/// `encodeURIComponent`-style set: everything but unreserved characters.
const MAILTO_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Default)]
pub(crate) struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Set when Send was pressed; cleared once the mailto link opens.
    pub sending_since: Option<f64>,
}

impl ContactForm {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.email.trim().contains('@')
            && !self.message.trim().is_empty()
    }

    pub fn reset_fields(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Build the `mailto:` URL for a submission: fixed recipient, generated
/// subject, and a body carrying the message plus the reply address, with
/// CRLF line breaks percent-encoded.
pub(crate) fn compose_mailto(
    recipient: &str,
    owner_name: &str,
    name: &str,
    reply_email: &str,
    message: &str,
) -> String {
    let owner_first = owner_name.split_whitespace().next().unwrap_or(owner_name);
    let subject = format!("Message from {name} - Portfolio Contact");
    let body = format!(
        "Hello {owner_first},\r\n\r\n\
         My name is {name} and I'm reaching out from your portfolio website.\r\n\r\n\
         {message}\r\n\r\n\
         You can reach me at: {reply_email}\r\n\r\n\
         Best regards,\r\n{name}"
    );

    format!(
        "mailto:{recipient}?subject={}&body={}",
        utf8_percent_encode(&subject, MAILTO_SET),
        utf8_percent_encode(&body, MAILTO_SET),
    )
}

impl PortfolioApp {
    pub(crate) fn render_contact_form(&mut self, ui: &mut egui::Ui) {
        let form = &mut self.contact_form;
        let sending = form.sending_since.is_some();

        ui.label(egui::RichText::new("Name").color(colors::TEXT_SECONDARY).size(13.0));
        ui.add_enabled(!sending, egui::TextEdit::singleline(&mut form.name).desired_width(f32::INFINITY));
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Email").color(colors::TEXT_SECONDARY).size(13.0));
        ui.add_enabled(!sending, egui::TextEdit::singleline(&mut form.email).desired_width(f32::INFINITY));
        ui.add_space(8.0);

        ui.label(egui::RichText::new("Message").color(colors::TEXT_SECONDARY).size(13.0));
        ui.add_enabled(
            !sending,
            egui::TextEdit::multiline(&mut form.message)
                .desired_rows(5)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(12.0);

        let label = if sending { "Sending..." } else { "Send Message" };
        let button = egui::Button::new(
            egui::RichText::new(label).color(colors::TEXT_PRIMARY).size(14.0),
        )
        .fill(colors::ACCENT_DIM)
        .corner_radius(6.0);

        let enabled = !sending && form.is_valid();
        if ui.add_enabled(enabled, button).clicked() {
            form.sending_since = Some(crate::time::now_seconds());
            info!("contact form submitted");
        }
    }

    /// Finish a pending submission once the send delay elapsed: open the
    /// composed mailto link, confirm with a toast, reset the form.
    pub(crate) fn contact_tick(&mut self, ctx: &egui::Context, now: f64) {
        let Some(since) = self.contact_form.sending_since else {
            return;
        };
        if now - since < SEND_DELAY_SECONDS {
            return;
        }

        let link = compose_mailto(
            &self.content.email,
            &self.content.owner_name,
            self.contact_form.name.trim(),
            self.contact_form.email.trim(),
            self.contact_form.message.trim(),
        );
        ctx.open_url(egui::OpenUrl::same_tab(link));

        self.notifications
            .push("Email client opened! Please send your message.", now);
        self.contact_form.reset_fields();
        self.contact_form.sending_since = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_targets_the_recipient() {
        let link = compose_mailto("me@example.org", "Jo Doe", "Sam", "sam@example.com", "Hi");
        assert!(link.starts_with("mailto:me@example.org?subject="));
    }

    #[test]
    fn subject_is_percent_encoded() {
        let link = compose_mailto("me@example.org", "Jo Doe", "Sam", "sam@example.com", "Hi");
        // '-' is unreserved and passes through unencoded.
        assert!(link.contains("subject=Message%20from%20Sam%20-%20Portfolio%20Contact"));
    }

    #[test]
    fn body_uses_crlf_breaks_and_carries_the_reply_address() {
        let link = compose_mailto("me@example.org", "Jo Doe", "Sam", "sam@example.com", "Hi");
        assert!(link.contains("%0D%0A"));
        assert!(link.contains("sam%40example.com"));
        // Greeting addresses the owner by first name.
        assert!(link.contains("Hello%20Jo%2C"));
    }

    #[test]
    fn message_content_survives_encoding() {
        let link = compose_mailto(
            "me@example.org",
            "Jo",
            "Sam",
            "sam@example.com",
            "Let's talk about wasm & rust!",
        );
        assert!(link.contains("Let%27s%20talk%20about%20wasm%20%26%20rust%21"));
    }

    #[test]
    fn empty_fields_block_submission() {
        let mut form = ContactForm::default();
        assert!(!form.is_valid());

        form.name = "Sam".into();
        form.email = "sam@example.com".into();
        assert!(!form.is_valid());

        form.message = "Hello".into();
        assert!(form.is_valid());
    }

    #[test]
    fn email_must_look_like_an_address() {
        let form = ContactForm {
            name: "Sam".into(),
            email: "not-an-email".into(),
            message: "Hello".into(),
            sending_since: None,
        };
        assert!(!form.is_valid());
    }

    #[test]
    fn reset_clears_the_fields() {
        let mut form = ContactForm {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            message: "Hello".into(),
            sending_since: Some(1.0),
        };
        form.reset_fields();
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }
}
