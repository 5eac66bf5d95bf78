//! Detail panel for the selected contact.

use super::layout::DETAIL_IMAGE_SIZE;
use crate::models::Contact;

/// Rendered content of the detail panel. Empty when nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    lines: Vec<String>,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `contact`, or clear the panel for `None`.
    pub fn show(&mut self, contact: Option<&Contact>) {
        self.lines = contact.map(Self::render).unwrap_or_default();
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn render(contact: &Contact) -> Vec<String> {
        let image = match contact.image() {
            Some(image) => format!("Image: {} ({}x{})", image, DETAIL_IMAGE_SIZE, DETAIL_IMAGE_SIZE),
            None => "Image: none".to_string(),
        };

        vec![
            format!("First Name: {}", contact.first_name()),
            format!("Last Name: {}", contact.last_name()),
            format!("Emails: {}", contact.joined_emails(", ")),
            image,
        ]
    }
}
