use contact_app::ui::{AlertKind, ContactForm, DialogKind, Dialogs};
use std::collections::VecDeque;

/// Mock dialog toolkit for testing.
///
/// Answers come from queues configured up front; every dialog shown is
/// recorded for verification. An exhausted queue behaves like the user
/// closing the dialog.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct ScriptedDialogs {
    forms: VecDeque<Option<ContactForm>>,
    confirms: VecDeque<bool>,
    /// Forms as they were presented to the user, with the dialog kind.
    pub presented: Vec<(DialogKind, ContactForm)>,
    /// Alerts shown, as (kind, title, content).
    pub alerts: Vec<(AlertKind, String, String)>,
    /// Confirmation prompts shown, as (title, header).
    pub confirmations: Vec<(String, String)>,
}

#[allow(dead_code)]
impl ScriptedDialogs {
    /// Create a new ScriptedDialogs with empty queues.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a form the user submits.
    pub fn submit(mut self, form: ContactForm) -> Self {
        self.forms.push_back(Some(form));
        self
    }

    /// Queue a cancelled dialog.
    pub fn cancel(mut self) -> Self {
        self.forms.push_back(None);
        self
    }

    /// Queue an answer to a confirmation prompt.
    pub fn answer(mut self, ok: bool) -> Self {
        self.confirms.push_back(ok);
        self
    }

    /// Titles of all alerts shown so far.
    pub fn alert_titles(&self) -> Vec<&str> {
        self.alerts.iter().map(|(_, title, _)| title.as_str()).collect()
    }
}

impl Dialogs for ScriptedDialogs {
    fn edit_form(&mut self, kind: DialogKind, form: ContactForm) -> Option<ContactForm> {
        self.presented.push((kind, form));
        self.forms.pop_front().flatten()
    }

    fn confirm(&mut self, title: &str, header: &str) -> bool {
        self.confirmations
            .push((title.to_string(), header.to_string()));
        self.confirms.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, kind: AlertKind, title: &str, content: &str) {
        self.alerts
            .push((kind, title.to_string(), content.to_string()));
    }
}

/// Build a submitted form.
#[allow(dead_code)]
pub fn form(first: &str, last: &str, emails: &[&str]) -> ContactForm {
    ContactForm {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email_fields: emails.iter().map(|e| e.to_string()).collect(),
        image: None,
    }
}
