//! Line-oriented terminal front-end.
//!
//! [`Terminal`] implements [`Dialogs`] on top of any `BufRead`/`Write` pair,
//! and [`TerminalApp`] runs the main window's command loop with it. Reading
//! from in-memory buffers makes whole sessions scriptable in tests.

use super::controller::{MainController, Outcome};
use super::dialogs::{AlertKind, Dialogs};
use super::form::{ContactForm, DialogKind};
use super::layout::{
    ADD_BUTTON, DELETE_BUTTON, DIALOG_HEIGHT, DIALOG_WIDTH, EDIT_BUTTON, PREVIEW_IMAGE_SIZE,
};
use crate::config::Config;
use crate::domain::ImageRef;
use crate::error::{AppError, AppResult};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, warn};

const MAIN_HELP: &str = "\
Commands:
  list            show all contacts
  select <n>      select contact number n
  clear           clear the selection
  show            show the selected contact
  add             Add Contact
  edit            Edit Contact (selected)
  delete          Delete Contact (selected)
  help            show this help
  quit            exit";

const FORM_HELP: &str = "\
Form commands:
  first <name>    set the first name
  last <name>     set the last name
  email <addr>    add an email field
  email+          add an empty email field
  email-          remove the last email field
  image <path>    choose an image file
  noimage         remove the image
  show            show the form
  submit          submit the form
  cancel          close without saving";

/// A `Dialogs` implementation reading answers from `input` and writing
/// prompts to `output`.
///
/// I/O failures cannot travel through the `Dialogs` methods, so they are
/// treated as a cancel and kept for [`Terminal::take_failure`].
pub struct Terminal<R, W> {
    input: R,
    output: W,
    at_eof: bool,
    failure: Option<io::Error>,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            at_eof: false,
            failure: None,
        }
    }

    /// Whether the input has been exhausted.
    pub fn at_eof(&self) -> bool {
        self.at_eof
    }

    /// The first I/O error seen since the last call, if any.
    pub fn take_failure(&mut self) -> Option<io::Error> {
        self.failure.take()
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, line: impl Display) {
        if self.failure.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.output, "{}", line) {
            self.failure = Some(err);
        }
    }

    fn prompt(&mut self, prompt: &str) -> Option<String> {
        if self.failure.is_none() {
            let written = write!(self.output, "{}", prompt).and_then(|()| self.output.flush());
            if let Err(err) = written {
                self.failure = Some(err);
            }
        }
        self.read_line()
    }

    fn read_line(&mut self) -> Option<String> {
        if self.at_eof || self.failure.is_some() {
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => {
                self.at_eof = true;
                None
            }
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                warn!(error = %err, "Failed to read terminal input");
                self.failure = Some(err);
                None
            }
        }
    }

    fn print_form(&mut self, kind: DialogKind, form: &ContactForm) {
        self.say(format!(
            "-- {} ({}x{}) --",
            kind.title(),
            DIALOG_WIDTH,
            DIALOG_HEIGHT
        ));
        self.say(format!("Enter First Name: {}", form.first_name));
        self.say(format!("Enter Last Name: {}", form.last_name));
        self.say("Emails:");
        if form.email_fields.is_empty() {
            self.say("  (none)");
        }
        for (i, field) in form.email_fields.iter().enumerate() {
            self.say(format!("  {}. {}", i + 1, field));
        }
        match &form.image {
            Some(image) => self.say(format!(
                "Image: {} ({}x{})",
                image, PREVIEW_IMAGE_SIZE, PREVIEW_IMAGE_SIZE
            )),
            None => self.say("Image: none"),
        }
        self.say(format!(
            "Type 'submit' to {}, 'cancel' to close, 'help' for commands.",
            kind.submit_label()
        ));
    }

    fn choose_image(&mut self, form: &mut ContactForm, path: &str) {
        if !Path::new(path).is_file() {
            self.say(format!("No such file: {}", path));
            return;
        }
        match ImageRef::new(path) {
            Ok(image) => form.choose_image(image),
            Err(err) => self.say(err),
        }
    }
}

impl<R: BufRead, W: Write> Dialogs for Terminal<R, W> {
    fn edit_form(&mut self, kind: DialogKind, mut form: ContactForm) -> Option<ContactForm> {
        self.print_form(kind, &form);

        loop {
            let line = self.prompt(&format!("{}> ", kind.title()))?;
            let line = line.trim();
            let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
            let arg = arg.trim();

            match command {
                "" => {}
                "first" => form.first_name = arg.to_string(),
                "last" => form.last_name = arg.to_string(),
                "email" => form.add_email_field(arg),
                "email+" => form.add_email_field(""),
                "email-" => {
                    form.remove_last_email_field();
                }
                "image" => self.choose_image(&mut form, arg),
                "noimage" => form.clear_image(),
                "show" => self.print_form(kind, &form),
                "submit" => return Some(form),
                "cancel" => return None,
                "help" => self.say(FORM_HELP),
                other => self.say(format!("Unknown form command: {} (type 'help')", other)),
            }
        }
    }

    fn confirm(&mut self, title: &str, header: &str) -> bool {
        self.say(format!("-- {} --", title));
        self.say(header);
        matches!(
            self.prompt("[ok/cancel]> ").map(|answer| answer.trim().to_ascii_lowercase()),
            Some(answer) if answer == "ok" || answer == "y" || answer == "yes"
        )
    }

    fn alert(&mut self, kind: AlertKind, title: &str, content: &str) {
        let tag = match kind {
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
        };
        self.say(format!("[{}] {}: {}", tag, title, content));
    }
}

/// The main window as a command loop.
pub struct TerminalApp<R, W> {
    terminal: Terminal<R, W>,
    controller: MainController,
    config: Config,
}

impl<R: BufRead, W: Write> TerminalApp<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self::with_controller(input, output, config, MainController::new())
    }

    pub fn with_controller(input: R, output: W, config: Config, controller: MainController) -> Self {
        Self {
            terminal: Terminal::new(input, output),
            controller,
            config,
        }
    }

    pub fn controller(&self) -> &MainController {
        &self.controller
    }

    /// Consume the app, returning the output sink.
    pub fn into_output(self) -> W {
        self.terminal.into_output()
    }

    /// Run commands until `quit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` if reading input or writing output fails. Model
    /// errors are reported and end only the command that caused them.
    pub fn run(&mut self) -> AppResult<()> {
        let banner = format!(
            "{} ({}x{}) - [{}] [{}] [{}] - type 'help' for commands",
            self.config.window_title,
            self.config.window_width,
            self.config.window_height,
            ADD_BUTTON,
            EDIT_BUTTON,
            DELETE_BUTTON
        );
        self.terminal.say(banner);

        loop {
            let Some(line) = self.terminal.prompt("> ") else {
                break;
            };
            if !self.dispatch(line.trim())? {
                break;
            }
            if let Some(err) = self.terminal.take_failure() {
                return Err(err.into());
            }
        }

        match self.terminal.take_failure() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Handle one command. Returns `false` when the session should end.
    fn dispatch(&mut self, line: &str) -> AppResult<bool> {
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        let result = match command {
            "" => Ok(()),
            "quit" | "exit" => return Ok(false),
            "help" => {
                self.terminal.say(MAIN_HELP);
                Ok(())
            }
            "list" => {
                self.print_list();
                Ok(())
            }
            "show" => {
                self.print_details();
                Ok(())
            }
            "clear" => self.controller.select(None).map_err(AppError::from),
            "select" => self.select(arg.trim()),
            "add" => self.run_intent(|c, t| c.add_contact(t)),
            "edit" => self.run_intent(|c, t| c.edit_selected(t)),
            "delete" => self.run_intent(|c, t| c.delete_selected(t)),
            other => {
                self.terminal
                    .say(format!("Unknown command: {} (type 'help')", other));
                Ok(())
            }
        };

        match result {
            Ok(()) => Ok(true),
            Err(AppError::Model(err)) => {
                error!(command, error = %err, "Command failed");
                self.terminal.say(format!("error: {}", err));
                Ok(true)
            }
            Err(err) => Err(err),
        }
    }

    fn select(&mut self, arg: &str) -> AppResult<()> {
        let Ok(number) = arg.parse::<usize>() else {
            self.terminal
                .say(format!("Usage: select <n> (1-{})", self.controller.contacts().len()));
            return Ok(());
        };
        // Displayed numbers start at 1; 0 maps past the end on purpose.
        let index = number.checked_sub(1).unwrap_or(usize::MAX);
        self.controller.select(Some(index))?;
        self.print_details();
        Ok(())
    }

    fn run_intent<F>(&mut self, intent: F) -> AppResult<()>
    where
        F: FnOnce(&mut MainController, &mut dyn Dialogs) -> crate::error::ModelResult<Outcome>,
    {
        let outcome = intent(&mut self.controller, &mut self.terminal)?;
        match outcome {
            Outcome::Added(index) => {
                self.terminal.say(format!("Added contact {}.", index + 1));
                self.print_details();
            }
            Outcome::Edited(index) => {
                self.terminal.say(format!("Saved contact {}.", index + 1));
                self.print_details();
            }
            Outcome::Deleted(index) => {
                self.terminal.say(format!("Deleted contact {}.", index + 1));
            }
            Outcome::Cancelled => self.terminal.say("Cancelled."),
            Outcome::NoSelection => {}
        }
        Ok(())
    }

    fn print_list(&mut self) {
        let rows = self.controller.list_view().rows();
        if rows.is_empty() {
            self.terminal.say("(no contacts)");
            return;
        }
        let selection = self.controller.selection();
        for (i, row) in rows.iter().enumerate() {
            let marker = if selection == Some(i) { '*' } else { ' ' };
            self.terminal.say(format!("{} {}. {}", marker, i + 1, row));
        }
    }

    fn print_details(&mut self) {
        let lines = self.controller.details().lines().to_vec();
        if lines.is_empty() {
            self.terminal.say("(no contact selected)");
        }
        for line in lines {
            self.terminal.say(line);
        }
    }
}
