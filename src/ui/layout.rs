//! Window, dialog and button constants shared by every front-end.

/// Primary window title.
pub const WINDOW_TITLE: &str = "ContactApp";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

pub const ADD_BUTTON: &str = "Add Contact";
pub const EDIT_BUTTON: &str = "Edit Contact";
pub const DELETE_BUTTON: &str = "Delete Contact";

/// Side length of the portrait in the detail panel.
pub const DETAIL_IMAGE_SIZE: u32 = 400;

/// Modal add/edit dialog size.
pub const DIALOG_WIDTH: u32 = 300;
pub const DIALOG_HEIGHT: u32 = 400;

/// Side length of the portrait preview inside a dialog.
pub const PREVIEW_IMAGE_SIZE: u32 = 100;
