mod scripted_dialogs;

#[allow(unused_imports)]
pub use scripted_dialogs::{form, ScriptedDialogs};
