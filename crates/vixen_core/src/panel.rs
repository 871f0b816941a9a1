//! Control panel model
//!
//! A hierarchical grouping of named buttons. The panel only describes what
//! to show; a widget collaborator (egui in `vixen_app::panel_ui`) draws it
//! and hands back the [`PanelCommand`]s of the buttons that were clicked.
//!
//! Buttons carry a command value instead of a callback, so the state they
//! act on stays in one place (the animation controller's registry).

use crate::handle::ActionId;

/// What a button does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelCommand {
    /// Toggle the animation action at this registry position.
    Toggle(ActionId),
    /// Stop every animation action.
    StopAll,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelButton {
    pub label: String,
    pub command: PanelCommand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlFolder {
    pub title: String,
    /// Whether the folder starts expanded.
    pub open: bool,
    buttons: Vec<PanelButton>,
}

impl ControlFolder {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            open: false,
            buttons: Vec::new(),
        }
    }

    /// Appends a button, keeping insertion order.
    pub fn add_button(&mut self, label: impl Into<String>, command: PanelCommand) -> &mut Self {
        self.buttons.push(PanelButton {
            label: label.into(),
            command,
        });
        self
    }

    /// Marks the folder as expanded.
    pub fn open(&mut self) -> &mut Self {
        self.open = true;
        self
    }

    #[must_use]
    pub fn buttons(&self) -> &[PanelButton] {
        &self.buttons
    }
}

/// Root of the settings panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPanel {
    folders: Vec<ControlFolder>,
}

impl ControlPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a folder and returns it for population.
    pub fn add_folder(&mut self, title: impl Into<String>) -> &mut ControlFolder {
        self.folders.push(ControlFolder::new(title));
        let last = self.folders.len() - 1;
        &mut self.folders[last]
    }

    #[must_use]
    pub fn folders(&self) -> &[ControlFolder] {
        &self.folders
    }

    #[must_use]
    pub fn folder(&self, title: &str) -> Option<&ControlFolder> {
        self.folders.iter().find(|f| f.title == title)
    }

    /// Looks up the command of a button by folder title and label.
    #[must_use]
    pub fn find_command(&self, folder: &str, label: &str) -> Option<PanelCommand> {
        self.folder(folder)?
            .buttons()
            .iter()
            .find(|b| b.label == label)
            .map(|b| b.command)
    }
}
