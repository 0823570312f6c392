use crate::character::CharacterId;
use crate::state::UpdateSnapshot;

/// Inputs to the selection-window update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User toggled a character button in the selection grid.
    CharacterToggled(CharacterId),
    /// User clicked the selection window's close button.
    CloseRequested,
    /// Tray icon activated, or "Open" chosen from the tray menu.
    OpenSelected,
    /// "Open Moonlark" chosen from the tray menu.
    OpenComicSelected,
    /// "Open Moonlark Archive" chosen from the tray menu.
    OpenArchiveSelected,
    /// "About" chosen from the tray menu.
    OpenAboutSelected,
    /// "Exit" chosen from the tray menu.
    ExitSelected,
    /// The poll worker detected a new comic update.
    UpdateFound(UpdateSnapshot),
    /// The user clicked the most recent notification.
    NotificationClicked,
}
