/// Application-level actions triggered by UI components or shortcuts.
/// An empty name on save/load means "ask the player for one".
#[derive(Debug, Clone)]
pub enum AppAction {
    TogglePause,
    RequestReset,
    RequestSave(String),
    RequestLoad(String),
}

/// Events raised by UI components and consumed by the UI manager itself.
#[derive(Debug, Clone)]
pub enum UIEvent {
    ShowResetConfirmDialog,
}
