/// Page events the host forwards to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Element was clicked
    Click { target: Option<String> },
    /// Page finished loading
    Load,
    /// Viewport resized. Not handled by the controller; the host decides
    /// whether to call `update_all_heights`.
    Resize { width: u16, height: u16 },
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }
}
