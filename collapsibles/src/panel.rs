/// Visibility state of a content panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    Expanded,
    #[default]
    Collapsed,
}

impl PanelState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }
}

/// A trigger and the content element it controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub trigger: String,
    pub content: String,
    pub state: PanelState,
}

impl Panel {
    pub fn new(trigger: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            trigger: trigger.into(),
            content: content.into(),
            state: PanelState::Collapsed,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_is_involution() {
        for state in [PanelState::Expanded, PanelState::Collapsed] {
            assert_ne!(state.toggled(), state);
            assert_eq!(state.toggled().toggled(), state);
        }
    }

    #[test]
    fn test_new_panel_is_collapsed() {
        let panel = Panel::new("t", "c");
        assert!(!panel.is_expanded());
    }
}
