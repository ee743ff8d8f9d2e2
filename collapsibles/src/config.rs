//! Controller configuration.

/// Configuration for a [`CollapsibleController`](crate::CollapsibleController).
///
/// # Example
///
/// ```
/// use collapsibles::{CollapsibleConfig, LoadBehavior};
///
/// let config = CollapsibleConfig::default()
///     .trigger_class("accordion")
///     .on_load(LoadBehavior::ExpandFirst);
/// ```
#[derive(Debug, Clone)]
pub struct CollapsibleConfig {
    /// Class marking trigger elements.
    ///
    /// Default: `collapsible`
    pub trigger_class: String,

    /// Class toggled on a trigger each time it is clicked.
    ///
    /// Default: `collapsible-active`
    pub active_class: String,

    /// Data attribute on a trigger naming its content element ID. Triggers
    /// without it are paired with their next sibling.
    ///
    /// Default: `controls`
    pub controls_attr: String,

    /// Extra height, in percent of the natural content height, added to the
    /// size constraint so re-flow does not clip the content.
    ///
    /// Default: 20
    pub height_buffer: u32,

    /// Load action registered when the controller is constructed.
    ///
    /// Default: [`LoadBehavior::None`]
    pub on_load: LoadBehavior,
}

impl Default for CollapsibleConfig {
    fn default() -> Self {
        Self {
            trigger_class: "collapsible".to_string(),
            active_class: "collapsible-active".to_string(),
            controls_attr: "controls".to_string(),
            height_buffer: 20,
            on_load: LoadBehavior::None,
        }
    }
}

impl CollapsibleConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger_class(mut self, class: impl Into<String>) -> Self {
        self.trigger_class = class.into();
        self
    }

    pub fn active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    pub fn controls_attr(mut self, attr: impl Into<String>) -> Self {
        self.controls_attr = attr.into();
        self
    }

    /// Sets the height buffer in percent.
    pub fn height_buffer(mut self, percent: u32) -> Self {
        self.height_buffer = percent;
        self
    }

    pub fn on_load(mut self, behavior: LoadBehavior) -> Self {
        self.on_load = behavior;
        self
    }
}

/// What happens to the panels when the page load event fires.
///
/// Pick one per page. Registering both `ExpandFirst` and `ExpandAll` runs
/// both, which clicks the first panel twice and leaves it collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadBehavior {
    /// All panels keep their bound state.
    #[default]
    None,
    /// Click the first panel.
    ExpandFirst,
    /// Click every panel in document order.
    ExpandAll,
}
