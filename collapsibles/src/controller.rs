use log::{debug, trace, warn};

use crate::config::{CollapsibleConfig, LoadBehavior};
use crate::element::{
    count_elements, elements_with_class, find_element, find_element_mut, next_sibling_id,
    path_to, Element,
};
use crate::error::{CollapsibleError, Result};
use crate::event::Event;
use crate::panel::{Panel, PanelState};

/// Constrain `content` to its natural height plus `buffer` percent.
pub fn set_height(content: &mut Element, buffer: u32) {
    let height = content.scroll_height as f32 * (100.0 + buffer as f32) / 100.0;
    trace!("[collapsible] {} max_height -> {}", content.id, height);
    content.style.max_height = Some(height);
}

/// Expands and collapses content panels in response to trigger clicks.
///
/// Panels are discovered once by [`bind_all`](Self::bind_all) and kept in a
/// registry in document order. The tree itself is owned by the host and
/// passed in to every call.
#[derive(Debug, Default)]
pub struct CollapsibleController {
    config: CollapsibleConfig,
    panels: Vec<Panel>,
    pending: Vec<LoadBehavior>,
    loaded: bool,
}

impl CollapsibleController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller, registering `config.on_load` if it is set.
    pub fn with_config(config: CollapsibleConfig) -> Self {
        let on_load = config.on_load;
        let mut controller = Self {
            config,
            ..Default::default()
        };
        controller.register_load(on_load);
        controller
    }

    pub fn config(&self) -> &CollapsibleConfig {
        &self.config
    }

    /// Bound panels in document order.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn panel_for_trigger(&self, trigger: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.trigger == trigger)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.panel(index).is_some_and(Panel::is_expanded)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Load actions waiting for the load event.
    pub fn pending_load(&self) -> &[LoadBehavior] {
        &self.pending
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Scan `root` for triggers and pair each with its content element.
    ///
    /// Replaces any previous registry. Returns the number of panels bound.
    /// Trigger and content IDs must each occur exactly once in the tree.
    pub fn bind_all(&mut self, root: &Element) -> Result<usize> {
        let mut panels = Vec::new();

        for trigger in elements_with_class(root, &self.config.trigger_class) {
            let content_id = self.resolve_content(root, trigger)?;
            for id in [trigger.id.as_str(), content_id.as_str()] {
                if count_elements(root, id) > 1 {
                    return Err(CollapsibleError::DuplicateId { id: id.to_string() });
                }
            }
            let content = find_element(root, &content_id).ok_or_else(|| {
                CollapsibleError::ElementNotFound {
                    id: content_id.clone(),
                }
            })?;

            let state = if content.style.max_height.is_some() {
                PanelState::Expanded
            } else {
                PanelState::Collapsed
            };
            panels.push(Panel {
                trigger: trigger.id.clone(),
                content: content_id,
                state,
            });
        }

        debug!(
            "[collapsible] bound {} panels (trigger class '{}')",
            panels.len(),
            self.config.trigger_class
        );
        self.panels = panels;
        Ok(self.panels.len())
    }

    fn resolve_content(&self, root: &Element, trigger: &Element) -> Result<String> {
        if let Some(id) = trigger.get_data(&self.config.controls_attr) {
            if find_element(root, id).is_none() {
                return Err(CollapsibleError::ElementNotFound { id: id.clone() });
            }
            return Ok(id.clone());
        }

        next_sibling_id(root, &trigger.id)
            .map(str::to_string)
            .ok_or_else(|| CollapsibleError::MissingContent {
                trigger: trigger.id.clone(),
            })
    }

    /// Toggle panel `index`. Returns the panel's new state.
    pub fn click(&mut self, root: &mut Element, index: usize) -> Result<PanelState> {
        let len = self.panels.len();
        let buffer = self.config.height_buffer;
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(CollapsibleError::PanelOutOfRange { index, len })?;

        // Check both ends before touching either.
        for id in [&panel.trigger, &panel.content] {
            if find_element(root, id).is_none() {
                return Err(CollapsibleError::ElementNotFound { id: id.clone() });
            }
        }

        if let Some(trigger) = find_element_mut(root, &panel.trigger) {
            trigger.toggle_class(&self.config.active_class);
        }

        if let Some(content) = find_element_mut(root, &panel.content) {
            match panel.state {
                PanelState::Expanded => {
                    content.style.max_height = None;
                    content.style.opacity = Some(0.0);
                }
                PanelState::Collapsed => {
                    set_height(content, buffer);
                    content.style.opacity = Some(1.0);
                }
            }
        }

        panel.state = panel.state.toggled();
        debug!(
            "[collapsible] {} -> {:?} ({})",
            panel.trigger, panel.state, panel.content
        );
        Ok(panel.state)
    }

    /// Toggle the panel whose trigger is `target` or its nearest ancestor.
    /// Returns `None` when the click did not land on a trigger.
    pub fn click_target(
        &mut self,
        root: &mut Element,
        target: &str,
    ) -> Result<Option<PanelState>> {
        let index = path_to(root, target).and_then(|path| {
            path.iter()
                .rev()
                .find_map(|id| self.panels.iter().position(|p| p.trigger == *id))
        });

        match index {
            Some(index) => self.click(root, index).map(Some),
            None => Ok(None),
        }
    }

    /// Re-apply the size constraint to `content` using the configured buffer.
    pub fn set_height(&self, content: &mut Element) {
        set_height(content, self.config.height_buffer);
    }

    /// Recompute the size constraint of every expanded panel. Collapsed
    /// panels are left alone. Returns the number of panels updated.
    ///
    /// Call this when layout changes may have altered content heights
    /// (e.g. after a resize); the controller does not listen for them.
    pub fn update_all_heights(&self, root: &mut Element) -> Result<usize> {
        let mut updated = 0;
        for panel in self.panels.iter().filter(|p| p.is_expanded()) {
            let content = find_element_mut(root, &panel.content).ok_or_else(|| {
                CollapsibleError::ElementNotFound {
                    id: panel.content.clone(),
                }
            })?;
            self.set_height(content);
            updated += 1;
        }
        trace!("[collapsible] updated {updated} heights");
        Ok(updated)
    }

    /// Expand the first panel when the page load event fires.
    pub fn expand_first(&mut self) {
        self.register_load(LoadBehavior::ExpandFirst);
    }

    /// Expand every panel when the page load event fires.
    pub fn expand_all(&mut self) {
        self.register_load(LoadBehavior::ExpandAll);
    }

    fn register_load(&mut self, behavior: LoadBehavior) {
        if behavior == LoadBehavior::None {
            return;
        }
        if self.loaded {
            debug!("[collapsible] page already loaded, {behavior:?} will not run");
            return;
        }
        if !self.pending.is_empty() {
            warn!(
                "[collapsible] {behavior:?} registered after {:?}; both run on load and the first panel is clicked twice",
                self.pending
            );
        }
        self.pending.push(behavior);
    }

    /// Run the registered load actions once, in registration order.
    /// Returns the number of clicks performed.
    ///
    /// A failing click does not stop the others: every click is attempted
    /// and the first error is returned afterwards.
    pub fn on_load(&mut self, root: &mut Element) -> Result<usize> {
        if self.loaded {
            return Ok(0);
        }
        self.loaded = true;

        let mut clicks = 0;
        let mut first_error = None;
        for behavior in std::mem::take(&mut self.pending) {
            let count = match behavior {
                LoadBehavior::None => 0,
                LoadBehavior::ExpandFirst => self.panels.len().min(1),
                LoadBehavior::ExpandAll => self.panels.len(),
            };
            for index in 0..count {
                match self.click(root, index) {
                    Ok(_) => clicks += 1,
                    Err(err) => {
                        warn!("[collapsible] load click on panel {index} failed: {err}");
                        first_error.get_or_insert(err);
                    }
                }
            }
        }

        debug!("[collapsible] load: {clicks} clicks");
        match first_error {
            Some(err) => Err(err),
            None => Ok(clicks),
        }
    }

    /// Dispatch a page event. Returns true if the tree changed.
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> Result<bool> {
        match event {
            Event::Click {
                target: Some(target),
            } => Ok(self.click_target(root, target)?.is_some()),
            Event::Click { target: None } => Ok(false),
            Event::Load => Ok(self.on_load(root)? > 0),
            Event::Resize { .. } => Ok(false),
        }
    }
}
