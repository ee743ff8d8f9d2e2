/// Inline presentation values applied by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Style {
    /// Maximum height in px. `None` means unconstrained by inline style,
    /// which the surrounding stylesheet renders as collapsed.
    pub max_height: Option<f32>,
    /// Opacity in `0.0..=1.0`. `None` leaves the stylesheet value.
    pub opacity: Option<f32>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }
}
