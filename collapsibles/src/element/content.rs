#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Child elements, empty for leaf content.
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }

    pub fn children_mut(&mut self) -> &mut [super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &mut [],
        }
    }
}
