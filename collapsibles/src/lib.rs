pub mod config;
pub mod controller;
pub mod element;
pub mod error;
pub mod event;
pub mod panel;
pub mod style;

pub use config::{CollapsibleConfig, LoadBehavior};
pub use controller::{set_height, CollapsibleController};
pub use element::{
    count_elements, elements_with_class, find_element, find_element_mut, next_sibling_id,
    path_to, Content, Element,
};
pub use error::CollapsibleError;
pub use event::Event;
pub use panel::{Panel, PanelState};
pub use style::Style;
