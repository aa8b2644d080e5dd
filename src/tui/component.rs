use ratatui::{buffer::Buffer, layout::Rect};
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use super::action::Action;
use super::modal::SessionId;
use super::theme::Palette;
use crate::settings::Settings;

/// Core component trait - like React.Component
///
/// Components are the building blocks of the UI. Each component:
/// - Has Props (input data, like React props)
/// - Renders to an Element tree (virtual DOM)
///
/// All state lives in `AppState`; components only read their slice of it.
pub trait Component: Send {
    /// Props type for this component
    type Props;

    /// Render component given props (pure function)
    fn view(&self, props: &Self::Props) -> Element;
}

/// Element in virtual component tree
#[derive(Clone)]
pub enum Element {
    /// A widget that can be directly rendered to ratatui buffer
    Widget(Box<dyn ElementWidget>),

    /// A container with layout and children
    Container {
        children: Vec<Element>,
        layout: ContainerLayout,
    },

    /// An overlay that renders on top of base content (for modals, popups, etc.)
    Overlay {
        base: Box<Element>,
        overlay: Box<Element>,
    },

    /// Nothing to render
    None,
}

impl Element {
    pub fn widget(widget: impl ElementWidget + 'static) -> Self {
        Element::Widget(Box::new(widget))
    }

    pub fn overlay(base: Element, overlay: Element) -> Self {
        Element::Overlay {
            base: Box::new(base),
            overlay: Box::new(overlay),
        }
    }
}

/// Layout for container elements
#[derive(Clone)]
pub enum ContainerLayout {
    Vertical(Vec<Constraint>),
    Horizontal(Vec<Constraint>),
}

/// Constraint for layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    Length(u16),
    Min(u16),
    Percentage(u16),
}

/// Side effects returned by the reducer
///
/// The reducer stays pure; the runtime turns these into tasks.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Dispatch `action` once `after` has elapsed
    Delayed { after: Duration, action: Box<Action> },

    // Settings service effects, executed through SettingsEffects
    /// Fetch all settings, tagged with the reconcile generation that asked
    Reconcile(u64),
    LoadSettingsModal(SessionId),
    SaveSettings { session: SessionId, settings: Settings },
}

impl Effect {
    pub fn delayed(after: Duration, action: Action) -> Self {
        Effect::Delayed {
            after,
            action: Box::new(action),
        }
    }

    /// Combine two effects, dropping empty ones
    pub fn and(self, other: Effect) -> Effect {
        match (self, other) {
            (Effect::None, e) | (e, Effect::None) => e,
            (Effect::Batch(mut a), Effect::Batch(b)) => {
                a.extend(b);
                Effect::Batch(a)
            }
            (Effect::Batch(mut a), e) => {
                a.push(e);
                Effect::Batch(a)
            }
            (a, b) => Effect::Batch(vec![a, b]),
        }
    }
}

/// Trait for widgets that can be wrapped in the Element tree
pub trait ElementWidget: Send + Sync {
    /// Render this widget into the provided buffer
    ///
    /// # Arguments
    ///
    /// * `area` - The rectangular area to render into
    /// * `buf` - The buffer to write to
    /// * `palette` - Colors of the applied theme
    fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette);

    /// Clone this widget into a boxed trait object
    fn clone_box(&self) -> Box<dyn ElementWidget>;
}

impl Clone for Box<dyn ElementWidget> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Helper to create a container with vertical layout
pub fn vertical<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Vertical(constraints.to_vec()),
    }
}

/// Helper to create a container with horizontal layout
pub fn horizontal<const N: usize>(constraints: [Constraint; N], children: Vec<Element>) -> Element {
    Element::Container {
        children,
        layout: ContainerLayout::Horizontal(constraints.to_vec()),
    }
}
