use ratatui::{
    buffer::Buffer,
    layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect},
};

use super::component::{Constraint, ContainerLayout, Element};
use super::theme::Palette;

/// Renders virtual element tree to ratatui buffer
///
/// The Renderer takes a virtual Element tree produced by components
/// and renders it to the terminal using ratatui.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Render an element tree to the given area in the buffer
    pub fn render(&self, element: &Element, area: Rect, buf: &mut Buffer, palette: &Palette) {
        match element {
            Element::Widget(widget) => widget.render(area, buf, palette),

            Element::Container { children, layout } => {
                let chunks = Self::calculate_layout(layout, area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    self.render(child, *chunk, buf, palette);
                }
            }

            // The overlay gets the full area and positions itself
            Element::Overlay { base, overlay } => {
                self.render(base, area, buf, palette);
                self.render(overlay, area, buf, palette);
            }

            Element::None => {}
        }
    }

    /// Calculate layout constraints and split the area
    fn calculate_layout(layout: &ContainerLayout, area: Rect) -> Vec<Rect> {
        let (direction, constraints) = match layout {
            ContainerLayout::Vertical(constraints) => (Direction::Vertical, constraints),
            ContainerLayout::Horizontal(constraints) => (Direction::Horizontal, constraints),
        };

        RatatuiLayout::default()
            .direction(direction)
            .constraints(constraints.iter().map(|c| convert_constraint(*c)))
            .split(area)
            .to_vec()
    }
}

/// Convert our Constraint type to ratatui's Constraint
pub fn convert_constraint(constraint: Constraint) -> RatatuiConstraint {
    match constraint {
        Constraint::Length(n) => RatatuiConstraint::Length(n),
        Constraint::Min(n) => RatatuiConstraint::Min(n),
        Constraint::Percentage(n) => RatatuiConstraint::Percentage(n),
    }
}
