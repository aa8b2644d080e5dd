/// Screen geometry shared by rendering and mouse hit-testing
///
/// The kiosk layout is:
/// - Header: 3 lines (hidden in fullscreen)
/// - Tile grid: remaining space, 2x2
/// - Player: 6 lines
/// - Status bar: 2 lines (hidden in fullscreen)
///
/// The settings modal and the toast stack are overlays positioned on top.
use ratatui::layout::{Constraint as RatatuiConstraint, Direction, Layout as RatatuiLayout, Rect};

use super::component::Constraint;
use super::renderer::convert_constraint;
use super::tiles::Tile;

pub const HEADER_HEIGHT: u16 = 3;
pub const PLAYER_HEIGHT: u16 = 6;
pub const STATUS_BAR_HEIGHT: u16 = 2;

pub const MODAL_WIDTH: u16 = 52;
pub const MODAL_HEIGHT: u16 = 14;

pub const TOAST_WIDTH: u16 = 40;
pub const TOAST_HEIGHT: u16 = 4;

/// Calculated areas for each part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KioskAreas {
    pub header: Option<Rect>,
    pub tiles: Rect,
    pub player: Rect,
    pub status_bar: Option<Rect>,
}

/// Vertical constraints of the main screen, top to bottom
pub fn chrome_constraints(fullscreen: bool) -> Vec<Constraint> {
    if fullscreen {
        vec![Constraint::Min(0), Constraint::Length(PLAYER_HEIGHT)]
    } else {
        vec![
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(PLAYER_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ]
    }
}

pub fn calculate_areas(area: Rect, fullscreen: bool) -> KioskAreas {
    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints(chrome_constraints(fullscreen).into_iter().map(convert_constraint))
        .split(area);

    if fullscreen {
        KioskAreas {
            header: None,
            tiles: chunks[0],
            player: chunks[1],
            status_bar: None,
        }
    } else {
        KioskAreas {
            header: Some(chunks[0]),
            tiles: chunks[1],
            player: chunks[2],
            status_bar: Some(chunks[3]),
        }
    }
}

/// Split the grid area into one rectangle per tile, in `Tile::ALL` order
pub fn tile_areas(grid: Rect) -> [(Tile, Rect); 4] {
    let halves = [RatatuiConstraint::Percentage(50), RatatuiConstraint::Percentage(50)];
    let rows = RatatuiLayout::vertical(halves).split(grid);
    let top = RatatuiLayout::horizontal(halves).split(rows[0]);
    let bottom = RatatuiLayout::horizontal(halves).split(rows[1]);

    [
        (Tile::Maps, top[0]),
        (Tile::Radio, top[1]),
        (Tile::Weather, bottom[0]),
        (Tile::Settings, bottom[1]),
    ]
}

/// The tile under a screen position, if any
pub fn tile_at(area: Rect, fullscreen: bool, column: u16, row: u16) -> Option<Tile> {
    let grid = calculate_areas(area, fullscreen).tiles;
    tile_areas(grid)
        .into_iter()
        .find(|(_, rect)| contains(*rect, column, row))
        .map(|(tile, _)| tile)
}

/// Content region of the settings modal; clicks outside it hit the backdrop
pub fn modal_area(area: Rect) -> Rect {
    centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area)
}

/// Rectangles for `count` stacked toasts in the top-right corner
///
/// Toasts that do not fit below the previous ones are not given an area.
pub fn toast_areas(area: Rect, count: usize) -> Vec<Rect> {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    (0..count)
        .map_while(|i| {
            let offset = u16::try_from(i).ok()?.checked_mul(TOAST_HEIGHT)?;
            (offset + TOAST_HEIGHT <= area.height)
                .then(|| Rect::new(x, area.y + offset, width, TOAST_HEIGHT))
        })
        .collect()
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// A rectangle of at most `width` x `height` centered within `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
