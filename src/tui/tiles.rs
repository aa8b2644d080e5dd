/// Dashboard tiles, in grid order (left to right, top to bottom)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Maps,
    Radio,
    Weather,
    Settings,
}

impl Tile {
    pub const ALL: [Tile; 4] = [Tile::Maps, Tile::Radio, Tile::Weather, Tile::Settings];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Maps => "Maps",
            Self::Radio => "Radio",
            Self::Weather => "Weather",
            Self::Settings => "Settings",
        }
    }

    /// Title used for this tile's notifications
    pub fn service_name(&self) -> &'static str {
        match self {
            Self::Maps => "Navigation",
            Self::Radio => "Radio",
            Self::Weather => "Weather",
            Self::Settings => "Settings",
        }
    }

    pub fn shortcut(&self) -> char {
        match self {
            Self::Maps => 'm',
            Self::Radio => 'r',
            Self::Weather => 'w',
            Self::Settings => 's',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.shortcut() == c)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
