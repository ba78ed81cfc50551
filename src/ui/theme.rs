use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub sorted: Color,     // Green, whole array once a run completes
    pub comparison: Color, // Green, elements being compared
    pub active: Color,     // Purple, pivot / currently selected element
    pub idle: Color,       // Grey, everything else
    pub comment: Color,
    pub status_bg: Color,
    pub border: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(0, 0, 0),
    fg: Color::Rgb(205, 214, 244),
    sorted: Color::Rgb(100, 180, 100),
    comparison: Color::Rgb(100, 180, 100),
    active: Color::Rgb(165, 105, 189),
    idle: Color::Rgb(170, 183, 184),
    comment: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
    border: Color::Rgb(108, 112, 134),
};
