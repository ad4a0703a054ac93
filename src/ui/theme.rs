use fltk::enums::Color;

/// Widget colors for one theme. The output view's style table is built
/// from the same palette so text styling stays in step with the chrome.
pub struct Palette {
    pub window_bg: Color,
    pub surface: Color,
    pub field_bg: Color,
    pub text: Color,
    pub strong: Color,
    pub muted: Color,
    pub accent: Color,
    pub action: Color,
    pub danger: Color,
    pub selection: Color,
}

pub fn palette(dark: bool) -> Palette {
    if dark {
        Palette {
            window_bg: Color::from_rgb(17, 24, 39),
            surface: Color::from_rgb(31, 41, 55),
            field_bg: Color::from_rgb(11, 18, 32),
            text: Color::from_rgb(209, 213, 219),
            strong: Color::from_rgb(255, 255, 255),
            muted: Color::from_rgb(128, 136, 152),
            accent: Color::from_rgb(96, 165, 250),
            action: Color::from_rgb(185, 28, 28),
            danger: Color::from_rgb(248, 113, 113),
            selection: Color::from_rgb(55, 65, 100),
        }
    } else {
        Palette {
            window_bg: Color::from_rgb(243, 244, 246),
            surface: Color::from_rgb(229, 231, 235),
            field_bg: Color::White,
            text: Color::from_rgb(31, 41, 55),
            strong: Color::Black,
            muted: Color::from_rgb(107, 114, 128),
            accent: Color::from_rgb(37, 99, 235),
            action: Color::from_rgb(185, 28, 28),
            danger: Color::from_rgb(153, 27, 27),
            selection: Color::from_rgb(173, 216, 230),
        }
    }
}
