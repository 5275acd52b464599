use ratatui::style::Color;

/// Screen colours derived from the host theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
}

impl Palette {
    /// Falls back to the terminal's own colours when there is no usable theme
    pub fn from_theme(background: Option<&str>) -> Self {
        match background.and_then(parse_hex_color) {
            Some(bg @ Color::Rgb(r, g, b)) => {
                let light = luminance(r, g, b) > 140;
                Self {
                    background: bg,
                    foreground: if light { Color::Black } else { Color::White },
                    muted: if light { Color::DarkGray } else { Color::Gray },
                }
            }
            _ => Self {
                background: Color::Reset,
                foreground: Color::Reset,
                muted: Color::DarkGray,
            },
        }
    }
}

/// `#rrggbb` or `#rgb`
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        3 => {
            let expand = |s: &str| channel(s).map(|v| v * 17);
            Some(Color::Rgb(
                expand(&hex[0..1])?,
                expand(&hex[1..2])?,
                expand(&hex[2..3])?,
            ))
        }
        _ => None,
    }
}

fn luminance(r: u8, g: u8, b: u8) -> u32 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#17212b"), Some(Color::Rgb(0x17, 0x21, 0x2b)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(255, 255, 255)));
        assert_eq!(parse_hex_color("17212b"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#1234"), None);
        assert_eq!(parse_hex_color("#aé123"), None);
        assert_eq!(parse_hex_color("#ééé"), None);
    }

    #[test]
    fn test_palette_contrast() {
        let dark = Palette::from_theme(Some("#17212b"));
        assert_eq!(dark.foreground, Color::White);

        let light = Palette::from_theme(Some("#ffffff"));
        assert_eq!(light.foreground, Color::Black);

        let none = Palette::from_theme(None);
        assert_eq!(none.background, Color::Reset);

        let garbled = Palette::from_theme(Some("#aé123"));
        assert_eq!(garbled, none);
    }
}
