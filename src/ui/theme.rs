use crossterm::style::Color;

use crate::{
    cli::ColorArg,
    domain::weather::{Background, Rgb},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Xterm256,
    Basic16,
}

/// Colour support for stdout, or `None` when output should stay plain.
pub fn detect_color_capability(mode: ColorArg, is_terminal: bool) -> Option<ColorCapability> {
    let term = std::env::var("TERM").ok();
    let colorterm = std::env::var("COLORTERM").ok();
    let no_color = std::env::var("NO_COLOR").ok();
    detect_color_capability_from(
        mode,
        is_terminal,
        term.as_deref(),
        colorterm.as_deref(),
        no_color.as_deref(),
    )
}

pub(crate) fn detect_color_capability_from(
    mode: ColorArg,
    is_terminal: bool,
    term: Option<&str>,
    colorterm: Option<&str>,
    no_color: Option<&str>,
) -> Option<ColorCapability> {
    let dumb = term.is_some_and(|value| value.eq_ignore_ascii_case("dumb"));
    match mode {
        ColorArg::Never => return None,
        ColorArg::Auto
            if !is_terminal || dumb || no_color.is_some_and(|value| !value.is_empty()) =>
        {
            return None;
        }
        ColorArg::Auto | ColorArg::Always => {}
    }

    let colorterm = colorterm.unwrap_or_default().to_lowercase();
    let term = term.unwrap_or_default().to_lowercase();
    if dumb {
        Some(ColorCapability::Basic16)
    } else if truecolor_hint(&colorterm) || truecolor_hint(&term) {
        Some(ColorCapability::TrueColor)
    } else if term.contains("256color") {
        Some(ColorCapability::Xterm256)
    } else {
        Some(ColorCapability::Basic16)
    }
}

fn truecolor_hint(value: &str) -> bool {
    value.contains("truecolor") || value.contains("24bit") || value.ends_with("direct")
}

/// Foreground and background for a title painted on `background`'s bottom
/// stop. Light backdrops get dark text.
pub fn title_colors(background: Background, capability: ColorCapability) -> (Color, Color) {
    let (bottom, _) = background.rgb_stops();
    let fg = if luminance(bottom) > 0.6 {
        Color::Black
    } else {
        Color::White
    };
    (fg, quantize(rgb(bottom), capability))
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

fn luminance((r, g, b): Rgb) -> f64 {
    (0.2126 * f64::from(r) + 0.7152 * f64::from(g) + 0.0722 * f64::from(b)) / 255.0
}

pub fn quantize(color: Color, capability: ColorCapability) -> Color {
    match (capability, color) {
        (ColorCapability::TrueColor, c) => c,
        (ColorCapability::Xterm256, Color::Rgb { r, g, b }) => {
            let to_cube = |v: u8| -> u8 { ((f32::from(v) / 255.0) * 5.0).round() as u8 };
            Color::AnsiValue(16 + 36 * to_cube(r) + 6 * to_cube(g) + to_cube(b))
        }
        (ColorCapability::Basic16, Color::Rgb { r, g, b }) => basic16_from_rgb(r, g, b),
        (_, c) => c,
    }
}

fn basic16_from_rgb(r: u8, g: u8, b: u8) -> Color {
    let rf = f32::from(r) / 255.0;
    let gf = f32::from(g) / 255.0;
    let bf = f32::from(b) / 255.0;

    let max = rf.max(gf.max(bf));
    let min = rf.min(gf.min(bf));
    let delta = max - min;
    let light = (max + min) / 2.0;

    if delta < 0.08 {
        return match light {
            l if l < 0.20 => Color::Black,
            l if l < 0.40 => Color::DarkGrey,
            l if l < 0.72 => Color::Grey,
            _ => Color::White,
        };
    }

    let hue = if (max - rf).abs() < f32::EPSILON {
        60.0 * ((gf - bf) / delta).rem_euclid(6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * (((bf - rf) / delta) + 2.0)
    } else {
        60.0 * (((rf - gf) / delta) + 4.0)
    };

    // crossterm names the bright variant plainly and the dim one `Dark*`.
    let (bright, dim) = match hue {
        h if !(30.0..330.0).contains(&h) => (Color::Red, Color::DarkRed),
        h if h < 90.0 => (Color::Yellow, Color::DarkYellow),
        h if h < 150.0 => (Color::Green, Color::DarkGreen),
        h if h < 210.0 => (Color::Cyan, Color::DarkCyan),
        h if h < 270.0 => (Color::Blue, Color::DarkBlue),
        _ => (Color::Magenta, Color::DarkMagenta),
    };
    if light >= 0.55 { bright } else { dim }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_respects_mode_and_env() {
        let cases = [
            (ColorArg::Never, true, Some("xterm-256color"), Some("truecolor"), None, None),
            (ColorArg::Auto, false, Some("xterm-256color"), None, None, None),
            (ColorArg::Auto, true, Some("xterm"), None, Some("1"), None),
            (ColorArg::Auto, true, Some("dumb"), None, None, None),
            (
                ColorArg::Auto,
                true,
                Some("xterm"),
                Some("truecolor"),
                Some(""),
                Some(ColorCapability::TrueColor),
            ),
            (
                ColorArg::Auto,
                true,
                Some("xterm-256color"),
                None,
                None,
                Some(ColorCapability::Xterm256),
            ),
            (
                ColorArg::Auto,
                true,
                Some("xterm"),
                None,
                None,
                Some(ColorCapability::Basic16),
            ),
            (
                ColorArg::Always,
                false,
                Some("xterm-256color"),
                None,
                Some("1"),
                Some(ColorCapability::Xterm256),
            ),
            (
                ColorArg::Always,
                true,
                Some("dumb"),
                Some("truecolor"),
                None,
                Some(ColorCapability::Basic16),
            ),
        ];

        for (mode, is_terminal, term, colorterm, no_color, expected) in cases {
            assert_eq!(
                detect_color_capability_from(mode, is_terminal, term, colorterm, no_color),
                expected,
                "{mode:?} tty={is_terminal} term={term:?} colorterm={colorterm:?}"
            );
        }
    }

    #[test]
    fn titles_contrast_with_their_backdrop() {
        assert_eq!(
            title_colors(Background::Snow, ColorCapability::TrueColor),
            (
                Color::Black,
                Color::Rgb {
                    r: 230,
                    g: 218,
                    b: 218
                }
            )
        );
        assert_eq!(
            title_colors(Background::Storm, ColorCapability::TrueColor).0,
            Color::White
        );
    }

    #[test]
    fn titles_follow_terminal_capability() {
        assert_eq!(
            title_colors(Background::Snow, ColorCapability::Xterm256).1,
            Color::AnsiValue(224)
        );
        assert_eq!(
            title_colors(Background::Snow, ColorCapability::Basic16),
            (Color::Black, Color::White)
        );
        assert_eq!(
            title_colors(Background::Storm, ColorCapability::Basic16).1,
            Color::DarkBlue
        );
    }

    #[test]
    fn quantize_basic16_covers_grey_ramp_and_hues() {
        let basic = |r, g, b| quantize(Color::Rgb { r, g, b }, ColorCapability::Basic16);
        assert_eq!(basic(10, 10, 10), Color::Black);
        assert_eq!(basic(70, 70, 70), Color::DarkGrey);
        assert_eq!(basic(140, 140, 140), Color::Grey);
        assert_eq!(basic(220, 220, 220), Color::White);
        assert!(matches!(basic(200, 50, 50), Color::Red | Color::DarkRed));
        assert!(matches!(basic(50, 200, 50), Color::Green | Color::DarkGreen));
        assert!(matches!(basic(50, 50, 200), Color::Blue | Color::DarkBlue));
    }

    #[test]
    fn quantize_truecolor_passes_through() {
        let color = Color::Rgb {
            r: 123,
            g: 45,
            b: 67,
        };
        assert_eq!(quantize(color, ColorCapability::TrueColor), color);
    }
}
