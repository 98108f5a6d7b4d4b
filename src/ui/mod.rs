pub mod render;
pub mod theme;

use crossterm::style::Stylize;

use crate::{domain::weather::Background, ui::theme::ColorCapability};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `None` renders plain text.
    pub color: Option<ColorCapability>,
    /// Base URL illustrations are served from.
    pub asset_base: String,
}

impl RenderOptions {
    pub fn plain(asset_base: impl Into<String>) -> Self {
        Self {
            color: None,
            asset_base: asset_base.into(),
        }
    }
}

/// Paints `text` on the bottom stop of `background`, quantized to what the
/// terminal can show.
pub fn paint(text: &str, background: Background, color: Option<ColorCapability>) -> String {
    let Some(capability) = color else {
        return text.to_string();
    };
    let (fg, bg) = theme::title_colors(background, capability);
    format!(" {text} ").with(fg).on(bg).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_is_identity_without_colour() {
        assert_eq!(paint("Paris", Background::Sky, None), "Paris");
    }

    #[test]
    fn painted_titles_keep_their_text() {
        let painted = paint("Oslo", Background::Snow, Some(ColorCapability::TrueColor));
        assert!(painted.contains(" Oslo "));
    }
}
