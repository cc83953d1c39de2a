use ratatui::style::Color;

pub const LIFTED_BORDER: Color = Color::Cyan;
pub const COLUMN_BORDER: Color = Color::White;
pub const CARD_BORDER: Color = Color::Gray;
pub const PLACEHOLDER: Color = Color::DarkGray;
pub const DROP_INDICATOR: Color = Color::Yellow;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const OVERDUE: Color = Color::Red;

pub const TITLE_BAR_BG: Color = Color::Blue;
pub const POPUP_BG: Color = Color::Black;
pub const FOCUSED_BORDER: Color = Color::Cyan;

/// Parses `#rrggbb` label colours; anything else renders as plain text.
pub fn label_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_color() {
        assert_eq!(label_color("#ff6b6b"), Some(Color::Rgb(0xff, 0x6b, 0x6b)));
        assert_eq!(label_color("ff6b6b"), None);
        assert_eq!(label_color("#fff"), None);
        assert_eq!(label_color("#zzzzzz"), None);
    }
}
