use crate::config::LayoutConfig;
use crate::text_metrics;
use crate::theme::Theme;

use super::TextBlock;

/// Single-line label block. Timeline labels never wrap; the page grows to
/// fit the widest one instead.
pub(crate) fn measure_label(
    text: &str,
    font_size: f32,
    theme: &Theme,
    config: &LayoutConfig,
) -> TextBlock {
    TextBlock {
        text: text.to_string(),
        width: text_width(text, font_size, &theme.font_family, config.fast_text_metrics),
        height: font_size,
    }
}

pub(super) fn text_width(text: &str, font_size: f32, font_family: &str, fast_metrics: bool) -> f32 {
    if fast_metrics {
        return fallback_text_width(text, font_size);
    }
    text_metrics::measure_text_width(text, font_size, font_family)
        .unwrap_or_else(|| fallback_text_width(text, font_size))
}

// Rough em widths for a proportional sans-serif face
fn char_width_factor(ch: char) -> f32 {
    match ch {
        ' ' | '.' | ',' | ':' | ';' | '\'' | '!' | '|' => 0.28,
        'i' | 'j' | 'l' | 'I' | 'f' | 't' | 'r' | '(' | ')' | '[' | ']' => 0.33,
        'm' | 'w' | 'M' | 'W' | '@' | '%' => 0.88,
        'A'..='Z' => 0.67,
        '0'..='9' => 0.56,
        '-' => 0.33,
        c if c.is_ascii() => 0.53,
        _ => 0.9,
    }
}

fn fallback_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_width_factor).sum::<f32>() * font_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_width_factor_returns_positive_values() {
        for ch in ['a', 'Z', ' ', '0', '@', '\u{4e2d}'] {
            assert!(char_width_factor(ch) > 0.0, "char {:?} has zero width", ch);
        }
    }

    #[test]
    fn fallback_text_width_scales_with_font_size() {
        let w13 = fallback_text_width("Homo sapiens (300.0 kya)", 13.0);
        let w26 = fallback_text_width("Homo sapiens (300.0 kya)", 26.0);
        assert!((w26 - w13 * 2.0).abs() < 0.01);
    }

    #[test]
    fn fast_metrics_skip_font_lookup() {
        let config = LayoutConfig {
            fast_text_metrics: true,
            ..LayoutConfig::default()
        };
        let block = measure_label("Fire (1.0 mya)", 13.0, &Theme::classic(), &config);
        assert_eq!(block.width, fallback_text_width("Fire (1.0 mya)", 13.0));
        assert_eq!(block.height, 13.0);
    }

    #[test]
    fn empty_label_has_no_width() {
        let config = LayoutConfig::default();
        let block = measure_label("", 13.0, &Theme::classic(), &config);
        assert_eq!(block.width, 0.0);
    }
}
