//! Heuristics for spotting code in styled text.
//!
//! The source documents have no notion of a code span. Authors mark code by
//! switching to a monospace font or by shading the text, so a run counts as
//! code when its font family is the configured monospace family or its
//! background is strongly red-tinted. These are heuristics over
//! [`TextStyle`], not a type distinction.

use docmd_model::TextStyle;

use crate::Options;

/// Language tag given to fenced blocks opened by a PowerShell snippet.
pub const POWERSHELL: &str = "powershell";

/// Whether the run's font family is the configured monospace family.
#[must_use]
pub fn has_code_font(style: &TextStyle, options: &Options) -> bool {
    style.font_family.as_deref() == Some(options.code_font_family())
}

/// Whether the run's background red channel is above the configured threshold.
#[must_use]
pub fn has_code_background(style: &TextStyle, options: &Options) -> bool {
    style
        .background_color
        .is_some_and(|color| color.red > options.code_background_red_threshold())
}

/// Classify a run as code.
#[must_use]
pub fn is_code_run(style: &TextStyle, options: &Options) -> bool {
    has_code_font(style, options) || has_code_background(style, options)
}

/// Whether `content` mentions PowerShell, ignoring case.
#[must_use]
pub fn mentions_powershell(content: &str) -> bool {
    content.to_lowercase().contains(POWERSHELL)
}

#[cfg(test)]
mod tests {
    use docmd_model::RgbColor;

    use super::*;

    fn style_with_font(font: &str) -> TextStyle {
        TextStyle {
            font_family: Some(font.to_string()),
            ..TextStyle::default()
        }
    }

    fn style_with_red(red: f32) -> TextStyle {
        TextStyle {
            background_color: Some(RgbColor {
                red,
                ..RgbColor::default()
            }),
            ..TextStyle::default()
        }
    }

    #[test]
    fn font_family_must_match_exactly() {
        let options = Options::default();
        assert!(is_code_run(&style_with_font("Consolas"), &options));
        assert!(!is_code_run(&style_with_font("consolas"), &options));
        assert!(!is_code_run(&style_with_font("Arial"), &options));
        assert!(!is_code_run(&TextStyle::default(), &options));
    }

    #[test]
    fn background_red_must_exceed_threshold() {
        let options = Options::default();
        assert!(is_code_run(&style_with_red(0.95), &options));
        assert!(!is_code_run(&style_with_red(0.9), &options));
        assert!(!is_code_run(&style_with_red(0.2), &options));
    }

    #[test]
    fn heuristics_follow_options() {
        let options = Options::builder()
            .code_font_family("Courier New")
            .code_background_red_threshold(0.5)
            .build();
        assert!(is_code_run(&style_with_font("Courier New"), &options));
        assert!(!is_code_run(&style_with_font("Consolas"), &options));
        assert!(is_code_run(&style_with_red(0.6), &options));
    }

    #[test]
    fn powershell_detection_ignores_case() {
        assert!(mentions_powershell("PowerShell\nGet-Process"));
        assert!(mentions_powershell("run in POWERSHELL"));
        assert!(!mentions_powershell("Get-Process"));
    }
}
