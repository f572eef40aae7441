//! Appearance of the selection rectangle, configured through the
//! `key=value` suboptions of `--line`.

use crate::error::OptionsError;
use crate::number;
use crate::subopt::{self, SubOpt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineMode {
    /// Draw the rectangle while selecting.
    #[default]
    Classic,
    /// Highlight the edges of the selection instead.
    Edge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: LineStyle,
    pub width: i32,
    /// Color name or value, passed through to the renderer untouched.
    pub color: Option<String>,
    pub opacity: i32,
    pub mode: LineMode,
}

impl Default for Line {
    fn default() -> Self {
        Self {
            style: LineStyle::Solid,
            width: 1,
            color: None,
            opacity: 100,
            mode: LineMode::Classic,
        }
    }
}

impl Line {
    /// Fold one `--line` argument into the record. Known keys overwrite
    /// whatever value was there before; an unknown key or a bad value
    /// aborts mid-list, leaving the earlier assignments in place.
    pub fn apply_subopts(&mut self, input: &str) -> Result<(), OptionsError> {
        for subopt in subopt::iter(input) {
            match subopt.key {
                "style" => {
                    let value = require_value(&subopt, "style")?;
                    self.style = if value.starts_with("dash") {
                        LineStyle::Dashed
                    } else if value.starts_with("solid") {
                        LineStyle::Solid
                    } else {
                        return Err(OptionsError::UnknownSuboptValue {
                            key: "style",
                            value: value.to_string(),
                        });
                    };
                }
                "width" => {
                    let value = require_value(&subopt, "width")?;
                    let width = number::parse_number(value)?;
                    if !(1..=8).contains(&width) {
                        return Err(OptionsError::SuboptOutOfRange {
                            key: "width",
                            lo: 1,
                            hi: 8,
                            value: width,
                        });
                    }
                    self.width = width;
                }
                "color" => {
                    let value = require_value(&subopt, "color")?;
                    self.color = Some(value.to_string());
                }
                "opacity" => {
                    // Parsed but not range checked; the renderer clamps.
                    let value = require_value(&subopt, "opacity")?;
                    self.opacity = number::parse_number(value)?;
                }
                "mode" => {
                    let value = require_value(&subopt, "mode")?;
                    self.mode = if value.starts_with("classic") {
                        LineMode::Classic
                    } else if value.starts_with("edge") {
                        LineMode::Edge
                    } else {
                        return Err(OptionsError::UnknownSuboptValue {
                            key: "mode",
                            value: value.to_string(),
                        });
                    };
                }
                _ => return Err(OptionsError::NoMatchForToken(subopt.token.to_string())),
            }
        }
        Ok(())
    }
}

fn require_value<'a>(subopt: &SubOpt<'a>, key: &'static str) -> Result<&'a str, OptionsError> {
    match subopt.value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(OptionsError::MissingSuboptValue(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_a_thin_solid_classic_line() {
        let line = Line::default();
        assert_eq!(line.style, LineStyle::Solid);
        assert_eq!(line.width, 1);
        assert_eq!(line.color, None);
        assert_eq!(line.opacity, 100);
        assert_eq!(line.mode, LineMode::Classic);
    }

    #[test]
    fn applies_a_full_suboption_list() {
        let mut line = Line::default();
        line.apply_subopts("style=dash,width=3,color=red,opacity=50,mode=edge")
            .unwrap();
        assert_eq!(line.style, LineStyle::Dashed);
        assert_eq!(line.width, 3);
        assert_eq!(line.color.as_deref(), Some("red"));
        assert_eq!(line.opacity, 50);
        assert_eq!(line.mode, LineMode::Edge);
    }

    #[test]
    fn style_and_mode_match_on_prefix() {
        let mut line = Line::default();
        line.apply_subopts("style=dashed,mode=edges").unwrap();
        assert_eq!(line.style, LineStyle::Dashed);
        assert_eq!(line.mode, LineMode::Edge);
    }

    #[test]
    fn rejects_width_outside_one_to_eight() {
        for input in ["width=0", "width=9", "width=-3"] {
            let err = Line::default().apply_subopts(input).unwrap_err();
            assert!(
                matches!(err, OptionsError::SuboptOutOfRange { key: "width", .. }),
                "input: {input}"
            );
        }
    }

    #[test]
    fn accepts_width_bounds() {
        let mut line = Line::default();
        line.apply_subopts("width=8").unwrap();
        assert_eq!(line.width, 8);
        line.apply_subopts("width=1").unwrap();
        assert_eq!(line.width, 1);
    }

    #[test]
    fn rejects_unknown_keys_with_the_whole_token() {
        let err = Line::default()
            .apply_subopts("width=3,dotted=yes")
            .unwrap_err();
        assert_eq!(err, OptionsError::NoMatchForToken("dotted=yes".into()));
    }

    #[test]
    fn rejects_missing_and_empty_values() {
        assert_eq!(
            Line::default().apply_subopts("style").unwrap_err(),
            OptionsError::MissingSuboptValue("style")
        );
        assert_eq!(
            Line::default().apply_subopts("color=").unwrap_err(),
            OptionsError::MissingSuboptValue("color")
        );
    }

    #[test]
    fn later_suboptions_overwrite_earlier_ones() {
        let mut line = Line::default();
        line.apply_subopts("style=dash,style=solid").unwrap();
        assert_eq!(line.style, LineStyle::Solid);
    }

    #[test]
    fn opacity_is_parsed_but_not_range_checked() {
        let mut line = Line::default();
        line.apply_subopts("opacity=500").unwrap();
        assert_eq!(line.opacity, 500);
        line.apply_subopts("opacity=-20").unwrap();
        assert_eq!(line.opacity, -20);
    }

    #[test]
    fn failure_keeps_earlier_assignments() {
        let mut line = Line::default();
        let err = line.apply_subopts("width=5,bogus").unwrap_err();
        assert_eq!(err, OptionsError::NoMatchForToken("bogus".into()));
        assert_eq!(line.width, 5);
    }

    #[test]
    fn empty_input_changes_nothing() {
        let mut line = Line::default();
        line.apply_subopts("").unwrap();
        assert_eq!(line, Line::default());
    }

    #[test]
    fn color_is_stored_verbatim() {
        let mut line = Line::default();
        line.apply_subopts("color=#ff8800").unwrap();
        assert_eq!(line.color.as_deref(), Some("#ff8800"));
    }

    #[test]
    fn width_parse_errors_carry_the_raw_value() {
        assert_eq!(
            Line::default().apply_subopts("width=abc").unwrap_err(),
            OptionsError::NotANumber("abc".into())
        );
    }
}
