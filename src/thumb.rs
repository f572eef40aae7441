//! Thumbnail sizing and thumbnail file naming.

use crate::error::OptionsError;
use crate::number;

/// How the thumbnail is sized, if one is requested at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Thumbnail {
    #[default]
    Off,
    /// Scale factor relative to the capture, clamped to 1..=100.
    Percent(i32),
    /// Absolute geometry in pixels.
    Size { width: i32, height: i32 },
}

impl Thumbnail {
    pub fn is_enabled(self) -> bool {
        self != Thumbnail::Off
    }

    /// Parse a `--thumb` argument, either a percentage or a `WxH`
    /// geometry. `0x0` turns thumbnailing back off and negative
    /// dimensions are bumped to 1.
    pub fn parse(input: &str) -> Result<Self, OptionsError> {
        match input.split_once('x') {
            Some((w, h)) => {
                let mut width = number::parse_number(w)?;
                let mut height = number::parse_number(h)?;
                if width < 0 {
                    width = 1;
                }
                if height < 0 {
                    height = 1;
                }
                if width == 0 && height == 0 {
                    Ok(Thumbnail::Off)
                } else {
                    Ok(Thumbnail::Size { width, height })
                }
            }
            None => Ok(Thumbnail::Percent(
                number::parse_number(input)?.clamp(1, 100),
            )),
        }
    }
}

/// Derive the thumbnail filename from the output filename by inserting
/// `-thumb` before the last extension; a name without a dot just gets
/// the suffix appended.
pub fn thumbnail_name(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => format!("{}-thumb{}", &name[..dot], &name[dot..]),
        None => format!("{name}-thumb"),
    }
}
