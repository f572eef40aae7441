//! The resolved capture configuration and the semantic layer that
//! builds it from parsed command-line arguments.

use log::warn;

use crate::args::Args;
use crate::error::OptionsError;
use crate::line::Line;
use crate::number;
use crate::thumb::{self, Thumbnail};

/// Window class names are capped at this many characters; longer names
/// are truncated on intake and comparisons stop one short of it.
pub const MAX_WINDOW_CLASS_NAME_LEN: usize = 80;
/// Longest accepted output filename, in bytes.
pub const MAX_FILENAME_LEN: usize = 256;
/// Display names longer than this are truncated on intake.
pub const MAX_DISPLAY_LEN: usize = 256;

/// What happens to windows that obstruct an interactive selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelectMode {
    /// Capture the selection as displayed.
    #[default]
    Capture,
    /// Hide obstructing windows before the shot.
    Hide,
    /// Punch a hole over the selection instead.
    Hole,
}

impl SelectMode {
    /// The mode may be written bare (`hide`) or as the tail of a
    /// `key=value` chain (`mode=hide`); only the text after the last
    /// `=` counts, and it is matched by prefix like the other keyword
    /// options.
    pub fn parse(input: &str) -> Result<Self, OptionsError> {
        let value = match input.rfind('=') {
            Some(i) => &input[i + 1..],
            None => input,
        };
        if value.starts_with("capture") {
            Ok(SelectMode::Capture)
        } else if value.starts_with("hide") {
            Ok(SelectMode::Hide)
        } else if value.starts_with("hole") {
            Ok(SelectMode::Hole)
        } else {
            Err(OptionsError::UnknownSelection(value.to_string()))
        }
    }
}

/// Screen rectangle given to `--autoselect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Region {
    /// `X,Y,W,H` with exactly four comma-separated numbers. Empty
    /// tokens are skipped, so a trailing comma is harmless, but an
    /// input without any comma is rejected outright.
    pub fn parse(input: &str) -> Result<Self, OptionsError> {
        if !input.contains(',') {
            return Err(OptionsError::AutoselectFormat);
        }
        let mut dims = Vec::with_capacity(4);
        for token in input.split(',').filter(|token| !token.is_empty()) {
            dims.push(number::parse_number(token)?);
        }
        let &[x, y, w, h] = dims.as_slice() else {
            return Err(OptionsError::AutoselectCount);
        };
        Ok(Region { x, y, w, h })
    }
}

/// Everything the capture pipeline needs to know, resolved from the
/// command line.
///
/// `Options::default()` is a usable configuration on its own. [`apply`]
/// folds one set of parsed arguments into the record, so a caller can
/// layer several argument sets over it; flags given later overwrite
/// what earlier ones set, and booleans never revert to off.
///
/// [`apply`]: Options::apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Seconds to wait before the shot.
    pub delay: i32,
    /// Compression quality handed to the encoder.
    pub quality: i32,
    pub border: bool,
    pub countdown: bool,
    pub multidisp: bool,
    pub overwrite: bool,
    pub pointer: bool,
    pub freeze: bool,
    pub silent: bool,
    pub stack: bool,
    pub select: Option<SelectMode>,
    pub focused: bool,
    pub autoselect: Option<Region>,
    pub thumbnail: Thumbnail,
    pub output_file: Option<String>,
    /// Derived from the output filename when thumbnailing is on.
    pub thumb_file: Option<String>,
    pub exec: Option<String>,
    pub script: Option<String>,
    pub display: Option<String>,
    pub note: Option<String>,
    pub window: Option<i32>,
    pub window_class_name: Option<String>,
    pub line: Line,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            delay: 0,
            quality: 75,
            border: false,
            countdown: false,
            multidisp: false,
            overwrite: false,
            pointer: false,
            freeze: false,
            silent: false,
            stack: false,
            select: None,
            focused: false,
            autoselect: None,
            thumbnail: Thumbnail::Off,
            output_file: None,
            thumb_file: None,
            exec: None,
            script: None,
            display: None,
            note: None,
            window: None,
            window_class_name: None,
            line: Line::default(),
        }
    }
}

impl Options {
    /// Resolve a fresh configuration from parsed arguments.
    pub fn from_args(args: &Args) -> Result<Self, OptionsError> {
        let mut options = Self::default();
        options.apply(args)?;
        Ok(options)
    }

    /// Fold parsed arguments into this record. On error the fields
    /// already handled keep their new values.
    pub fn apply(&mut self, args: &Args) -> Result<(), OptionsError> {
        self.border |= args.border;
        self.countdown |= args.count;
        self.multidisp |= args.multidisp;
        self.overwrite |= args.overwrite;
        self.pointer |= args.pointer;
        self.freeze |= args.freeze;
        self.silent |= args.silent;
        self.stack |= args.stack;
        self.focused |= args.focused;

        if let Some(delay) = &args.delay {
            self.delay = number::non_negative(number::parse_number(delay)?);
        }
        if let Some(quality) = &args.quality {
            // Not range checked; the encoder gets whatever was asked for.
            self.quality = number::parse_number(quality)?;
        }
        if let Some(select) = &args.select {
            self.select = Some(SelectMode::parse(select)?);
        }
        if let Some(autoselect) = &args.autoselect {
            self.autoselect = Some(Region::parse(autoselect)?);
        }
        if let Some(thumb) = &args.thumb {
            self.thumbnail = Thumbnail::parse(thumb)?;
        }
        if let Some(window) = &args.window {
            self.window = Some(number::parse_number_auto(window)?);
        }
        if let Some(exec) = &args.exec {
            self.exec = Some(exec.clone());
        }
        if let Some(script) = &args.script {
            self.script = Some(script.clone());
        }
        if let Some(display) = &args.display {
            self.display = Some(truncate_chars(display, MAX_DISPLAY_LEN));
        }
        if let Some(note) = &args.note {
            self.set_note(note)?;
        }
        for line in &args.line {
            self.line.apply_subopts(line)?;
        }
        if let Some(class) = &args.class {
            self.set_window_class_name(class);
        }
        self.take_positionals(&args.files)?;
        Ok(())
    }

    /// An empty note is an error; anything else is stored as given.
    pub fn set_note(&mut self, note: &str) -> Result<(), OptionsError> {
        if note.is_empty() {
            return Err(OptionsError::EmptyNote);
        }
        self.note = Some(note.to_string());
        Ok(())
    }

    /// An empty class name is ignored; longer names are truncated to
    /// [`MAX_WINDOW_CLASS_NAME_LEN`] characters.
    pub fn set_window_class_name(&mut self, class: &str) {
        if class.is_empty() {
            return;
        }
        self.window_class_name = Some(truncate_chars(class, MAX_WINDOW_CLASS_NAME_LEN));
    }

    /// The first positional becomes the output filename and, when
    /// thumbnailing is on, seeds the thumbnail filename. Any further
    /// positionals are ignored with a warning.
    fn take_positionals(&mut self, files: &[String]) -> Result<(), OptionsError> {
        for file in files {
            if self.output_file.is_some() {
                warn!("unrecognised option {file}");
                continue;
            }
            if file.len() > MAX_FILENAME_LEN {
                return Err(OptionsError::FilenameTooLong(file.len()));
            }
            self.output_file = Some(file.clone());
            if self.thumbnail.is_enabled() {
                self.thumb_file = Some(thumb::thumbnail_name(file));
            }
        }
        Ok(())
    }

    /// Bounded comparison against the configured window class name.
    /// Always false when no class was configured.
    pub fn matches_window_class(&self, target: &str) -> bool {
        match &self.window_class_name {
            Some(class) => class
                .chars()
                .take(MAX_WINDOW_CLASS_NAME_LEN - 1)
                .eq(target.chars().take(MAX_WINDOW_CLASS_NAME_LEN - 1)),
            None => false,
        }
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
