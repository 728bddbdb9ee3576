/// Controls whether a rendered record ends with a newline terminator.
///
/// Stream destinations (standard error, UDP datagrams read by line-oriented
/// collectors) expect one record per line. syslog(3) delimits entries itself,
/// so records sent there are rendered without a terminator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineMode {
    /// Append a newline terminator after each rendered record.
    #[default]
    WithNewline,
    /// Emit the rendered record without a trailing newline.
    WithoutNewline,
}

impl LineMode {
    /// Reports whether the mode appends a trailing newline when rendering a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::LineMode;
    ///
    /// assert!(LineMode::WithNewline.append_newline());
    /// assert!(!LineMode::WithoutNewline.append_newline());
    /// ```
    #[must_use]
    pub const fn append_newline(self) -> bool {
        matches!(self, Self::WithNewline)
    }

    /// Terminates `record` according to the mode.
    ///
    /// A record that already ends with a newline is left alone so multi-line
    /// payloads never gain a blank line.
    pub fn terminate(self, record: &mut String) {
        if self.append_newline() && !record.ends_with('\n') {
            record.push('\n');
        }
    }
}

impl From<bool> for LineMode {
    /// `true` selects [`LineMode::WithNewline`], `false` selects [`LineMode::WithoutNewline`].
    fn from(append_newline: bool) -> Self {
        if append_newline {
            Self::WithNewline
        } else {
            Self::WithoutNewline
        }
    }
}

impl From<LineMode> for bool {
    fn from(mode: LineMode) -> Self {
        mode.append_newline()
    }
}
