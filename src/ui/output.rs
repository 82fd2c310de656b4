//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including resolved paths.
    Verbose,
    /// Show status and warnings.
    #[default]
    Normal,
    /// Show warnings but no status chatter.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl From<crate::config::schema::OutputMode> for OutputMode {
    fn from(config_mode: crate::config::schema::OutputMode) -> Self {
        match config_mode {
            crate::config::schema::OutputMode::Verbose => Self::Verbose,
            crate::config::schema::OutputMode::Normal => Self::Normal,
            crate::config::schema::OutputMode::Quiet => Self::Quiet,
            crate::config::schema::OutputMode::Silent => Self::Silent,
        }
    }
}

impl OutputMode {
    /// Check if this mode shows detail lines (resolved paths, cache state).
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows warnings.
    pub fn shows_warnings(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}
