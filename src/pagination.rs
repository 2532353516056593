use std::fmt;

/// What happened to the page requested by the current [`State::Running`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    TransportFailed(String),
    Status(u16),
    Parsed { containers: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The download of `page` failed below HTTP
    Transport { page: u32, error: String },
    /// `page` answered with a non-200 status
    Status { page: u32, status: u16 },
    /// `page` has no quote container, end of pagination
    Exhausted { page: u32 },
}

impl StopReason {
    /// The page on which pagination stopped
    pub fn page(&self) -> u32 {
        match self {
            Self::Transport { page, .. } | Self::Status { page, .. } | Self::Exhausted { page } => {
                *page
            }
        }
    }

    /// Number of pages fully scraped before stopping
    pub fn pages_scraped(&self) -> u32 {
        self.page() - 1
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport { page, error } => {
                write!(f, "error making request to page {page}: {error}")
            }
            Self::Status { page, status } => {
                write!(f, "failed to get page {page} (status {status})")
            }
            Self::Exhausted { page } => {
                write!(f, "no quotes found on page {page}, reached end of pagination")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    Running { page: u32 },
    Stopped(StopReason),
}

impl Default for State {
    fn default() -> Self {
        Self::start()
    }
}

impl State {
    pub fn start() -> Self {
        Self::Running { page: 1 }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }

    /// Transition on the outcome of the current page. `Stopped` is absorbing.
    pub fn next(self, outcome: PageOutcome) -> Self {
        let page = match self {
            Self::Running { page } => page,
            stopped @ Self::Stopped(_) => return stopped,
        };

        match outcome {
            PageOutcome::TransportFailed(error) => {
                Self::Stopped(StopReason::Transport { page, error })
            }
            PageOutcome::Status(status) if status != 200 => {
                Self::Stopped(StopReason::Status { page, status })
            }
            PageOutcome::Status(_) => Self::Running { page },
            PageOutcome::Parsed { containers: 0 } => {
                Self::Stopped(StopReason::Exhausted { page })
            }
            PageOutcome::Parsed { .. } => Self::Running { page: page + 1 },
        }
    }
}
