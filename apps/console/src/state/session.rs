//! # Session State
//!
//! Owns the one user session the shell drives.
//!
//! The shell is single-threaded and handles one command at a time, so the
//! session is owned directly: no `Arc`, no lock.

use chrono::{Local, NaiveDate};
use tabletreat_core::{Clock, FixedClock, Session, StaticCatalog};

use crate::state::ConfigState;

/// Today's date on the local calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// The shell's session over the loaded catalog.
pub struct SessionState {
    session: Session<StaticCatalog>,
}

impl SessionState {
    /// Starts a session, pinning "today" when the config asks for it.
    pub fn new(catalog: StaticCatalog, config: &ConfigState) -> Self {
        let clock: Box<dyn Clock> = match config.today {
            Some(day) => Box::new(FixedClock(day)),
            None => Box::new(LocalClock),
        };

        SessionState {
            session: Session::new(catalog, clock),
        }
    }

    /// Read access to the session.
    pub fn session(&self) -> &Session<StaticCatalog> {
        &self.session
    }

    /// Write access to the session.
    pub fn session_mut(&mut self) -> &mut Session<StaticCatalog> {
        &mut self.session
    }
}
