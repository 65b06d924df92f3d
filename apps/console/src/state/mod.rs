//! # State Module
//!
//! Application state for the console shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │   ConfigState    │  │  load_catalog()  │  │    SessionState      │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  catalog path    │─►│  sample or JSON  │─►│  Session<Static-     │  │
//! │  │  currency, today │  │  file            │  │    Catalog>          │  │
//! │  │  output format   │  │                  │  │  + clock             │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  ConfigState and the catalog are read-only after startup.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod session;

pub use catalog::load_catalog;
pub use config::{ConfigState, OutputFormat};
pub use session::{LocalClock, SessionState};
