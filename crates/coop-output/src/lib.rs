//! `coop-output` — result writers for the rust_coop simulation.
//!
//! | Backend | Files created                                         |
//! |---------|-------------------------------------------------------|
//! | CSV     | `entities.csv`, `adjacency.csv`, `final_needs.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven either live by
//! [`RunOutputObserver`], which implements `coop_sim::SimObserver`, or after
//! the fact by [`write_run`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use coop_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"), sim.recorder.names())?;
//! let mut obs = RunOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { return Err(e.into()); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::{EntityRow, FinalNeedsRow};
pub use writer::{write_run, OutputWriter};
