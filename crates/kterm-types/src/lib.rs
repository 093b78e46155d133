//! Foundation types for kterm.
//!
//! This crate contains the platform-agnostic types shared by the
//! interpreter core and its frontends: the error enum, the console color
//! palette, and the capability traits (output sink, session control) the
//! interpreter consumes without knowing how they are physically realized.

pub mod color;
pub mod error;
pub mod session;
pub mod sink;

pub use color::{Color, Palette};
pub use error::{Result, TermError};
pub use session::{SessionControl, SessionFlag};
pub use sink::OutputSink;
