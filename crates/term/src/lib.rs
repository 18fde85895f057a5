//! Terminal display sink.
//!
//! The core renderer emits plain text frames with no control codes; this
//! crate owns every escape sequence. It repaints full frames from the home
//! position through a single buffered write, which is flicker-free enough
//! for a full-screen animation without diffing.

pub mod screen;

pub use screen::{encode_frame_into, TerminalScreen};
