//! Protocol modules (envelope + event catalog).
//!
//! - `envelope`: the generic `{type, data}` JSON wrapper, with `data`
//!   kept as `RawValue` for lazy payload parsing.
//! - `events`: the closed set of event identifiers and their payload
//!   schemas, plus the story-point vote vocabulary.
//!
//! All parsers are panic-free: malformed input is reported as
//! `EstimoError` instead of panicking, keeping the client resilient
//! to anything the server sends.

pub mod envelope;
pub mod events;
