//! Tamil/English transliteration for bilingual form fields.
//!
//! Romanization of Tamil text is local and pure (`tamil_core::translit`).
//! The reverse direction asks a hosted input tool over HTTP and falls back
//! to the typed text whenever that fails.

mod async_worker;
pub mod bilingual;
mod input_tool;
mod trace_init;

pub use async_worker::{ReverseResult, ReverseWorker, SharedInputTool};
pub use input_tool::HttpInputTool;
pub use trace_init::init_tracing;

pub use tamil_core::reverse::{transliterate_latin_to_ta, InputTool, ReverseError};
pub use tamil_core::translit::{transliterate, transliterate_ta_to_latin};
pub use tamil_core::{settings, unicode};
