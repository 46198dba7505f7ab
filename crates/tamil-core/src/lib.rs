pub mod reverse;
pub mod settings;
pub mod translit;
pub mod unicode;

pub use reverse::{transliterate_latin_to_ta, InputTool, ReverseError};
pub use translit::{transliterate, transliterate_ta_to_latin};
