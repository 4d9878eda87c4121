mod generate;
mod palette;

pub use generate::{CJK_FIRST, CJK_LAST, CharacterEntry, OutputError, StyleSheet, generate};
pub use palette::{STYLE_TABLE, StyleEntry};
