use serde::Serialize;

/// One color/font-size pair in the fixed style palette.
///
/// Entries are referenced by position, so the order of [`STYLE_TABLE`]
/// is part of the output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleEntry {
    pub color: &'static str,
    pub size: &'static str,
}

/// The six-entry palette, indices 0-5.
pub const STYLE_TABLE: &[StyleEntry] = &[
    StyleEntry { color: "#B5B7C9", size: "14px" },
    StyleEntry { color: "#8B91AD", size: "20px" },
    StyleEntry { color: "#4E516B", size: "24px" },
    StyleEntry { color: "#2E3347", size: "27px" },
    StyleEntry { color: "#925D78", size: "30px" },
    StyleEntry { color: "#F1C5B5", size: "34px" },
];
