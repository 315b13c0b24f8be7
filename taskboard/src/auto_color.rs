//! Deterministic default colors for labels created without one.
//!
//! The same label name always maps to the same palette entry, so a label
//! recreated after an import keeps its look.

/// Palette of label colors as CSS hex strings.
const PALETTE: &[&str] = &[
    "#dc2626", // red
    "#ea580c", // orange
    "#d97706", // amber
    "#65a30d", // lime
    "#16a34a", // green
    "#0d9488", // teal
    "#0891b2", // cyan
    "#2563eb", // blue
    "#4f46e5", // indigo
    "#7c3aed", // violet
    "#c026d3", // fuchsia
    "#db2777", // pink
];

/// Return a deterministic color for a label name.
///
/// Names are compared case-insensitively, so "Bug" and "bug" share a color.
pub fn auto_color(name: &str) -> &'static str {
    let hash = fnv1a(&name.to_lowercase());
    PALETTE[hash as usize % PALETTE.len()]
}

/// FNV-1a hash (32-bit) for short strings.
fn fnv1a(s: &str) -> u32 {
    s.bytes().fold(0x811c_9dc5, |hash: u32, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(0x0100_0193)
    })
}
