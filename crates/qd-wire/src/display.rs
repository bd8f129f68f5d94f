//! Pure text projections of simulation results.
//!
//! Kept free of UI types so the formatting rules can be tested without an
//! egui context.

/// How many leading key bits are shown in the results panel.
pub const KEY_PREVIEW_BITS: usize = 20;

/// Shown in place of a key preview when sifting left nothing usable.
pub const KEY_PLACEHOLDER: &str = "Key not established";

/// QBER is displayed with fixed four-decimal precision.
pub fn format_qber(qber: f64) -> String {
    format!("{qber:.4}")
}

/// First [`KEY_PREVIEW_BITS`] bits of a key as a digit string, or the
/// placeholder for an empty key. Must not panic on any input.
pub fn key_preview(bits: &[u8]) -> String {
    if bits.is_empty() {
        return KEY_PLACEHOLDER.to_string();
    }
    bits.iter()
        .take(KEY_PREVIEW_BITS)
        .map(|bit| char::from(b'0' + (bit & 1)))
        .collect()
}

/// Localized yes/no label for the eavesdropper verdict.
pub fn detection_label(detected_eve: bool) -> &'static str {
    if detected_eve { "Yes" } else { "No" }
}
