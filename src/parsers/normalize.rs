use std::fmt::Write;

/// Normalize a user or thread name to a stable ASCII encoding.
///
/// Every character outside the ASCII range is replaced with its decimal
/// character reference (`&#NNNN;`), so map keys stay comparable no matter
/// what script a display name uses. Distinct originals that happen to
/// normalize to the same key collapse into one entry; the archive format is
/// not expected to produce such collisions and they are not handled
/// specially.
pub fn normalize_name(raw: &str) -> String {
    if raw.is_ascii() {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else {
            // infallible for String
            let _ = write!(out, "&#{};", ch as u32);
        }
    }
    out
}
