//! Stored filename generation.

use chrono::Utc;
use rand::Rng;

/// Longest extension (without the dot) carried over from the original name.
const MAX_EXTENSION_LEN: usize = 16;

/// Generate a stored filename for an upload.
///
/// The result has the shape `{unix_millis}-{random}{ext}` where `random` is
/// drawn from `0..1_000_000_000` and `ext` is the original extension with
/// its leading dot, lower-cased. Extensions that are empty, too long, or
/// contain anything other than ASCII alphanumerics are dropped.
pub fn generate_stored_name(original_name: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{millis}-{suffix}{}", extension_of(original_name))
}

/// Extract a safe, lower-cased extension including the leading dot.
fn extension_of(original_name: &str) -> String {
    let base = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original_name);

    match base.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            format!(".{}", ext.to_ascii_lowercase())
        }
        _ => String::new(),
    }
}
