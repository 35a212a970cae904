//! Upload filename handling: extension allow-list, sanitization, and
//! derivation of the processed output name.
//!
//! Sanitized names are used directly as on-disk basenames in both blob
//! stores, so everything here must produce a single safe path component.

/// File extensions accepted for upload (matched case-insensitively).
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Prefix applied to a sanitized upload name to derive its output name.
const OUTPUT_PREFIX: &str = "enhanced_";

/// Returns true iff the name has an extension on the allow-list.
///
/// A name without a `.`, or with an empty extension (`photo.`), is rejected.
pub fn is_allowed(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Reduce a client-supplied filename to a safe on-disk basename.
///
/// Strips directory components (both separator styles), replaces anything
/// outside `[A-Za-z0-9._-]` with `_`, and trims leading/trailing `.`, `_`
/// and `-` so the result can never be `..`, hidden, or empty-but-dotted.
/// Returns an empty string for degenerate input; callers reject that as an
/// invalid filename.
pub fn sanitize(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    cleaned
        .trim_matches(|c: char| matches!(c, '.' | '_' | '-'))
        .to_string()
}

/// Derive the processed-file name for a sanitized upload name.
pub fn output_name(name: &str) -> String {
    format!("{OUTPUT_PREFIX}{name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_extensions_any_case() {
        for name in &[
            "photo.png",
            "photo.jpg",
            "photo.jpeg",
            "photo.PNG",
            "photo.JPG",
            "photo.Jpeg",
            "archive.tar.png",
        ] {
            assert!(is_allowed(name), "expected {name} to be allowed");
        }
    }

    #[test]
    fn disallowed_extensions_rejected() {
        for name in &[
            "anim.gif",
            "doc.pdf",
            "photo",
            "photo.",
            "",
            "png",
            "photo.png.exe",
        ] {
            assert!(!is_allowed(name), "expected {name} to be rejected");
        }
    }

    #[test]
    fn sanitize_strips_directory_components() {
        assert_eq!(sanitize("../../etc/passwd"), "passwd");
        assert_eq!(sanitize("/etc/shadow"), "shadow");
        assert_eq!(sanitize("C:\\Users\\me\\photo.png"), "photo.png");
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize("my photo.png"), "my_photo.png");
        assert_eq!(sanitize("naïve.jpg"), "na_ve.jpg");
        assert_eq!(sanitize("a;b|c.png"), "a_b_c.png");
    }

    #[test]
    fn sanitize_preserves_case() {
        assert_eq!(sanitize("Photo.JPG"), "Photo.JPG");
    }

    #[test]
    fn sanitize_trims_leading_and_trailing_punctuation() {
        assert_eq!(sanitize(".hidden.png"), "hidden.png");
        assert_eq!(sanitize(".."), "");
        assert_eq!(sanitize("..."), "");
        assert_eq!(sanitize("---"), "");
    }

    #[test]
    fn sanitize_degenerate_input_is_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("///"), "");
    }

    #[test]
    fn output_name_prefixes() {
        assert_eq!(output_name("photo.JPG"), "enhanced_photo.JPG");
        assert_eq!(output_name("a.png"), "enhanced_a.png");
    }
}
