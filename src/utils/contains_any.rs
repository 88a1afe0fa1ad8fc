/// Whether `lowercased_text` contains any of the `keywords` as a substring.
///
/// Note: This is a plain substring check, so `call` matches `calls` and
/// `recall` alike. Keywords are expected to be lowercase.
pub fn contains_any(lowercased_text: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|keyword| lowercased_text.contains(keyword))
}
