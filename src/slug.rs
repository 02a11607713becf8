/// slugify
///
/// Derives the URL-safe identifier stored alongside scholarship names and type
/// titles: lowercase, only `[a-z0-9]` kept, every other run of characters
/// collapsed into a single hyphen, no leading or trailing hyphen.
///
/// Slugs are never accepted from clients. The write path calls this whenever
/// the source field (scholarship name, type title) is created or changed, which
/// keeps slug and source in sync without any implicit store-level hook.
pub fn slugify(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut pending_separator = false;

    for c in source.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Merit Scholarship"), "merit-scholarship");
        assert_eq!(slugify("Tata Trust"), "tata-trust");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("STEM -- Research (2026)"), "stem-research-2026");
        assert_eq!(slugify("Need/Merit & More"), "need-merit-more");
    }

    #[test]
    fn trims_boundary_separators() {
        assert_eq!(slugify("  Leading and trailing!  "), "leading-and-trailing");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(slugify(""), "");
    }
}
