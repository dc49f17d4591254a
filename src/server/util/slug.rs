/// Turns a title into a URL slug.
///
/// ASCII letters, digits and underscores are kept and lower-cased, whitespace and
/// hyphen runs collapse into a single `-`, any other character is dropped. Leading
/// and trailing separators are trimmed.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else if ch.is_whitespace() || ch == '-' {
            pending_dash = true;
        }
    }

    slug.trim_matches('_').to_string()
}

/// Whether `slug` only uses the characters [`slugify`] produces.
///
/// Slugs are spliced into dotted permission strings, so `.` and `*` must never
/// reach them.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_dashes_whitespace() {
        assert_eq!(slugify("Operation Thunder"), "operation-thunder");
    }

    #[test]
    fn drops_punctuation_and_collapses_separators() {
        assert_eq!(slugify("  Op. Thunder -- Part 2! "), "op-thunder-part-2");
        assert_eq!(slugify("Bob's Mission"), "bobs-mission");
    }

    #[test]
    fn skips_non_ascii() {
        assert_eq!(slugify("Über Mission"), "ber-mission");
    }

    #[test]
    fn empty_when_nothing_survives() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn accepts_slugify_alphabet() {
        assert!(is_valid_slug("task-force_ghost-2"));
        assert!(is_valid_slug(&slugify("Operation Thunder")));
    }

    #[test]
    fn rejects_permission_metacharacters() {
        for slug in ["", "*", "a.b", "%", "Ghost", "op thunder"] {
            assert!(!is_valid_slug(slug), "{:?} should be rejected", slug);
        }
    }
}
