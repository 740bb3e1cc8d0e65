//! Navigation title derivation.

/// Fixed titles for well-known stems, checked before the general rule.
const TITLE_OVERRIDES: &[(&str, &str)] = &[("index", "Home")];

/// Derive a navigation title from a file stem or directory name.
///
/// Overrides win; otherwise `_` and `-` become spaces and the result is
/// title-cased.
///
/// # Examples
///
/// ```
/// use mkconf_nav::title_from_name;
///
/// assert_eq!(title_from_name("index"), "Home");
/// assert_eq!(title_from_name("getting_started"), "Getting Started");
/// assert_eq!(title_from_name("api-reference"), "Api Reference");
/// ```
#[must_use]
pub fn title_from_name(name: &str) -> String {
    if let Some((_, title)) = TITLE_OVERRIDES.iter().find(|(stem, _)| *stem == name) {
        return (*title).to_owned();
    }
    titlecase(&name.replace(['_', '-'], " "))
}

/// Title-case a string.
///
/// A cased character is title-cased when it starts the string or follows an
/// uncased character (space, digit, punctuation), and lower-cased otherwise.
fn titlecase(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        let cased = is_cased(c);
        if !cased {
            result.push(c);
        } else if previous_cased {
            result.extend(c.to_lowercase());
        } else {
            push_titlecase(c, &mut result);
        }
        previous_cased = cased;
    }
    result
}

/// Whether `c` has case (Lu, Ll or Lt).
fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase() || is_titlecase_letter(c)
}

/// Titlecase letters (Lt), which are neither upper- nor lowercase.
fn is_titlecase_letter(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Append the titlecase mapping of `c`.
///
/// Letters with an Lt form (Latin digraphs, Greek with ypogegrammeni) map to
/// it. Elsewhere the first character of the uppercase mapping is kept and the
/// rest is lower-cased, so `ß` becomes `Ss` and `ﬁ` becomes `Fi`. Greek
/// letters whose titlecase spans several characters (such as `ᾲ`) fall into
/// this second branch and keep their uppercase-derived form.
fn push_titlecase(c: char, buf: &mut String) {
    let single = match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        // Greek with ypogegrammeni: lowercase sits 8 below its Lt form
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(u32::from(c) + 8)
        }
        '\u{1FB3}' => Some('\u{1FBC}'),
        '\u{1FC3}' => Some('\u{1FCC}'),
        '\u{1FF3}' => Some('\u{1FFC}'),
        _ => None,
    };
    if let Some(title) = single {
        buf.push(title);
        return;
    }
    if is_titlecase_letter(c) {
        buf.push(c);
        return;
    }
    let mut upper = c.to_uppercase();
    if let Some(first) = upper.next() {
        buf.push(first);
        buf.extend(upper.flat_map(char::to_lowercase));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_override() {
        assert_eq!(title_from_name("index"), "Home");
    }

    #[test]
    fn test_override_is_exact_match() {
        assert_eq!(title_from_name("Index"), "Index");
        assert_eq!(title_from_name("index_page"), "Index Page");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(title_from_name("getting_started"), "Getting Started");
        assert_eq!(title_from_name("api-reference"), "Api Reference");
        assert_eq!(title_from_name("mixed_sep-name"), "Mixed Sep Name");
    }

    #[test]
    fn test_consecutive_separators_preserved() {
        assert_eq!(title_from_name("a__b"), "A  B");
    }

    #[test]
    fn test_titlecase_lowercases_rest_of_word() {
        assert_eq!(title_from_name("FAQ"), "Faq");
        assert_eq!(title_from_name("README_first"), "Readme First");
    }

    #[test]
    fn test_titlecase_after_digits_and_punctuation() {
        assert_eq!(title_from_name("v2_setup"), "V2 Setup");
        assert_eq!(title_from_name("2fa"), "2Fa");
        assert_eq!(title_from_name("release.notes"), "Release.Notes");
    }

    #[test]
    fn test_titlecase_unicode() {
        assert_eq!(title_from_name("über_uns"), "Über Uns");
        assert_eq!(title_from_name("文档"), "文档");
    }

    #[test]
    fn test_titlecase_multi_char_uppercase() {
        assert_eq!(title_from_name("ßa"), "Ssa");
        assert_eq!(title_from_name("ﬁle_list"), "File List");
    }

    #[test]
    fn test_titlecase_digraphs() {
        assert_eq!(title_from_name("\u{01C6}ungla"), "\u{01C5}ungla");
        assert_eq!(title_from_name("\u{01C4}UNGLA"), "\u{01C5}ungla");
        // Lt is cased, so the following letter is lower-cased
        assert_eq!(title_from_name("\u{01C5}A"), "\u{01C5}a");
        assert_eq!(title_from_name("\u{1F80}"), "\u{1F88}");
    }

    #[test]
    fn test_duplicate_titles_are_not_resolved() {
        assert_eq!(
            title_from_name("getting-started"),
            title_from_name("getting_started")
        );
    }
}
