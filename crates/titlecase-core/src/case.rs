/// Uppercases the first character of every whitespace-delimited word.
///
/// Characters after the first in a word are copied untouched, so embedded
/// capitals survive (`mcDonald` becomes `McDonald`). Whitespace-only lines
/// come back unchanged.
pub fn title_case(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut at_word_start = true;

    for ch in line.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.push(to_titlecase(ch));
        } else {
            out.push(ch);
        }
    }

    out
}

/// One-to-one titlecase mapping. Characters whose only uppercase form is a
/// multi-character expansion (`ß`, `ﬁ`) are left as they are.
fn to_titlecase(ch: char) -> char {
    match ch {
        'Ǆ' | 'ǅ' | 'ǆ' => 'ǅ',
        'Ǉ' | 'ǈ' | 'ǉ' => 'ǈ',
        'Ǌ' | 'ǋ' | 'ǌ' => 'ǋ',
        'Ǳ' | 'ǲ' | 'ǳ' => 'ǲ',
        // Greek vowels with ypogegrammeni take the prosgegrammeni form.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(ch as u32 + 8).unwrap_or(ch)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => ch,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_each_word() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("foo bar"), "Foo Bar");
    }

    #[test]
    fn leaves_rest_of_word_alone() {
        assert_eq!(title_case("mcDonald's iPHONE"), "McDonald's IPHONE");
        assert_eq!(title_case("hELLO"), "HELLO");
    }

    #[test]
    fn preserves_whitespace_runs() {
        assert_eq!(title_case("  two\tspaces  here "), "  Two\tSpaces  Here ");
        assert_eq!(title_case("   "), "   ");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn punctuation_does_not_split_words() {
        assert_eq!(title_case("hello-world foo.bar"), "Hello-world Foo.bar");
        assert_eq!(title_case("(aside) 'quoted'"), "(aside) 'quoted'");
    }

    #[test]
    fn handles_non_ascii_initials() {
        assert_eq!(title_case("élan über"), "Élan Über");
        assert_eq!(title_case("straße ßtart"), "Straße ßtart");
        assert_eq!(title_case("ﬁre ŉ"), "ﬁre ŉ");
        assert_eq!(title_case("a\u{00A0}b"), "A\u{00A0}B");
    }

    #[test]
    fn digraphs_take_their_titlecase_form() {
        assert_eq!(title_case("ǆungla ǈ ǋ"), "ǅungla ǈ ǋ");
        assert_eq!(title_case("Ǆ Ǉ Ǌ ǳ Ǳ"), "ǅ ǈ ǋ ǲ ǲ");
    }

    #[test]
    fn greek_iota_subscript_uses_prosgegrammeni() {
        assert_eq!(title_case("ᾳ ᾀ ῃ ῳ"), "ᾼ ᾈ ῌ ῼ");
        assert_eq!(title_case("ᾈ"), "ᾈ");
    }

    #[test]
    fn converting_twice_changes_nothing() {
        for line in ["hello world", "Already Title", "x y z", "mixed CASE words", ""] {
            let once = title_case(line);
            assert_eq!(title_case(&once), once, "line: {line:?}");
        }
    }
}
