/// Drops every `[...]` group and every space, leaving only source text.
pub fn strip_markup(annotated: &str) -> String {
    let mut out = String::with_capacity(annotated.len());
    let mut depth = 0usize;
    for c in annotated.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ' ' => {}
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Assert that annotating `$text` keeps every surface character, once and in
/// order.
///
/// Compares the generator output with its markup stripped against the
/// concatenated token surfaces (spaces removed on both sides).
#[macro_export]
macro_rules! assert_round_trip {
    ($generator:expr, $text:expr) => {{
        use $crate::Tokenizer as _;
        let text: &str = $text;
        let tokens = $generator.tokenizer().tokenize(text).unwrap();
        let expected: String = tokens
            .iter()
            .flat_map(|t| t.surface.chars())
            .filter(|&c| c != ' ')
            .collect();
        let annotated = $generator.generate_for_sentence(text).unwrap();
        assert_eq!(
            $crate::testing::round_trip::strip_markup(&annotated),
            expected,
            "round trip broken for `{text}` (annotated: `{annotated}`)"
        );
    }};
}

#[cfg(test)]
mod tests {
    use super::strip_markup;

    #[test]
    fn strips_groups_and_spaces() {
        assert_eq!(strip_markup(" 忘[わす]れ 物[もの]"), "忘れ物");
        assert_eq!(strip_markup("かな"), "かな");
        assert_eq!(strip_markup("字[]"), "字");
    }
}
