use crate::config::Config;

/// Wraps `text` to the configured width, one word at a time.
///
/// Paragraphs are delimited by a blank line and source line breaks are always
/// honored, so heading blocks stay on their own lines. A word containing both
/// `[` and `]` is a link reference and is appended without consulting the
/// width budget; it still counts toward the running width so the following
/// words wrap correctly. Widths are measured in characters, not bytes.
pub fn apply_formatting(text: &str, config: &Config) -> String {
    let mut out = String::new();
    for paragraph in text.split("\n\n") {
        for line in paragraph.split('\n') {
            let mut line_length = 0;
            for word in line.split_whitespace() {
                let width = word.chars().count();
                if word.contains('[') && word.contains(']') {
                    out.push_str(word);
                    out.push(' ');
                    line_length += width + 1;
                } else if line_length + width <= config.line_length {
                    out.push_str(word);
                    out.push(' ');
                    line_length += width + 1;
                } else {
                    // break the line, stripping only its own trailing space
                    while out.ends_with(' ') {
                        out.pop();
                    }
                    out.push('\n');
                    out.push_str(word);
                    out.push(' ');
                    line_length = width + 1;
                }
            }
            out.push('\n');
        }
        if config.paragraph_spacing {
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(line_length: usize) -> Config {
        Config {
            line_length,
            ..Config::default()
        }
    }

    #[test]
    fn single_line_under_budget() {
        let out = apply_formatting("Hello world [http://x.com] ! ", &cfg(80));
        assert_eq!(out, "Hello world [http://x.com] !");
    }

    #[test]
    fn wraps_at_width() {
        assert_eq!(apply_formatting("aaa bbb ccc", &cfg(10)), "aaa bbb\nccc");
    }

    #[test]
    fn fit_is_inclusive() {
        assert_eq!(apply_formatting("hello world", &cfg(11)), "hello world");
        assert_eq!(apply_formatting("hello world", &cfg(10)), "hello\nworld");
    }

    #[test]
    fn link_token_never_split() {
        let out = apply_formatting("x [http://example.com/very/long] y", &cfg(5));
        assert_eq!(out, "x [http://example.com/very/long]\ny");
    }

    #[test]
    fn link_counts_toward_width() {
        // the word after an overlong link must wrap, not squeeze in
        let out = apply_formatting("a [http://example.com] b c", &cfg(10));
        let first = out.lines().next().unwrap();
        assert_eq!(first, "a [http://example.com]");
    }

    #[test]
    fn heading_stays_isolated() {
        let body = "First paragraph. \n\n\nSection One\n\n\nSecond paragraph. ";
        let out = apply_formatting(body, &cfg(80));
        assert_eq!(
            out,
            "First paragraph. \n\n\nSection One \n\n\nSecond paragraph."
        );
    }

    #[test]
    fn paragraph_spacing_toggle() {
        assert_eq!(apply_formatting("one\n\ntwo", &cfg(80)), "one \n\ntwo");
        let config = Config {
            paragraph_spacing: false,
            ..Config::default()
        };
        assert_eq!(apply_formatting("one\n\ntwo", &config), "one \ntwo");
    }

    #[test]
    fn zero_width_puts_every_word_alone() {
        assert_eq!(apply_formatting("a b c", &cfg(0)), "\na\nb\nc");
    }

    #[test]
    fn overlong_word_at_paragraph_start() {
        // the break is emitted even though the fresh line is empty, and the
        // earlier line keeps its trailing space
        let out = apply_formatting("aaa\n\nsupercalifragilistic", &cfg(10));
        assert_eq!(out, "aaa \n\n\nsupercalifragilistic");
    }

    #[test]
    fn width_counted_in_chars_not_bytes() {
        // six Cyrillic letters fit a width of six; twelve bytes would not
        assert_eq!(apply_formatting("Привет мир", &cfg(6)), "Привет\nмир");
    }

    #[test]
    fn no_line_exceeds_width() {
        let text = "the quick brown fox jumps over the lazy dog \
                    and keeps running until the very end of the field";
        let out = apply_formatting(text, &cfg(20));
        for line in out.lines() {
            let trimmed = line.trim_end();
            assert!(
                trimmed.chars().count() <= 20 || !trimmed.contains(' '),
                "line over budget: {trimmed:?}"
            );
        }
    }

    #[test]
    fn reformat_preserves_words() {
        let text = "one two three four five six seven\n\neight nine ten";
        let once = apply_formatting(text, &cfg(12));
        let again = apply_formatting(&once, &cfg(10_000));
        let words: Vec<&str> = text.split_whitespace().collect();
        let reworded: Vec<&str> = again.split_whitespace().collect();
        assert_eq!(words, reworded);
    }

    #[test]
    fn empty_input() {
        assert_eq!(apply_formatting("", &cfg(80)), "");
    }
}
