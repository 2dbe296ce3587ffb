pub mod common;
pub mod rules;

pub use common::{CommentMatch, StripError, remove_matches};
pub use rules::{CommentRule, ExtensionClass};

pub fn find_comments(input: &str, rule: CommentRule) -> Vec<CommentMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;
    while pos < input.len() {
        match comment_end_at(input, pos, rule) {
            Some(to) => {
                matches.push(CommentMatch { from: pos, to });
                pos = to;
            }
            None => {
                pos += input[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }
    matches
}

pub fn strip_comments(input: String, rule: CommentRule) -> Result<String, StripError> {
    let matches = find_comments(&input, rule);
    remove_matches(input, matches)
}

// Alternation order matters: at each position the block pattern is tried
// before the line pattern.
fn comment_end_at(input: &str, pos: usize, rule: CommentRule) -> Option<usize> {
    match rule {
        CommentRule::Line { marker } => line_comment_end(input, pos, marker),
        CommentRule::Block { open, close } => block_comment_end(input, pos, open, close),
        CommentRule::BlockThenLine { open, close, line } => {
            block_comment_end(input, pos, open, close)
                .or_else(|| line_comment_end(input, pos, line))
        }
    }
}

// Runs from the marker to the end of the current line, leaving the line
// terminator (\n, \r\n or a lone \r) in place.
fn line_comment_end(input: &str, pos: usize, marker: &str) -> Option<usize> {
    let rest = &input[pos..];
    if !rest.starts_with(marker) {
        return None;
    }
    let body = &rest[marker.len()..];
    let body_len = body.find(['\n', '\r']).unwrap_or(body.len());
    Some(pos + marker.len() + body_len)
}

// Shortest span from the opening delimiter to the nearest closing delimiter,
// newlines included. An opener with no closer is not a match.
fn block_comment_end(input: &str, pos: usize, open: &str, close: &str) -> Option<usize> {
    let rest = &input[pos..];
    if !rest.starts_with(open) {
        return None;
    }
    let body = &rest[open.len()..];
    body.find(close)
        .map(|i| pos + open.len() + i + close.len())
}

#[cfg(test)]
mod tests {
    use super::rules::rule_for_extension;
    use super::*;

    fn strip(text: &str, ext: &str) -> String {
        let rule = rule_for_extension(ext).unwrap();
        strip_comments(text.to_string(), rule).unwrap()
    }

    #[test]
    fn line_comment_is_removed_up_to_the_newline() {
        assert_eq!(strip("a = 1; // set a\nb = 2;", ".js"), "a = 1; \nb = 2;");
    }

    #[test]
    fn block_comment_spanning_lines_is_removed() {
        assert_eq!(
            strip("/* header\nmulti\nline */\nvalue = 5;", ".c"),
            "\nvalue = 5;"
        );
    }

    #[test]
    fn sql_comment_is_removed_up_to_the_newline() {
        assert_eq!(strip("SELECT * FROM t; -- comment", ".sql"), "SELECT * FROM t; ");
        assert_eq!(
            strip("SELECT a, -- keep a\n       b\nFROM t;", ".sql"),
            "SELECT a, \n       b\nFROM t;"
        );
    }

    #[test]
    fn hash_comment_is_removed_up_to_the_newline() {
        assert_eq!(strip("x = 1  # note\ny = 2", ".py"), "x = 1  \ny = 2");
        assert_eq!(strip("echo hi # done", ".sh"), "echo hi ");
    }

    #[test]
    fn shebang_line_is_treated_as_a_comment() {
        assert_eq!(strip("#!/bin/sh\necho hi", ".sh"), "\necho hi");
    }

    #[test]
    fn markup_comment_is_removed_across_lines() {
        assert_eq!(
            strip("<p>a</p><!-- note\nmore --><p>b</p>", ".html"),
            "<p>a</p><p>b</p>"
        );
    }

    #[test]
    fn text_without_delimiters_is_unchanged() {
        for ext in [".js", ".py", ".html", ".sql", ".json", ".css"] {
            let sample = "plain text\nwith two lines and no markers";
            assert_eq!(strip(sample, ext), sample, "{ext}");
        }
    }

    #[test]
    fn unclosed_block_is_left_alone() {
        assert_eq!(strip("int x; /* never closed", ".c"), "int x; /* never closed");
        assert_eq!(strip("<p><!-- open forever", ".html"), "<p><!-- open forever");
    }

    #[test]
    fn line_comment_inside_unclosed_block_is_still_matched() {
        assert_eq!(strip("/* open // gone\nrest", ".js"), "/* open \nrest");
    }

    #[test]
    fn block_alternative_wins_over_line_alternative() {
        assert_eq!(strip("a /*// not a line*/ b", ".js"), "a  b");
    }

    #[test]
    fn slash_slash_star_is_a_line_comment() {
        assert_eq!(strip("//* x */\ny", ".js"), "\ny");
    }

    #[test]
    fn shortest_block_span_is_taken() {
        assert_eq!(strip("/* a */ keep /* b */", ".c"), " keep ");
    }

    #[test]
    fn line_marker_inside_string_is_stripped() {
        assert_eq!(
            strip(r#"const u = "http://example.com";"#, ".js"),
            r#"const u = "http:"#
        );
        assert_eq!(strip(r##"tag = "#1""##, ".py"), r#"tag = ""#);
    }

    #[test]
    fn json_gets_the_slash_rules() {
        assert_eq!(strip("{\"a\": 1} // trailing", ".json"), "{\"a\": 1} ");
        assert_eq!(strip("{\"u\": \"a//b\"}", ".json"), "{\"u\": \"a");
    }

    #[test]
    fn crlf_line_ending_is_preserved() {
        assert_eq!(strip("a; // c\r\nb;", ".js"), "a; \r\nb;");
        assert_eq!(strip("x # c\ry", ".py"), "x \ry");
    }

    #[test]
    fn line_rules_are_idempotent() {
        for (text, ext) in [
            ("a = 1; // set a\nb = 2; // set b", ".js"),
            ("#!/bin/sh\necho # hi\n# bye", ".sh"),
            ("SELECT 1; -- one\nSELECT 2; -- two", ".sql"),
        ] {
            let once = strip(text, ext);
            assert_eq!(strip(&once, ext), once, "{ext}");
        }
    }

    #[test]
    fn block_removal_does_not_rescan_exposed_delimiters() {
        // Removing the inner comment exposes a fresh "<!--" which a second
        // pass cannot close, so repeated stripping is stable here.
        let once = strip("<!-<!--x-->->", ".html");
        assert_eq!(once, "<!-->");
        assert_eq!(strip(&once, ".html"), once);

        let once = strip("/*/*a*/*/", ".c");
        assert_eq!(once, "*/");
        assert_eq!(strip(&once, ".c"), once);
    }

    #[test]
    fn matches_are_sorted_and_disjoint() {
        let rule = rule_for_extension(".js").unwrap();
        let found = find_comments("/* a */ x // b\n/* c */ y // d", rule);
        assert_eq!(found.len(), 4);
        for w in found.windows(2) {
            assert!(w[0].to <= w[1].from);
        }
    }

    #[test]
    fn empty_input_yields_no_matches() {
        let rule = rule_for_extension(".js").unwrap();
        assert!(find_comments("", rule).is_empty());
        assert_eq!(strip("", ".js"), "");
    }

    #[test]
    fn multibyte_text_around_comments_is_preserved() {
        assert_eq!(strip("héllo = 1; // cømment\nwörld = 2;", ".js"), "héllo = 1; \nwörld = 2;");
    }
}
