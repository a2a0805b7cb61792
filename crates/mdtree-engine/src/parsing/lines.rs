/// Splits a document into lines on `\n`, dropping a trailing `\r` from each.
///
/// Always yields at least one line: the empty document is one empty line,
/// and a trailing newline produces a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_one_empty_line() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn trailing_newline_yields_final_empty_line() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn crlf_is_normalized() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn lone_carriage_return_inside_line_is_kept() {
        assert_eq!(split_lines("a\rb"), vec!["a\rb"]);
    }
}
