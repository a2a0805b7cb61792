use std::ops::Range;

use super::{
    cursor::Cursor,
    kinds::{Emphasis, Link},
    types::InlineNode,
};

/// Parses inline content into a sequence of [`InlineNode`]s.
///
/// # Passes
/// 1. Links: non-overlapping `[text](url)` occurrences split the input into
///    plain segments and links. Link text is kept verbatim.
/// 2. Emphasis: each plain segment is tested against
///    [`Emphasis::PRECEDENCE`]. The first pattern present anywhere in the
///    segment is the only one applied; its runs become `Styled` nodes and the
///    text between them stays `Text`. Markers of other patterns stay literal.
///
/// # Returns
/// Nodes in source order. Empty text is never emitted, so empty input yields
/// no nodes.
pub fn parse_inline(s: &str) -> Vec<InlineNode<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        if cur.peek() == Some(Link::OPEN) {
            let start = cur.pos();
            match try_parse_link(&mut cur) {
                Some(link) => {
                    push_emphasis(&mut out, cur.slice(text_start, start));
                    out.push(link);
                    text_start = cur.pos();
                    continue;
                }
                // A later `[` would need a `](` and `)` even further right.
                None => break,
            }
        }
        cur.bump_char();
    }

    push_emphasis(&mut out, &s[text_start..]);
    out
}

/// Attempts to parse a link starting at the current `[`.
///
/// Text and url are each at least one char; the shortest match wins.
/// On failure, cursor position is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    let saved = cur.clone();
    let link = scan_link(cur);
    if link.is_none() {
        *cur = saved;
    }
    link
}

fn scan_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineNode<'a>> {
    cur.bump_n(1); // [
    let text_start = cur.pos();
    cur.bump_char()?;
    let text_end = cur.seek(Link::MIDDLE)?;
    cur.bump_n(Link::MIDDLE.len());

    let url_start = cur.pos();
    cur.bump_char()?;
    let url_end = cur.seek(Link::CLOSE)?;
    cur.bump_n(Link::CLOSE.len());

    Some(InlineNode::Link {
        text: cur.slice(text_start, text_end),
        url: cur.slice(url_start, url_end),
    })
}

/// One delimited occurrence of an emphasis pattern.
struct Run {
    open: usize,
    inner: Range<usize>,
    end: usize,
}

fn push_emphasis<'a>(out: &mut Vec<InlineNode<'a>>, segment: &'a str) {
    if segment.is_empty() {
        return;
    }

    for emphasis in Emphasis::PRECEDENCE {
        let runs = find_runs(segment, emphasis.delimiter);
        if runs.is_empty() {
            continue;
        }

        let mut last = 0;
        for run in runs {
            push_text(out, &segment[last..run.open]);
            out.push(InlineNode::Styled {
                text: &segment[run.inner],
                styles: emphasis.styles,
            });
            last = run.end;
        }
        push_text(out, &segment[last..]);
        return;
    }

    out.push(InlineNode::Text(segment));
}

fn push_text<'a>(out: &mut Vec<InlineNode<'a>>, text: &'a str) {
    if !text.is_empty() {
        out.push(InlineNode::Text(text));
    }
}

/// Finds all non-overlapping runs of `delimiter`…`delimiter`, left to right.
///
/// Each body is the shortest non-empty one; the body may itself start with
/// delimiter characters.
fn find_runs(s: &str, delimiter: &str) -> Vec<Run> {
    let mut cur = Cursor::new(s);
    let mut runs = vec![];

    while let Some(open) = cur.seek(delimiter) {
        cur.bump_n(delimiter.len());
        let inner_start = cur.pos();
        if cur.bump_char().is_none() {
            break;
        }
        let Some(close) = cur.seek(delimiter) else {
            break;
        };
        cur.bump_n(delimiter.len());
        runs.push(Run {
            open,
            inner: inner_start..close,
            end: cur.pos(),
        });
    }

    runs
}
