use crate::{
    builder::DocumentBuilder,
    parsing::inline::format_inline,
    tree::ListVariant,
};

use super::kinds::{ListEntry, ListMarker};

/// Parses a flat list block starting at `start`.
///
/// The variant is fixed by the first line. Following lines are consumed while
/// they match that variant's marker; the first line that doesn't is left for
/// the caller. Leading whitespace never nests items.
///
/// # Returns
/// The list node and the index of the first unconsumed line. The index is
/// always greater than `start`: the first line is consumed even if it carries
/// no list marker at all (it then becomes a single bullet item).
pub fn parse_list_block<B: DocumentBuilder>(
    builder: &mut B,
    lines: &[&str],
    start: usize,
) -> (B::List, usize) {
    let variant = lines
        .get(start)
        .and_then(|line| ListMarker::detect(line))
        .unwrap_or(ListVariant::Bullet);
    let mut list = builder.create_list(variant);

    let mut i = start;
    while let Some(&line) = lines.get(i) {
        let entry = match ListMarker::strip(variant, line) {
            Some(entry) => entry,
            None if i == start => ListEntry {
                text: line,
                checked: None,
            },
            None => break,
        };

        let mut item = builder.create_list_item();
        if let Some(checked) = entry.checked {
            builder.set_checked(&mut item, checked);
        }
        format_inline(builder, entry.text, &mut item);
        builder.append_item(&mut list, item);
        i += 1;
    }

    let next = i.max(start + 1);
    log::trace!("{variant:?} list: lines {start}..{next}");
    (list, next)
}
