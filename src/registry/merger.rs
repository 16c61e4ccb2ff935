//! Declaration merging
//!
//! Turns an anchor offset plus a rendered declaration into a concrete splice,
//! or a no-op when the declaration is already present. The idempotency check
//! searches the whole document for the exact rendered literal, so applying the
//! same descriptor twice always yields the text of the first application.

use super::scanner::ListAnchor;

/// One pending text splice against the *original* document offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub offset: usize,
    pub text: String,
}

/// Plan an insertion on a fresh line after the anchor line.
///
/// `anchor` must point at the end of the anchor line's content (before its
/// newline); the insertion carries the leading `\n` itself. Returns `None`
/// when `rendered` already occurs verbatim anywhere in the document.
pub fn insert_after_line(doc: &str, anchor: usize, rendered: &str) -> Option<Insertion> {
    if doc.contains(rendered) {
        return None;
    }
    Some(Insertion {
        offset: anchor,
        text: format!("\n{rendered}"),
    })
}

/// Plan the insertion of an entry block immediately before the list-closing
/// bracket. Same idempotency rule as [`insert_after_line`].
///
/// When the closing bracket sits on its own line below the opener (the shape
/// the generator emits), the block lands on the line above it. When opener
/// and closer share a line (a hand-emptied `routes = [];`), the line is split:
/// the block goes directly before the `]` and the bracket moves to a fresh
/// line with the original line's indentation.
pub fn insert_entry(doc: &str, list: ListAnchor, rendered: &str) -> Option<Insertion> {
    if doc.contains(rendered) {
        return None;
    }

    let line_start = doc[..list.close].rfind('\n').map_or(0, |p| p + 1);
    if line_start > list.open {
        return Some(Insertion {
            offset: line_start,
            text: format!("{rendered}\n"),
        });
    }

    let indent: String = doc[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect();
    Some(Insertion {
        offset: list.close,
        text: format!("\n{rendered}\n{indent}"),
    })
}

/// Apply pending insertions in a single rebuild pass.
///
/// All offsets refer to `doc` as scanned; applying in increasing offset order
/// is what keeps them valid once earlier splices have stretched the text.
pub fn apply(doc: &str, mut insertions: Vec<Insertion>) -> String {
    insertions.sort_by_key(|ins| ins.offset);

    let grown: usize = insertions.iter().map(|ins| ins.text.len()).sum();
    let mut out = String::with_capacity(doc.len() + grown);
    let mut cursor = 0;
    for ins in &insertions {
        out.push_str(&doc[cursor..ins.offset]);
        out.push_str(&ins.text);
        cursor = ins.offset;
    }
    out.push_str(&doc[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::scanner;

    fn list_anchor(doc: &str) -> ListAnchor {
        scanner::scan(doc).list.unwrap()
    }

    #[test]
    fn insert_after_line_adds_leading_newline() {
        let doc = "import 'a.dart';\nrest";
        let ins = insert_after_line(doc, 16, "import 'b.dart';").unwrap();
        assert_eq!(ins.offset, 16);
        assert_eq!(ins.text, "\nimport 'b.dart';");
        assert_eq!(apply(doc, vec![ins]), "import 'a.dart';\nimport 'b.dart';\nrest");
    }

    #[test]
    fn existing_literal_is_a_noop() {
        let doc = "import 'a.dart';\nimport 'b.dart';\n";
        assert_eq!(insert_after_line(doc, 16, "import 'b.dart';"), None);
    }

    #[test]
    fn entry_lands_above_the_closing_bracket_line() {
        let doc = "  routes = [\n  ];\n";
        let ins = insert_entry(doc, list_anchor(doc), "    entry,").unwrap();
        assert_eq!(apply(doc, vec![ins]), "  routes = [\n    entry,\n  ];\n");
    }

    #[test]
    fn entry_splits_a_single_line_empty_list() {
        let doc = "  static final List<AppRoute> routes = [];\n";
        let ins = insert_entry(doc, list_anchor(doc), "    entry,").unwrap();
        assert_eq!(
            apply(doc, vec![ins]),
            "  static final List<AppRoute> routes = [\n    entry,\n  ];\n"
        );
    }

    #[test]
    fn existing_entry_is_a_noop() {
        let doc = "  routes = [\n    entry,\n  ];\n";
        assert_eq!(insert_entry(doc, list_anchor(doc), "    entry,"), None);
    }

    #[test]
    fn apply_handles_out_of_order_offsets() {
        let doc = "abcdef";
        let spliced = apply(
            doc,
            vec![
                Insertion { offset: 4, text: "-2-".into() },
                Insertion { offset: 2, text: "-1-".into() },
            ],
        );
        assert_eq!(spliced, "ab-1-cd-2-ef");
    }

    #[test]
    fn apply_with_no_insertions_is_identity() {
        assert_eq!(apply("unchanged", Vec::new()), "unchanged");
    }
}
