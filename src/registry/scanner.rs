//! Anchor scanning
//!
//! Locates the byte offsets where new declarations may be spliced into a
//! registry document. The scanner is read-only and deliberately not a Dart
//! parser: it recognizes only the fixed anchor grammar the generator itself
//! emits (import lines, the `Router` container, the name-constant pattern and
//! the `routes` list) and treats everything else as opaque text.
//!
//! Offsets returned for line anchors point at the end of the line *content*,
//! before its newline, so insertions carrying a leading `\n` stay correct even
//! when the anchor line is the last line of the file.

/// Opening signature of the constant container.
pub const CONTAINER_SIGNATURE: &str = "abstract class Router {";

/// Opening token of the route-entry list.
pub const LIST_OPEN: &str = "routes = [";

/// Offsets bounding the route-entry list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListAnchor {
    /// Offset just past the opening `[`.
    pub open: usize,
    /// Offset of the matching `]`.
    pub close: usize,
}

/// Everything the scanner can find in one pass over a document.
///
/// Each field is `None` when the corresponding anchor is absent; the caller
/// decides what that means for the patch as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchors {
    /// End of the last import line.
    pub import_end: Option<usize>,
    /// Offset of the container signature.
    pub container: Option<usize>,
    /// End of the last name-constant line inside the container.
    pub constant_end: Option<usize>,
    /// Bounds of the route-entry list.
    pub list: Option<ListAnchor>,
}

/// Scan a registry document for all insertion anchors.
pub fn scan(doc: &str) -> Anchors {
    let container = find_container(doc);
    Anchors {
        import_end: last_line_end(doc, 0, doc.len(), is_import_line),
        container: container.map(|(at, _)| at),
        // An empty container yields no pair anchor on purpose: inserting into
        // a container with no existing constants is more likely to corrupt a
        // hand-stripped file than to help it. The scan is bounded by the
        // container's closing brace so pairs in later classes cannot match.
        constant_end: container.and_then(|(at, end)| last_line_end(doc, at, end, is_name_constant)),
        list: find_list(doc),
    }
}

/// End offset (before the newline) of the last line within `from..to`
/// matching `pred`.
fn last_line_end(doc: &str, from: usize, to: usize, pred: fn(&str) -> bool) -> Option<usize> {
    let mut found = None;
    let mut start = from;
    for line in doc[from..to].split_inclusive('\n') {
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        if pred(content.trim()) {
            found = Some(start + content.len());
        }
        start += line.len();
    }
    found
}

fn is_import_line(line: &str) -> bool {
    line.starts_with("import '") && line.ends_with("';")
}

/// Matches the second constant of a pair: `static const String <id>Name = '<value>';`
fn is_name_constant(line: &str) -> bool {
    let Some(rest) = line.strip_prefix("static const String ") else {
        return false;
    };
    let Some((ident, value)) = rest.split_once(" = ") else {
        return false;
    };
    ident.ends_with("Name")
        && ident.len() > "Name".len()
        && value.starts_with('\'')
        && value.ends_with("';")
}

/// Locate the container signature and the offset of its matching `}`.
///
/// An unterminated container is treated tolerantly: the body extends to the
/// end of the document.
fn find_container(doc: &str) -> Option<(usize, usize)> {
    let start = doc.find(CONTAINER_SIGNATURE)?;
    // CONTAINER_SIGNATURE ends with the opening brace.
    let body = start + CONTAINER_SIGNATURE.len();
    let mut depth = 1usize;
    for (i, b) in doc[body..].bytes().enumerate() {
        match b {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((start, body + i));
                }
            }
            _ => {}
        }
    }
    Some((start, doc.len()))
}

/// Locate the route-entry list and its matching closing bracket.
///
/// Bracket depth is tracked from the opening `[`, so closing brackets inside
/// already-inserted entries (nested collection literals and the like) do not
/// terminate the search early.
fn find_list(doc: &str) -> Option<ListAnchor> {
    let open = doc.find(LIST_OPEN)? + LIST_OPEN.len();
    let mut depth = 1usize;
    for (i, b) in doc[open..].bytes().enumerate() {
        match b {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(ListAnchor {
                        open,
                        close: open + i,
                    });
                }
            }
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
import 'app_route.dart';
import '../pages/home/home_page.dart';

abstract class Router {
  static const String home = '/home';
  static const String homeName = 'home';

  static final List<AppRoute> routes = [
    AppRoute(
      path: Router.home,
      name: Router.homeName,
      builder: (context) => const HomePage(),
    ),
  ];
}
";

    #[test]
    fn finds_all_anchors_in_generated_output() {
        let anchors = scan(DOC);

        let import_end = anchors.import_end.unwrap();
        assert!(DOC[..import_end].ends_with("import '../pages/home/home_page.dart';"));
        assert_eq!(&DOC[import_end..import_end + 1], "\n");

        let container = anchors.container.unwrap();
        assert!(DOC[container..].starts_with(CONTAINER_SIGNATURE));

        let constant_end = anchors.constant_end.unwrap();
        assert!(DOC[..constant_end].ends_with("homeName = 'home';"));

        let list = anchors.list.unwrap();
        assert!(DOC[list.close..].starts_with("];"));
    }

    #[test]
    fn no_imports_means_no_import_anchor() {
        let anchors = scan("abstract class Router {\n}\n");
        assert_eq!(anchors.import_end, None);
    }

    #[test]
    fn empty_container_yields_no_constant_anchor() {
        let doc = "import 'a.dart';\nabstract class Router {\n}\n";
        let anchors = scan(doc);
        assert!(anchors.container.is_some());
        assert_eq!(anchors.constant_end, None);
    }

    #[test]
    fn constant_scan_stops_at_the_container_closing_brace() {
        let doc = "\
abstract class Router {
  static const String homeName = 'home';
}

class Legacy {
  static const String oldName = 'old';
}
";
        let constant_end = scan(doc).constant_end.unwrap();
        assert!(doc[..constant_end].ends_with("homeName = 'home';"));
    }

    #[test]
    fn unterminated_container_scans_to_end_of_document() {
        let doc = "abstract class Router {\n  static const String aName = 'a';\n";
        let constant_end = scan(doc).constant_end.unwrap();
        assert!(doc[..constant_end].ends_with("aName = 'a';"));
    }

    #[test]
    fn plain_constant_is_not_a_pair_anchor() {
        // Only the `<id>Name` constant of a pair counts; the path constant and
        // an identifier literally called `Name` do not.
        assert!(is_name_constant("static const String homeName = 'home';"));
        assert!(!is_name_constant("static const String home = '/home';"));
        assert!(!is_name_constant("static const String Name = 'x';"));
        assert!(!is_name_constant("static const int homeName = 3;"));
    }

    #[test]
    fn missing_list_open_yields_no_list_anchor() {
        let doc = "import 'a.dart';\nabstract class Router {\n  static const String aName = 'a';\n}\n";
        assert_eq!(scan(doc).list, None);
    }

    #[test]
    fn unterminated_list_yields_no_anchor() {
        let doc = "routes = [\n    AppRoute(\n";
        assert_eq!(scan(doc).list, None);
    }

    #[test]
    fn single_line_empty_list_closes_on_the_opener_line() {
        let doc = "  static final List<AppRoute> routes = [];\n";
        let list = scan(doc).list.unwrap();
        assert_eq!(list.close, list.open);
        assert!(doc[list.close..].starts_with("];"));
    }

    #[test]
    fn nested_brackets_inside_entries_do_not_close_the_list() {
        let doc = "\
  static final List<AppRoute> routes = [
    AppRoute(
      path: Router.home,
      name: Router.homeName,
      builder: (context) => const HomePage(tabs: ['a', 'b']),
    ),
  ];
";
        let list = scan(doc).list.unwrap();
        assert!(doc[list.close..].starts_with("];"));
    }

    #[test]
    fn import_anchor_is_the_last_import_line() {
        let doc = "import 'a.dart';\ncode();\nimport 'b.dart';\n";
        let end = scan(doc).import_end.unwrap();
        assert!(doc[..end].ends_with("import 'b.dart';"));
    }
}
