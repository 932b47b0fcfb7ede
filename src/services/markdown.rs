// src/services/markdown.rs

/// Header markers and the metadata labels they map to, ordered by nesting
/// level. `###` and deeper are not tracked and stay part of the body text.
pub const NOTES_HEADINGS: &[(&str, &str)] = &[("#", "Main Topic"), ("##", "Subtopic")];

/// A chunk of a Markdown document demarcated by header boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub content: String,
    /// `(label, heading title)` pairs for the headers this section falls
    /// under, outermost first.
    pub headers: Vec<(String, String)>,
}

/// Splits Markdown text into ordered sections at the given header levels.
///
/// A header line at level N replaces the metadata for that level and clears
/// every deeper level. Body text before the first matching header is not
/// captured, so input without matching headers yields an empty list; callers
/// must treat that as an error rather than proceed with nothing.
pub fn split_by_headings(text: &str, headings: &[(&str, &str)]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut path: Vec<Option<(String, String)>> = vec![None; headings.len()];
    let mut body: Vec<&str> = Vec::new();
    let mut in_fence: Option<char> = None;
    let mut seen_header = false;

    for line in text.lines() {
        let trimmed = line.trim_start();

        // Fenced code blocks are opaque: a "# ..." line inside one is code,
        // not a heading.
        if let Some(fence) = fence_char(trimmed) {
            match in_fence {
                Some(open) if open == fence => in_fence = None,
                None => in_fence = Some(fence),
                Some(_) => {}
            }
            body.push(line);
            continue;
        }
        if in_fence.is_some() {
            body.push(line);
            continue;
        }

        match heading_match(trimmed, headings) {
            Some((level, title)) => {
                flush(&mut sections, &mut body, &path, seen_header);
                path[level] = Some((headings[level].1.to_string(), title.to_string()));
                for deeper in path[level + 1..].iter_mut() {
                    *deeper = None;
                }
                seen_header = true;
            }
            None => body.push(line),
        }
    }
    flush(&mut sections, &mut body, &path, seen_header);

    sections
}

fn flush(
    sections: &mut Vec<Section>,
    body: &mut Vec<&str>,
    path: &[Option<(String, String)>],
    seen_header: bool,
) {
    let content = body.join("\n").trim().to_string();
    body.clear();
    if !seen_header || content.is_empty() {
        return;
    }
    let headers = path.iter().flatten().cloned().collect();
    sections.push(Section { content, headers });
}

/// Matches a line against the tracked header markers. Markers require a
/// trailing space, so `#` never matches an `##` line.
fn heading_match<'a>(line: &'a str, headings: &[(&str, &str)]) -> Option<(usize, &'a str)> {
    for (level, (marker, _)) in headings.iter().enumerate() {
        if let Some(rest) = line.strip_prefix(marker) {
            if let Some(title) = rest.strip_prefix(' ') {
                return Some((level, title.trim()));
            }
        }
    }
    None
}

fn fence_char(line: &str) -> Option<char> {
    if line.starts_with("```") {
        Some('`')
    } else if line.starts_with("~~~") {
        Some('~')
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(section: &Section) -> Vec<(&str, &str)> {
        section
            .headers
            .iter()
            .map(|(label, title)| (label.as_str(), title.as_str()))
            .collect()
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(split_by_headings("", NOTES_HEADINGS).is_empty());
    }

    #[test]
    fn text_without_headings_yields_no_sections() {
        let text = "just some notes\nwith no structure at all\n";
        assert!(split_by_headings(text, NOTES_HEADINGS).is_empty());
    }

    #[test]
    fn splits_on_tracked_headers_with_metadata() {
        let text = "# Algebra\nlinear equations\n## Matrices\ndeterminants\n";
        let sections = split_by_headings(text, NOTES_HEADINGS);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].content, "linear equations");
        assert_eq!(pairs(&sections[0]), vec![("Main Topic", "Algebra")]);
        assert_eq!(sections[1].content, "determinants");
        assert_eq!(
            pairs(&sections[1]),
            vec![("Main Topic", "Algebra"), ("Subtopic", "Matrices")]
        );
    }

    #[test]
    fn new_main_topic_clears_subtopic() {
        let text = "# A\n## A1\nalpha\n# B\nbeta\n";
        let sections = split_by_headings(text, NOTES_HEADINGS);

        assert_eq!(sections.len(), 2);
        assert_eq!(pairs(&sections[0]), vec![("Main Topic", "A"), ("Subtopic", "A1")]);
        assert_eq!(pairs(&sections[1]), vec![("Main Topic", "B")]);
    }

    #[test]
    fn untracked_header_levels_stay_in_body() {
        let text = "# Topic\n### Detail\nbody\n";
        let sections = split_by_headings(text, NOTES_HEADINGS);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "### Detail\nbody");
    }

    #[test]
    fn headers_inside_code_fences_do_not_split() {
        let text = "# Shell\n```\n# this is a comment, not a heading\necho hi\n```\nafter\n";
        let sections = split_by_headings(text, NOTES_HEADINGS);

        assert_eq!(sections.len(), 1);
        assert!(sections[0].content.contains("# this is a comment"));
        assert!(sections[0].content.contains("after"));
    }

    #[test]
    fn preamble_before_first_header_is_dropped() {
        let text = "intro line\n# Topic\nbody\n";
        let sections = split_by_headings(text, NOTES_HEADINGS);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content, "body");
    }

    #[test]
    fn consecutive_headers_produce_no_empty_sections() {
        let text = "# A\n## A1\n## A2\ncontent\n";
        let sections = split_by_headings(text, NOTES_HEADINGS);

        assert_eq!(sections.len(), 1);
        assert_eq!(
            pairs(&sections[0]),
            vec![("Main Topic", "A"), ("Subtopic", "A2")]
        );
    }

    #[test]
    fn sections_keep_document_order() {
        let text = "# One\nfirst\n# Two\nsecond\n# Three\nthird\n";
        let sections = split_by_headings(text, NOTES_HEADINGS);

        let contents: Vec<&str> = sections.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }
}
