use crate::documents::sections::{to_structured_sections, SectionsMap};

/// Flattens a document into `"<title>\n<content>"` blocks separated by a
/// blank line, in canonical section order. Missing sections still emit
/// their default title.
pub fn assemble_plain_text(sections: &SectionsMap) -> String {
    to_structured_sections(sections)
        .iter()
        .map(|s| format!("{}\n{}", s.title, s.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::sections::{Section, SectionKey};

    #[test]
    fn test_empty_map_emits_every_default_header() {
        let text = assemble_plain_text(&SectionsMap::new());
        let expected = SectionKey::ALL
            .iter()
            .map(|k| format!("{}\n", k.default_title()))
            .collect::<Vec<_>>()
            .join("\n\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_sections_appear_in_canonical_order() {
        let map: SectionsMap = [
            (SectionKey::Goal, Section::new("Goal", "become faculty")),
            (SectionKey::Academic, Section::new("Academics", "GPA 3.9")),
            (SectionKey::Hook, Section::new("Hook", "It started")),
        ]
        .into_iter()
        .collect();

        let text = assemble_plain_text(&map);
        let hook = text.find("It started").unwrap();
        let academic = text.find("GPA 3.9").unwrap();
        let goal = text.find("become faculty").unwrap();
        assert!(hook < academic && academic < goal);
        assert!(text.starts_with("Hook\nIt started\n\nSegue\n\n\nAcademics\nGPA 3.9"));
    }

    #[test]
    fn test_one_header_per_canonical_key() {
        let text = assemble_plain_text(&SectionsMap::new());
        for key in SectionKey::ALL {
            assert_eq!(
                text.matches(&format!("{}\n", key.default_title())).count(),
                1,
                "header for {:?}",
                key
            );
        }
    }
}
