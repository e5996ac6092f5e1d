//! Shared section chrome and the small pieces every section reuses.

use crate::render::view::{Element, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Tags,
    Briefcase,
    Folder,
    GraduationCap,
}

impl Icon {
    fn class(self) -> &'static str {
        match self {
            Icon::Tags => "icon-tags",
            Icon::Briefcase => "icon-briefcase",
            Icon::Folder => "icon-folder",
            Icon::GraduationCap => "icon-graduation-cap",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Icon::Tags => "🏷",
            Icon::Briefcase => "💼",
            Icon::Folder => "📁",
            Icon::GraduationCap => "🎓",
        }
    }
}

/// Heading row (icon + title) followed by `children` stacked vertically, in
/// the order given.
pub fn resume_section(icon: Icon, title: &str, children: Vec<Node>) -> Element {
    Element::new("section")
        .class("resume-section")
        .child(
            Element::new("header")
                .class("section-heading")
                .child(
                    Element::new("span")
                        .class("section-icon")
                        .class(icon.class())
                        .attr("aria-hidden", "true")
                        .text(icon.glyph()),
                )
                .child(Element::new("h2").class("section-title").text(title)),
        )
        .child(Element::new("div").class("section-body").children(children))
}

/// `"{start} - {end}"`. Both ends are opaque display text.
pub fn date_range(start: &str, end: &str) -> String {
    format!("{start} - {end}")
}

pub fn date_badge(start: &str, end: &str) -> Element {
    Element::new("span")
        .class("badge")
        .class("date-badge")
        .text(date_range(start, end))
}

pub fn badge(label: &str) -> Element {
    Element::new("span").class("badge").class("tag-badge").text(label)
}

/// One badge per label, input order, no dedup.
pub fn badge_list(labels: &[String]) -> Element {
    Element::new("div")
        .class("badge-list")
        .children(labels.iter().map(|label| badge(label)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_precedes_children_in_order() {
        let section = resume_section(
            Icon::Folder,
            "Projects",
            vec![
                Element::new("p").class("first").into(),
                Element::new("p").class("second").into(),
            ],
        );
        assert_eq!(section.find("section-title").unwrap().text_content(), "Projects");
        let body = section.find("section-body").unwrap();
        assert!(body.children[0] == Node::Element(Element::new("p").class("first")));
        assert!(body.children[1] == Node::Element(Element::new("p").class("second")));
        assert!(section.find("icon-folder").is_some());
    }

    #[test]
    fn test_empty_children_still_render_heading() {
        let section = resume_section(Icon::Briefcase, "Career", Vec::new());
        assert!(section.find("section-heading").is_some());
        assert!(section.find("section-body").unwrap().children.is_empty());
    }

    #[test]
    fn test_date_range_is_literal() {
        assert_eq!(date_range("2020-01", "현재"), "2020-01 - 현재");
        assert_eq!(date_range("", ""), " - ");
        assert_eq!(date_range("Spring 2019", "2020.12"), "Spring 2019 - 2020.12");
    }

    #[test]
    fn test_badge_list_keeps_duplicates_and_case() {
        let labels = vec!["Go".to_string(), "go".to_string(), "Go".to_string()];
        let list = badge_list(&labels);
        let texts: Vec<String> = list.find_all("tag-badge").iter().map(|b| b.text_content()).collect();
        assert_eq!(texts, vec!["Go", "go", "Go"]);
    }
}
