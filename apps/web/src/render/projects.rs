use crate::models::resume::Project;
use crate::render::section::{badge_list, date_badge, resume_section, Icon};
use crate::render::view::{safe_href, Element};

/// Project cards in a responsive grid. Column count is a stylesheet concern.
pub fn projects(projects: &[Project]) -> Element {
    let grid = Element::new("div")
        .class("project-grid")
        .children(projects.iter().map(project_card));
    resume_section(Icon::Folder, "Projects", vec![grid.into()])
}

fn project_card(project: &Project) -> Element {
    Element::new("article")
        .class("item")
        .class("project")
        .attr("data-key", project.id.as_str())
        .child(
            Element::new("header")
                .class("item-header")
                .child(Element::new("h3").class("item-title").text(project.title.as_str()))
                .child_opt(project.url.as_deref().and_then(safe_href).map(external_link))
                .child(date_badge(&project.start_date, &project.end_date)),
        )
        .child(
            Element::new("p")
                .class("item-description")
                .class("preserve-lines")
                .text(project.description.as_str()),
        )
        .child_opt((!project.skills.is_empty()).then(|| badge_list(&project.skills)))
}

fn external_link(url: &str) -> Element {
    Element::new("a")
        .class("external-link")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .attr("aria-label", "Open project")
        .text("↗")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::project;

    #[test]
    fn test_link_gated_on_url() {
        let mut linked = project("p1", "Scanner");
        linked.url = Some("https://github.com/example/scanner".into());
        let unlinked = project("p2", "Notes");

        let section = projects(&[linked, unlinked]);
        let cards = section.find_all("project");
        let links = cards[0].find_all("external-link");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].get_attr("href"), Some("https://github.com/example/scanner"));
        assert!(cards[1].find_all("external-link").is_empty());
    }

    #[test]
    fn test_script_url_renders_no_link() {
        let mut item = project("p1", "Scanner");
        item.url = Some("javascript:alert(document.cookie)".into());
        let section = projects(&[item]);
        assert!(section.find_all("external-link").is_empty());
        assert!(!section.to_html().contains("javascript:"));
    }

    #[test]
    fn test_project_skills_in_order() {
        let mut item = project("p1", "Scanner");
        item.skills = vec!["Rust".into(), "tokio".into(), "Rust".into()];
        let section = projects(&[item]);
        let badges: Vec<String> = section.find_all("tag-badge").iter().map(|b| b.text_content()).collect();
        assert_eq!(badges, vec!["Rust", "tokio", "Rust"]);
    }

    #[test]
    fn test_empty_projects_render_grid_without_cards() {
        let section = projects(&[]);
        assert!(section.find("project-grid").is_some());
        assert!(section.find_all("item").is_empty());
    }

    #[test]
    fn test_date_badge() {
        let section = projects(&[project("p1", "Scanner")]);
        assert_eq!(section.find("date-badge").unwrap().text_content(), "2021-01 - 2021-06");
    }
}
