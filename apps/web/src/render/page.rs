use crate::errors::ProviderError;
use crate::models::resume::Resume;
use crate::render::view::Element;
use crate::render::{career, educations, information, projects, skills};

/// Sidebar: Information, Skills. Main: Career, Projects, Educations.
/// The region contents and their order are fixed.
pub fn resume_page(resume: &Resume) -> Element {
    Element::new("div")
        .class("resume-page")
        .child(
            Element::new("aside")
                .class("resume-sidebar")
                .child(information::information(resume))
                .child(skills::skills(&resume.skills)),
        )
        .child(
            Element::new("div")
                .class("resume-main")
                .child(career::career(&resume.experiences))
                .child(projects::projects(&resume.projects))
                .child(educations::educations(&resume.educations)),
        )
}

/// Fallback shown in place of the résumé when the provider failed.
pub fn error_page(err: &ProviderError) -> Element {
    fallback_state("Résumé unavailable", err.user_message())
}

pub fn fallback_state(heading: &str, message: &str) -> Element {
    Element::new("div")
        .class("fallback-state")
        .attr("role", "alert")
        .child(Element::new("h1").class("fallback-heading").text(heading))
        .child(Element::new("p").class("fallback-message").text(message))
        .child(Element::new("a").class("button").attr("href", "/").text("Back to home"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::{education, experience, project, resume_with};

    #[test]
    fn test_section_order_is_fixed() {
        let resume = resume_with(|r| {
            r.experiences = vec![experience("e1", "Acme", "2020-01", "현재")];
            r.projects = vec![project("p1", "Scanner")];
            r.educations = vec![education("ed1", "KAIST")];
        });
        let page = resume_page(&resume);

        let sidebar = page.find("resume-sidebar").unwrap();
        assert!(sidebar.find("information").is_some());
        let sidebar_titles: Vec<String> =
            sidebar.find_all("section-title").iter().map(|t| t.text_content()).collect();
        assert_eq!(sidebar_titles, vec!["Skills"]);

        let main = page.find("resume-main").unwrap();
        let titles: Vec<String> = main.find_all("section-title").iter().map(|t| t.text_content()).collect();
        assert_eq!(titles, vec!["Career", "Projects", "Education"]);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let resume = resume_with(|r| {
            r.experiences = vec![experience("e1", "Acme", "2020-01", "현재")];
            r.projects = vec![project("p1", "Scanner")];
        });
        assert_eq!(resume_page(&resume), resume_page(&resume));
        assert_eq!(resume_page(&resume).to_html(), resume_page(&resume).to_html());
    }

    #[test]
    fn test_single_experience_scenario() {
        let resume = resume_with(|r| {
            r.skills = vec!["Go".into(), "SQL".into()];
            let mut job = experience("e1", "Acme", "2020-01", "현재");
            job.title = "Engineer".into();
            job.description = "Built X".into();
            r.experiences = vec![job];
            r.projects = Vec::new();
            r.educations = Vec::new();
        });
        let page = resume_page(&resume);

        let career_rows = page.find_all("experience");
        assert_eq!(career_rows.len(), 1);
        assert_eq!(career_rows[0].find("item-title").unwrap().text_content(), "Engineer");
        assert_eq!(career_rows[0].find("date-badge").unwrap().text_content(), "2020-01 - 현재");
        assert!(page.find_all("project").is_empty());
        assert!(page.find_all("education").is_empty());

        let skills: Vec<String> = page
            .find("resume-sidebar")
            .unwrap()
            .find_all("tag-badge")
            .iter()
            .map(|b| b.text_content())
            .collect();
        assert_eq!(skills, vec!["Go", "SQL"]);
    }

    #[test]
    fn test_empty_collections_render_headings_without_rows() {
        let page = resume_page(&resume_with(|_| {}));
        assert_eq!(page.find_all("resume-section").len(), 4);
        assert!(page.find_all("item").is_empty());
    }

    #[test]
    fn test_error_page_has_no_sections() {
        let page = error_page(&ProviderError::DataUnavailable("empty".into()));
        assert!(page.find_all("resume-section").is_empty());
        assert!(page.find("information").is_none());
        assert_eq!(page.find("fallback-heading").unwrap().text_content(), "Résumé unavailable");
    }
}
