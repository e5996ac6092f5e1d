use crate::models::resume::Experience;
use crate::render::section::{date_badge, resume_section, Icon};
use crate::render::view::{Element, Node};

/// One row per experience, in array order. Descriptions are never truncated.
pub fn career(experiences: &[Experience]) -> Element {
    let rows: Vec<Node> = experiences.iter().map(|e| experience_row(e).into()).collect();
    resume_section(Icon::Briefcase, "Career", rows)
}

fn experience_row(experience: &Experience) -> Element {
    Element::new("article")
        .class("item")
        .class("experience")
        .attr("data-key", experience.id.as_str())
        .child(
            Element::new("header")
                .class("item-header")
                .child(Element::new("h3").class("item-title").text(experience.title.as_str()))
                .child(Element::new("span").class("item-subtitle").text(experience.company.as_str()))
                .child(date_badge(&experience.start_date, &experience.end_date)),
        )
        .child_opt(
            experience
                .location
                .as_deref()
                .map(|location| Element::new("p").class("item-location").text(location)),
        )
        .child(
            Element::new("p")
                .class("item-description")
                .class("preserve-lines")
                .text(experience.description.as_str()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures::experience;

    #[test]
    fn test_rows_in_order_with_badges() {
        let items = vec![
            experience("e1", "Acme", "2020-01", "현재"),
            experience("e2", "Initech", "2017-03", "2019-12"),
        ];
        let section = career(&items);
        let rows = section.find_all("experience");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].find("item-subtitle").unwrap().text_content(), "Acme");
        assert_eq!(rows[0].find("date-badge").unwrap().text_content(), "2020-01 - 현재");
        assert_eq!(rows[1].find("date-badge").unwrap().text_content(), "2017-03 - 2019-12");
        assert_eq!(rows[1].get_attr("data-key"), Some("e2"));
    }

    #[test]
    fn test_location_only_when_present() {
        let mut with_location = experience("e1", "Acme", "2020-01", "2021-01");
        with_location.location = Some("Seoul".into());
        let without = experience("e2", "Initech", "2018-01", "2019-01");

        let section = career(&[with_location, without]);
        let rows = section.find_all("experience");
        assert_eq!(rows[0].find("item-location").unwrap().text_content(), "Seoul");
        assert!(rows[1].find("item-location").is_none());
    }

    #[test]
    fn test_description_keeps_line_breaks() {
        let mut item = experience("e1", "Acme", "2020-01", "현재");
        item.description = "Built X\n- migrated Y\n\n- owned Z".into();
        let section = career(&[item]);
        let description = section.find("item-description").unwrap();
        assert_eq!(description.text_content(), "Built X\n- migrated Y\n\n- owned Z");
        assert!(description.has_class("preserve-lines"));
    }

    #[test]
    fn test_empty_list_renders_heading_only() {
        let section = career(&[]);
        assert_eq!(section.find("section-title").unwrap().text_content(), "Career");
        assert!(section.find_all("item").is_empty());
    }
}
