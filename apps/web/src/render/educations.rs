use crate::models::resume::Education;
use crate::render::section::{date_badge, resume_section, Icon};
use crate::render::view::{Element, Node};

pub fn educations(educations: &[Education]) -> Element {
    let rows: Vec<Node> = educations.iter().map(|e| education_row(e).into()).collect();
    resume_section(Icon::GraduationCap, "Education", rows)
}

/// `"{major} · {degree}"` when both are present, the single present one
/// otherwise, nothing when both are absent.
pub fn major_degree_line(major: Option<&str>, degree: Option<&str>) -> Option<String> {
    match (major, degree) {
        (Some(major), Some(degree)) => Some(format!("{major} · {degree}")),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

fn education_row(education: &Education) -> Element {
    Element::new("article")
        .class("item")
        .class("education")
        .attr("data-key", education.id.as_str())
        .child(
            Element::new("header")
                .class("item-header")
                .child(Element::new("h3").class("item-title").text(education.school.as_str()))
                .child(date_badge(&education.start_date, &education.end_date)),
        )
        .child_opt(
            major_degree_line(education.major.as_deref(), education.degree.as_deref())
                .map(|line| Element::new("p").class("major-degree").text(line)),
        )
        .child_opt(
            education
                .gpa
                .as_deref()
                .map(|gpa| Element::new("p").class("gpa").text(format!("GPA {gpa}"))),
        )
        .child_opt(education.activities.as_deref().map(|activities| {
            Element::new("blockquote")
                .class("activities")
                .class("preserve-lines")
                .text(activities)
        }))
}
