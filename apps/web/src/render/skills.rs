use crate::render::section::{badge_list, resume_section, Icon};
use crate::render::view::Element;

pub fn skills(skills: &[String]) -> Element {
    resume_section(Icon::Tags, "Skills", vec![badge_list(skills).into()])
}
