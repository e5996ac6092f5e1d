use crate::models::resume::Resume;
use crate::render::view::{mailto_href, safe_href, Element};

/// Summary panel: avatar, title, bio and contact links.
pub fn information(resume: &Resume) -> Element {
    let contacts: Vec<Element> = [
        resume.email.as_deref().and_then(|email| {
            mailto_href(email).map(|href| contact_link("contact-email", href, email))
        }),
        resume
            .url
            .as_deref()
            .and_then(safe_href)
            .map(|url| contact_link("contact-url", url.to_string(), url)),
    ]
    .into_iter()
    .flatten()
    .collect();

    Element::new("div")
        .class("information")
        .child(avatar(resume))
        .child(Element::new("h1").class("resume-title").text(resume.title.as_str()))
        .child_opt(resume.bio.as_deref().map(|bio| {
            Element::new("p")
                .class("resume-bio")
                .class("preserve-lines")
                .text(bio)
        }))
        .child_opt(
            (!contacts.is_empty())
                .then(|| Element::new("ul").class("contact-list").children(contacts)),
        )
}

fn contact_link(class: &'static str, href: String, label: &str) -> Element {
    Element::new("li")
        .class("contact")
        .class(class)
        .child(Element::new("a").attr("href", href).text(label))
}

/// An `<img>` only when there is a web image to load; otherwise a lettered
/// placeholder, so a missing image never triggers a request.
fn avatar(resume: &Resume) -> Element {
    match resume.image.as_deref().and_then(safe_href) {
        Some(src) => Element::new("img")
            .class("avatar")
            .attr("src", src)
            .attr("alt", resume.title.as_str()),
        None => Element::new("div")
            .class("avatar")
            .class("avatar-placeholder")
            .attr("aria-hidden", "true")
            .text(initial(&resume.title)),
    }
}

fn initial(title: &str) -> String {
    title
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_else(|| "?".to_string())
}
