//! Static pages: marketing landing and the login stub.

use crate::render::shell::NavTarget;
use crate::render::view::Element;

const FEATURES: &[(&str, &str)] = &[
    (
        "One source of truth",
        "Keep experience, projects and education in one structured record.",
    ),
    (
        "Always presentable",
        "Every résumé renders in the same clean two-column layout.",
    ),
    (
        "Share a link",
        "Send a URL instead of a file. It is never out of date.",
    ),
];

pub fn landing() -> Element {
    let cards = FEATURES.iter().map(|(title, body)| {
        Element::new("article")
            .class("feature-card")
            .child(Element::new("h3").text(*title))
            .child(Element::new("p").text(*body))
    });

    Element::new("div")
        .class("landing")
        .child(
            Element::new("section")
                .class("hero")
                .child(Element::new("h1").text("Your résumé, without the paper."))
                .child(
                    Element::new("p")
                        .class("hero-lead")
                        .text("Write it once as data and show it anywhere."),
                )
                .child(
                    Element::new("a")
                        .class("button")
                        .class("cta")
                        .attr("href", NavTarget::Resume.path())
                        .text("See a résumé"),
                ),
        )
        .child(Element::new("section").class("features").children(cards))
}

/// Login form stub. It has no action, and the button does not submit.
pub fn login() -> Element {
    Element::new("div").class("login").child(
        Element::new("form")
            .class("login-form")
            .attr("autocomplete", "on")
            .child(Element::new("h1").text("Log in"))
            .child(field("username", "Username", "text"))
            .child(field("password", "Password", "password"))
            .child(
                Element::new("button")
                    .class("button")
                    .attr("type", "button")
                    .text("Log in"),
            ),
    )
}

fn field(name: &'static str, label: &str, kind: &'static str) -> Element {
    Element::new("label")
        .class("form-field")
        .child(Element::new("span").text(label))
        .child(
            Element::new("input")
                .attr("name", name)
                .attr("type", kind)
                .attr("required", "required"),
        )
}
