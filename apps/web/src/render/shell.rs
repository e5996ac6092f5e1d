//! Navigation shell: the document frame, header and footer around every page.

use crate::render::view::{escape_text, Element};

pub const SITE_NAME: &str = "paperless.dev";

/// Top-level destinations shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    Resume,
    Login,
}

impl NavTarget {
    const ALL: [NavTarget; 3] = [NavTarget::Home, NavTarget::Resume, NavTarget::Login];

    pub fn path(self) -> &'static str {
        match self {
            NavTarget::Home => "/",
            NavTarget::Resume => "/resume",
            NavTarget::Login => "/login",
        }
    }

    fn label(self) -> &'static str {
        match self {
            NavTarget::Home => "Home",
            NavTarget::Resume => "Résumé",
            NavTarget::Login => "Log in",
        }
    }
}

/// Full HTML document: header, `body` inside `<main>`, footer.
pub fn document(title: &str, active: Option<NavTarget>, body: Element) -> String {
    let page = Element::new("body")
        .child(header(active))
        .child(Element::new("main").class("page").child(body))
        .child(footer());

    let mut escaped_title = String::new();
    escape_text(title, &mut escaped_title);

    format!(
        "<!DOCTYPE html><html lang=\"ko\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{} · {SITE_NAME}</title>\
         <link rel=\"stylesheet\" href=\"/static/app.css\"></head>{}</html>",
        escaped_title,
        page.to_html()
    )
}

pub fn header(active: Option<NavTarget>) -> Element {
    let links = NavTarget::ALL.into_iter().map(|target| {
        let link = Element::new("a")
            .class("nav-link")
            .attr("href", target.path())
            .text(target.label());
        if Some(target) == active {
            link.class("active").attr("aria-current", "page")
        } else {
            link
        }
    });

    Element::new("header")
        .class("site-header")
        .child(
            Element::new("a")
                .class("brand")
                .attr("href", "/")
                .text(SITE_NAME),
        )
        .child(Element::new("nav").class("site-nav").children(links))
}

pub fn footer() -> Element {
    Element::new("footer")
        .class("site-footer")
        .child(Element::new("p").text(format!("© {SITE_NAME}. Résumés without paper.")))
}
