// src/core/html.rs
use scraper::{ElementRef, Html, Selector};

/// Compile a selector literal. All selectors in this crate are constants,
/// so a bad one is a programming error caught by the unit tests.
pub fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

pub fn first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

pub fn first_in_doc<'a>(doc: &'a Html, selector: &Selector) -> Option<ElementRef<'a>> {
    doc.select(selector).next()
}

/// Visible text with leading/trailing whitespace removed (inner runs kept).
pub fn text_trim(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(str::to_string)
}

/// Text of a content container: `p` and `a` children contribute their text
/// plus one space, nested `div`s are walked, anything else is skipped.
pub fn container_text(el: ElementRef<'_>) -> String {
    let mut out = String::new();
    walk_container(el, &mut out);
    out
}

fn walk_container(el: ElementRef<'_>, out: &mut String) {
    for child in el.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "div" => walk_container(child, out),
            "p" | "a" => {
                out.extend(child.text());
                out.push(' ');
            }
            _ => {}
        }
    }
}
