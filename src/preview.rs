//! HTML preview of a theme.
//!
//! Renders one self-contained page with a sample element for every scope,
//! so a theme can be checked in a browser without building the site:
//!
//! ```text
//! <style>  generated theme CSS + static/preview.css
//! <body class="...body_classes...">
//!   header   site name and tagline
//!   nav      three links
//!   article  heading, paragraph, link
//!   form     label, input, submit button
//!   .button  standalone button link
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) so every interpolated value is
//! escaped. The theme CSS itself is trusted and inserted raw.

use crate::document::ThemeDocument;
use crate::generate::generate;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const PREVIEW_CSS: &str = include_str!("../static/preview.css");

/// Render the preview page for a theme.
pub fn render_preview(doc: &ThemeDocument, title: &str) -> Markup {
    let css = format!("{}\n{}", generate(doc), PREVIEW_CSS);
    let body_class = body_class_attr(doc);

    let content = html! {
        header {
            p.scope-label { "header" }
            h1 { (title) }
            p { "A small business, open every day." }
        }
        nav {
            p.scope-label { "nav" }
            ul {
                li { a href="#" { "Home" } }
                li { a href="#" { "Products" } }
                li { a href="#" { "Events" } }
            }
        }
        main {
            article {
                p.scope-label { "article" }
                h2 { "Seasonal menu" }
                p {
                    "Fresh bread every morning. "
                    a href="#" { "See what's baking" }
                    "."
                }
            }
            form {
                p.scope-label { "form" }
                label for="preview-email" { "Email" }
                input type="email" id="preview-email" placeholder="you@example.com";
                " "
                input type="submit" value="Subscribe";
            }
            p {
                span.scope-label { "button" }
                " "
                a.button href="#" { "Order now" }
                " "
                button type="button" { "Add to cart" }
            }
        }
    };

    base_document(title, &css, body_class.as_deref(), content)
}

fn body_class_attr(doc: &ThemeDocument) -> Option<String> {
    if doc.body_classes.is_empty() {
        return None;
    }
    let classes: Vec<&str> = doc.body_classes.iter().map(String::as_str).collect();
    Some(classes.join(" "))
}

fn base_document(title: &str, css: &str, body_class: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body class=[body_class] {
                (content)
            }
        }
    }
}
