//! Markup renderer.
//!
//! Every call produces the full grid from scratch; there is no patching of
//! previously rendered output.

use std::fmt::Write as _;

use super::add_button::AddButtons;
use super::catalog::{Catalog, Item};
use super::contact::{ContactForm, ContactNote};
use super::view_state::SortMode;

// ── Placeholder images ──────────────────────────────────────────────────────

/// Tint used when an image key is not in [`PLACEHOLDER_COLORS`].
pub const DEFAULT_PLACEHOLDER_COLOR: &str = "#4ade80";

/// Image key → placeholder tint.
pub const PLACEHOLDER_COLORS: [(&str, &str); 8] = [
    ("ui-kit", "#3b82f6"),
    ("blog", "#f472b6"),
    ("utils", "#22c55e"),
    ("shop", "#f59e0b"),
    ("tokens", "#8b5cf6"),
    ("charts", "#0ea5e9"),
    ("landing", "#ef4444"),
    ("buttons", "#10b981"),
];

pub const PLACEHOLDER_WIDTH: u32 = 640;
pub const PLACEHOLDER_HEIGHT: u32 = 420;

pub fn placeholder_color(image_key: &str) -> &'static str {
    PLACEHOLDER_COLORS
        .iter()
        .find(|(key, _)| *key == image_key)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_PLACEHOLDER_COLOR)
}

/// Deterministic vector placeholder for a card image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub color: &'static str,
    pub svg: String,
}

impl Placeholder {
    pub fn for_key(image_key: &str) -> Self {
        let color = placeholder_color(image_key);
        let svg = format!(
            "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {w} {h}'>\
             <rect width='100%' height='100%' rx='20' fill='#121a34'/>\
             <circle cx='120' cy='120' r='70' fill='{color}' opacity='.5'/>\
             <rect x='220' y='70' width='360' height='20' rx='10' fill='#cbd5e1' opacity='.4'/>\
             <rect x='220' y='110' width='300' height='16' rx='8' fill='#cbd5e1' opacity='.25'/>\
             <rect x='220' y='160' width='280' height='160' rx='14' fill='{color}' opacity='.18'/>\
             </svg>",
            w = PLACEHOLDER_WIDTH,
            h = PLACEHOLDER_HEIGHT,
        );
        Self { color, svg }
    }

    pub fn data_uri(&self) -> String {
        format!("data:image/svg+xml,{}", urlencoding::encode(&self.svg))
    }
}

// ── Grid ────────────────────────────────────────────────────────────────────

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rendered {
    pub markup: String,
    pub count: usize,
    pub count_label: String,
}

/// `"1 item shown"`, `"3 items shown"`.
pub fn count_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} item{plural} shown")
}

/// Render the grid with every Add control idle.
pub fn render(list: &[&Item]) -> Rendered {
    render_with(list, &AddButtons::default())
}

/// Render the grid, reflecting pending Add controls.
pub fn render_with(list: &[&Item], buttons: &AddButtons) -> Rendered {
    let mut markup = String::new();
    for item in list {
        write_card(&mut markup, item, buttons);
    }
    Rendered {
        markup,
        count: list.len(),
        count_label: count_label(list.len()),
    }
}

fn write_card(out: &mut String, item: &Item, buttons: &AddButtons) {
    let name = escape_html(&item.name);
    let src = Placeholder::for_key(&item.image_key).data_uri();
    let pending = buttons.is_pending(item.id);
    let button_attrs = if pending {
        " disabled aria-pressed=\"true\""
    } else {
        ""
    };

    // Writing into a String cannot fail.
    let _ = write!(
        out,
        "<article class=\"card\" role=\"listitem\" tabindex=\"0\" aria-label=\"{name}\">\
         <picture><img loading=\"lazy\" decoding=\"async\" alt=\"{name}\" src=\"{src}\" \
         width=\"{w}\" height=\"{h}\" /></picture>\
         <h3>{name}</h3>\
         <p>{price} \u{2022} {category}</p>\
         <div class=\"badge\"><span class=\"tag\">{category}</span>\
         <span class=\"tag\">Popularity {popularity}</span></div>\
         <button class=\"btn\" data-id=\"{id}\" aria-label=\"Add {name}\"{button_attrs}>{label}</button>\
         </article>",
        w = PLACEHOLDER_WIDTH,
        h = PLACEHOLDER_HEIGHT,
        price = item.price,
        category = item.category,
        popularity = item.rank(),
        id = item.id,
        label = escape_html(buttons.label(item.id)),
    );
}

// ── Controls and page ───────────────────────────────────────────────────────

/// Values shown by the search/category/sort controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ControlValues {
    /// Raw search box text (untrimmed).
    pub query: String,
    pub category: String,
    pub sort_mode: SortMode,
}

pub fn render_controls(controls: &ControlValues, catalog: &Catalog) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<div class=\"controls\">\
         <input id=\"q\" type=\"search\" placeholder=\"Search\" aria-label=\"Search\" value=\"{}\" />",
        escape_html(&controls.query)
    );

    out.push_str("<select id=\"category\" aria-label=\"Category\">");
    write_option(&mut out, "", "All categories", controls.category.is_empty());
    for category in catalog.categories() {
        let value = category.as_str();
        write_option(&mut out, value, value, controls.category == value);
    }
    out.push_str("</select>");

    out.push_str("<select id=\"sort\" aria-label=\"Sort\">");
    for mode in SortMode::ALL {
        write_option(&mut out, mode.token(), mode.label(), controls.sort_mode == mode);
    }
    out.push_str("</select>");

    out.push_str("<button id=\"reset\" type=\"button\">Reset</button></div>");
    out
}

fn write_option(out: &mut String, value: &str, label: &str, selected: bool) {
    let selected = if selected { " selected" } else { "" };
    let _ = write!(
        out,
        "<option value=\"{}\"{selected}>{}</option>",
        escape_html(value),
        escape_html(label)
    );
}

pub fn render_contact(form: &ContactForm, note: Option<&ContactNote>) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        "<section id=\"contact\"><form id=\"contactForm\" novalidate>\
         <input id=\"name\" name=\"name\" autocomplete=\"name\" value=\"{}\" />\
         <input id=\"email\" name=\"email\" type=\"email\" autocomplete=\"email\" value=\"{}\" />\
         <button type=\"submit\">Send</button></form>",
        escape_html(&form.name),
        escape_html(&form.email),
    );
    match note {
        Some(note) => {
            let _ = write!(
                out,
                "<p id=\"contactNote\" class=\"{}\" role=\"status\">{}</p>",
                note.css_class(),
                escape_html(note.message())
            );
        }
        None => out.push_str("<p id=\"contactNote\" role=\"status\"></p>"),
    }
    out.push_str("</section>");
    out
}

/// Full page body: controls, count, grid and contact form.
pub fn render_page(
    catalog: &Catalog,
    controls: &ControlValues,
    rendered: &Rendered,
    form: &ContactForm,
    note: Option<&ContactNote>,
) -> String {
    let mut out = String::new();
    out.push_str("<main id=\"catalog\">");
    out.push_str(&render_controls(controls, catalog));
    let _ = write!(
        out,
        "<p id=\"count\" aria-live=\"polite\">{}</p>\
         <div id=\"grid\" role=\"list\">{}</div>",
        escape_html(&rendered.count_label),
        rendered.markup
    );
    out.push_str(&render_contact(form, note));
    out.push_str("</main>");
    out
}

pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
