// src/render/html.rs
//! Static HTML output.
//!
//! The dashboard page holds every card it was given and hides the ones the
//! initial query rejects. An inline script re-runs the same substring test
//! on each `input` event of `#search`, always over the full card list.

use std::fmt::Write as _;

use crate::config::consts::APP_TITLE;
use crate::core::sanitize::{ escape_attr, escape_html };

use super::{ Card, Display };

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 2rem; background: #f7f7f9; color: #222; }
#search { width: 100%; max-width: 32rem; padding: .5rem .75rem; font-size: 1rem; margin-bottom: .5rem; }
#dashboard { display: grid; grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr)); gap: 1rem; }
.robot-card { background: #fff; border-radius: 12px; padding: 1rem; box-shadow: 0 1px 4px rgba(0,0,0,.12); }
.robot-card h2 { margin: 0 0 .5rem; font-size: 1.2rem; }
.robot-card p { margin: .2rem 0; }
.robot-card .grade { font-size: .9rem; color: #666; }
.robot-card details { margin: .5rem 0; font-size: .85rem; }
.robot-card .links a { margin-right: 1rem; }
"#;

const SCRIPT: &str = r##"
(function () {
  var input = document.getElementById("search");
  var cards = document.querySelectorAll("#dashboard .robot-card");
  var count = document.getElementById("count");
  input.addEventListener("input", function () {
    var q = input.value.toLowerCase();
    var shown = 0;
    cards.forEach(function (card) {
      var hit = q === "" || card.dataset.name.includes(q) || card.dataset.manufacturer.includes(q);
      card.hidden = !hit;
      if (hit) { shown += 1; }
    });
    count.textContent = "Showing " + shown + " matching robots";
  });
})();
"##;

fn line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "    <p><strong>{}:</strong> {}</p>",
        escape_html(label),
        escape_html(value)
    );
}

/// Markup for a single card.
pub fn render_card(card: &Card, hidden: bool) -> String {
    let mut out = String::with_capacity(1024);

    let _ = writeln!(
        out,
        r#"  <div class="robot-card" data-name="{}" data-manufacturer="{}"{}>"#,
        escape_attr(&card.name_key),
        escape_attr(&card.manufacturer_key),
        if hidden { " hidden" } else { "" }
    );
    let _ = writeln!(out, "    <h2>{}</h2>", escape_html(&card.title));
    line(&mut out, "Manufacturer", &card.manufacturer);
    line(&mut out, "Price", &card.price);
    if let Some(g) = &card.grade_line {
        let _ = writeln!(out, r#"    <p class="grade">{}</p>"#, escape_html(g));
    }

    out.push_str("    <details>\n      <summary>More Info</summary>\n");
    for d in &card.details {
        let _ = writeln!(
            out,
            "      <p><strong>{}:</strong> {}</p>",
            escape_html(d.label),
            escape_html(&d.value)
        );
    }
    let _ = writeln!(out, r#"      <p class="description">{}</p>"#, escape_html(&card.description));
    out.push_str("    </details>\n");

    let _ = writeln!(
        out,
        r#"    <p class="links"><a href="{}" target="_blank" rel="noopener">Buy Now</a><a href="{}" target="_blank" rel="noopener">Manufacturer Site</a></p>"#,
        escape_attr(card.purchase_href()),
        escape_attr(card.manufacturer_href())
    );
    out.push_str("  </div>\n");
    out
}

/// Contents of `#dashboard`, replaced wholesale on every update.
#[derive(Clone, Debug, Default)]
pub struct HtmlBoard {
    inner: String,
    shown: usize,
}

impl HtmlBoard {
    pub fn markup(&self) -> &str {
        &self.inner
    }

    pub fn shown(&self) -> usize {
        self.shown
    }
}

impl Display for HtmlBoard {
    fn replace_all(&mut self, cards: Vec<Card>) {
        self.shown = cards.len();
        self.inner = cards.iter().map(|c| render_card(c, false)).collect();
    }
}

/// Full standalone page. `cards` is the whole list the page can search;
/// cards rejected by `query` start hidden.
pub fn render_dashboard_page(cards: &[Card], query: &str) -> String {
    let shown = cards.iter().filter(|c| c.matches(query)).count();

    let mut out = String::with_capacity(2048 + cards.len() * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_html(APP_TITLE));
    let _ = writeln!(out, "<style>{STYLE}</style>\n</head>\n<body>");
    let _ = writeln!(out, "<h1>{}</h1>", escape_html(APP_TITLE));
    let _ = writeln!(
        out,
        r#"<input id="search" type="search" placeholder="Search name or manufacturer" value="{}">"#,
        escape_attr(query)
    );
    let _ = writeln!(out, r#"<p id="count">Showing {shown} matching robots</p>"#);
    out.push_str("<div id=\"dashboard\">\n");
    for c in cards {
        out.push_str(&render_card(c, !c.matches(query)));
    }
    out.push_str("</div>\n");
    let _ = writeln!(out, "<script>{SCRIPT}</script>\n</body>\n</html>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_cards;

    #[test]
    fn card_escapes_text_and_keeps_href() {
        let cards = render_cards(&[record! {
            "Name" => "R<2>D",
            "Purchase Website" => "https://shop.example/?a=1&b=\"2\"",
        }]);
        let html = render_card(&cards[0], false);
        assert!(html.contains("<h2>R&lt;2&gt;D</h2>"));
        assert!(html.contains(r#"href="https://shop.example/?a=1&amp;b=&quot;2&quot;""#));
        assert!(html.contains(r##"href="#" target="_blank""##));
        assert!(!html.contains(" hidden>"));
    }

    #[test]
    fn page_wires_search_to_dashboard_cards() {
        let cards = render_cards(&[
            record! { "Name" => "Buddy", "Manufacturer" => "RoboCorp" },
            record! { "Name" => "Ozobot", "Manufacturer" => "Ozobot Inc" },
        ]);
        let page = render_dashboard_page(&cards, "Robo");
        assert!(page.contains(r#"<input id="search" type="search""#));
        assert!(page.contains(r#"value="Robo""#));
        assert!(page.contains("<div id=\"dashboard\">"));
        assert!(page.contains(r##"querySelectorAll("#dashboard .robot-card")"##));
        assert!(page.contains("Showing 1 matching robots"));
        assert!(page.contains(r#"data-name="ozobot" data-manufacturer="ozobot inc" hidden>"#));
        assert!(page.contains(r#"data-name="buddy" data-manufacturer="robocorp">"#));
        assert!(page.trim_end().ends_with("</html>"));
    }

    #[test]
    fn board_holds_only_latest_cards() {
        let mut board = HtmlBoard::default();
        board.replace_all(render_cards(&[record! { "Name" => "Alpha" }, record! { "Name" => "Beta" }]));
        board.replace_all(render_cards(&[record! { "Name" => "Gamma" }]));
        assert_eq!(board.shown(), 1);
        assert!(board.markup().contains("Gamma"));
        assert!(!board.markup().contains("Alpha"));
    }
}
