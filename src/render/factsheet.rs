// src/render/factsheet.rs
//! One-page fact sheet for a single robot, as standalone HTML.

use std::fmt::Write as _;

use crate::config::consts::*;
use crate::core::format::money_or_placeholder;
use crate::core::sanitize::{ escape_attr, escape_html };
use crate::record::{ field, Record };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FactSheet {
    pub title: String,
    pub features: Vec<&'static str>,
    pub summary: String,
    pub grade_level: String,
    pub students_per_device: String,
    pub standard: &'static str,
    pub single_price: String,
    pub set_price: String,
    pub more_info: String,
}

fn says_no(r: &Record, f: &str) -> bool {
    r.get(f).is_some_and(|v| v.trim().eq_ignore_ascii_case("no"))
}

impl FactSheet {
    pub fn from_record(r: &Record) -> Self {
        let mut features = Vec::new();
        if says_no(r, field::DEVICE_REQUIRED) {
            features.push("No Device Required");
        }
        if says_no(r, field::AUDITORY_ACCESSIBILITY) {
            features.push("No Audio Required");
        }
        if says_no(r, field::VISUAL_ACCESSIBILITY) {
            features.push("No Text/Visual Required");
        }
        features.push("Touch Required");

        Self {
            title: s!(r.value_or(field::NAME, PLACEHOLDER)),
            features,
            summary: s!(r.value_or(field::DESCRIPTION, DEFAULT_SUMMARY)),
            grade_level: s!(r.value_or(field::MIN_GRADE_LEVEL, PLACEHOLDER)),
            students_per_device: s!(r.value_or(field::MAX_USERS, DEFAULT_STUDENTS_PER_DEVICE)),
            standard: CS_STANDARD,
            single_price: money_or_placeholder(r.get(field::PRICE)),
            set_price: money_or_placeholder(r.get(field::PRICE_PER_SET)),
            more_info: s!(r.get(field::PURCHASE_WEBSITE).unwrap_or_default()),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(2048);
        let title = escape_html(&self.title);

        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{title}</title>");
        out.push_str(
            "<style>body{font-family:Helvetica,Arial,sans-serif;max-width:48rem;margin:2rem auto}\
             table{border-collapse:collapse}td,th{border:1px solid #000;padding:.3rem 1rem;text-align:center}</style>\n",
        );
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(out, "<h1>{title}</h1>");

        out.push_str("<ul class=\"features\">\n");
        for f in &self.features {
            let _ = writeln!(out, "  <li>{}</li>", escape_html(f));
        }
        out.push_str("</ul>\n");

        let _ = writeln!(
            out,
            "<h3>Product Summary</h3>\n<p>{}</p>",
            escape_html(&self.summary)
        );

        let _ = writeln!(out, "<p><strong>Grade Level:</strong> {}</p>", escape_html(&self.grade_level));
        let _ = writeln!(
            out,
            "<p><strong>Students Per Device:</strong> {}</p>",
            escape_html(&self.students_per_device)
        );
        let _ = writeln!(
            out,
            "<p><strong>Computer Science Standard(s):</strong><br>{}</p>",
            escape_html(self.standard)
        );

        out.push_str("<table>\n  <tr><th colspan=\"2\">Price</th></tr>\n");
        let _ = writeln!(out, "  <tr><td>Single Unit</td><td>{}</td></tr>", escape_html(&self.single_price));
        let _ = writeln!(
            out,
            "  <tr><td>Classroom Set ({CLASSROOM_SET_SIZE} students)</td><td>{}</td></tr>",
            escape_html(&self.set_price)
        );
        out.push_str("</table>\n");

        let _ = writeln!(
            out,
            "<p><strong>More Information:</strong> <a href=\"{}\">{}</a></p>",
            escape_attr(&self.more_info),
            escape_html(&self.more_info)
        );
        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullets_follow_accessibility_fields() {
        let sheet = FactSheet::from_record(&record! {
            "Name" => "Code-a-pillar Twist",
            "Device Required" => " No",
            "Auditory Accessibility" => "Yes",
            "Visual Accessibility" => "no",
        });
        assert_eq!(
            sheet.features,
            vec!["No Device Required", "No Text/Visual Required", "Touch Required"]
        );
    }

    #[test]
    fn defaults_for_missing_fields() {
        let sheet = FactSheet::from_record(&record! { "Name" => "Bee-Bot", "Price" => "89.95" });
        assert_eq!(sheet.features, vec!["Touch Required"]);
        assert_eq!(sheet.summary, DEFAULT_SUMMARY);
        assert_eq!(sheet.students_per_device, "1 - 2");
        assert_eq!(sheet.single_price, "$89.95");
        assert_eq!(sheet.set_price, "N/A");

        let html = sheet.to_html();
        assert!(html.contains("<h1>Bee-Bot</h1>"));
        assert!(html.contains("Classroom Set (24 students)"));
    }
}
