//! Minimal SVG writer
//!
//! A plain string-buffer builder; attribute values are escaped, numbers are
//! emitted with a fixed short form so output is byte-stable.

use std::fmt::Write;

/// Escape text for use in SVG content or attribute values
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a coordinate with up to two decimals, trailing zeros stripped
pub fn fmt_num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// SVG document builder
pub struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    /// Open an SVG root sized in physical millimeters with a pixel viewBox
    pub fn new(width_mm: f64, height_mm: f64, width_px: f64, height_px: f64) -> Self {
        let mut buf = String::with_capacity(4096);
        let _ = write!(
            buf,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}mm\" height=\"{}mm\" viewBox=\"0 0 {} {}\">",
            fmt_num(width_mm),
            fmt_num(height_mm),
            fmt_num(width_px),
            fmt_num(height_px),
        );
        Self { buf }
    }

    /// Open a group with raw attributes (already escaped by the caller)
    pub fn open_group(&mut self, attrs: &str) -> &mut Self {
        let _ = write!(self.buf, "<g {}>", attrs);
        self
    }

    pub fn close_group(&mut self) -> &mut Self {
        self.buf.push_str("</g>");
        self
    }

    /// Emit a rect; `extra` carries fill/stroke attributes
    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, extra: &str) -> &mut Self {
        let _ = write!(
            self.buf,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}{}/>",
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height),
            if extra.is_empty() { "" } else { " " },
            extra,
        );
        self
    }

    /// Emit a text node; content is escaped here
    pub fn text(&mut self, x: f64, y: f64, attrs: &str, content: &str) -> &mut Self {
        let _ = write!(
            self.buf,
            "<text x=\"{}\" y=\"{}\"{}{}>{}</text>",
            fmt_num(x),
            fmt_num(y),
            if attrs.is_empty() { "" } else { " " },
            attrs,
            escape_xml(content),
        );
        self
    }

    /// Emit an image reference
    pub fn image(&mut self, x: f64, y: f64, width: f64, height: f64, href: &str) -> &mut Self {
        let _ = write!(
            self.buf,
            "<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\" preserveAspectRatio=\"xMidYMid meet\"/>",
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height),
            escape_xml(href),
        );
        self
    }

    /// Close the root and return the markup
    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a<b>&\"c'"), "a&lt;b&gt;&amp;&quot;c&apos;");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(10.5), "10.5");
        assert_eq!(fmt_num(10.256), "10.26");
        assert_eq!(fmt_num(-0.001), "0");
    }

    #[test]
    fn test_root_dimensions() {
        let svg = SvgWriter::new(150.0, 100.0, 566.93, 377.95).finish();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"150mm\" height=\"100mm\""));
        assert!(svg.contains("viewBox=\"0 0 566.93 377.95\""));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_text_escapes_content() {
        let mut w = SvgWriter::new(10.0, 10.0, 37.8, 37.8);
        w.text(0.0, 0.0, "", "<tags> & такое");
        let svg = w.finish();
        assert!(svg.contains("&lt;tags&gt; &amp; такое"));
    }
}
