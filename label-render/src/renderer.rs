//! Template -> SVG rendering
//!
//! Reads the whole document plus one product record and produces printable
//! markup. Document-level styles act as page defaults; element styles win
//! where set. Paint order is ascending z-index, insertion order on ties.

use shared::models::{
    BorderStyle, Element, ElementKind, FontStyle, FontWeight, ProductRecord, TemplateDocument,
    TextAlign, TextDecoration,
};
use shared::util::format_cents;
use tracing::{instrument, warn};

use crate::barcode::{Symbology, encode};
use crate::error::RenderWarning;
use crate::placeholder::resolve_content;
use crate::svg::{SvgWriter, escape_xml, fmt_num};

/// Rendered label markup plus per-element degradations
#[derive(Debug, Clone, PartialEq)]
pub struct LabelOutput {
    /// Camera-ready SVG sized `width_mm x height_mm`
    pub svg: String,
    /// Non-fatal degradations encountered while rendering
    pub warnings: Vec<RenderWarning>,
}

/// Render a template against a product record
///
/// Deterministic and side-effect free: identical inputs produce
/// byte-identical markup. Barcode encode failures degrade the affected
/// element to its empty bounding box and are reported in the output.
#[instrument(skip_all, fields(template = %doc.name, elements = doc.elements.len()))]
pub fn render(doc: &TemplateDocument, product: &ProductRecord) -> LabelOutput {
    let (width_px, height_px) = (doc.width_px(), doc.height_px());
    let mut svg = SvgWriter::new(doc.width_mm, doc.height_mm, width_px, height_px);
    let mut warnings = Vec::new();

    // Page background and border
    svg.rect(
        0.0,
        0.0,
        width_px,
        height_px,
        &format!("fill=\"{}\"", escape_xml(&doc.background_color)),
    );
    if let Some(stroke) = stroke_attrs(doc.border_style, doc.border_width, &doc.text_color) {
        let inset = doc.border_width / 2.0;
        svg.rect(
            inset,
            inset,
            width_px - doc.border_width,
            height_px - doc.border_width,
            &format!("fill=\"none\" {}", stroke),
        );
    }

    // Ascending z-index; sort_by_key is stable, so insertion order breaks ties
    let mut order: Vec<usize> = (0..doc.elements.len()).collect();
    order.sort_by_key(|&i| doc.elements[i].style.z_index);

    for &i in &order {
        paint_element(&mut svg, &doc.elements[i], doc, product, &mut warnings);
    }

    paint_savings(&mut svg, doc, product);

    LabelOutput {
        svg: svg.finish(),
        warnings,
    }
}

fn paint_element(
    svg: &mut SvgWriter,
    element: &Element,
    doc: &TemplateDocument,
    product: &ProductRecord,
    warnings: &mut Vec<RenderWarning>,
) {
    let g = &element.geometry;
    let style = &element.style;

    let mut group_attrs = String::new();
    if g.rotation_degrees != 0.0 {
        group_attrs.push_str(&format!(
            "transform=\"rotate({} {} {})\"",
            fmt_num(g.rotation_degrees),
            fmt_num(g.x + g.width / 2.0),
            fmt_num(g.y + g.height / 2.0),
        ));
    }
    if style.opacity < 1.0 {
        if !group_attrs.is_empty() {
            group_attrs.push(' ');
        }
        group_attrs.push_str(&format!("opacity=\"{}\"", fmt_num(style.opacity.max(0.0))));
    }
    let grouped = !group_attrs.is_empty();
    if grouped {
        svg.open_group(&group_attrs);
    }

    // Box fill and border, under the content
    if let Some(background) = &style.background_color {
        svg.rect(
            g.x,
            g.y,
            g.width,
            g.height,
            &format!("fill=\"{}\"", escape_xml(background)),
        );
    }
    if let Some(stroke) = stroke_attrs(style.border_style, style.border_width, &style.border_color)
    {
        svg.rect(g.x, g.y, g.width, g.height, &format!("fill=\"none\" {}", stroke));
    }

    match element.kind {
        ElementKind::Text | ElementKind::Price | ElementKind::Mrp | ElementKind::Sku => {
            let content = resolve_content(&element.content, product);
            if !content.is_empty() {
                paint_text(svg, element, doc, &content);
            }
        }
        ElementKind::Barcode => {
            let data = resolve_content(&element.content, product);
            match encode(&data, Symbology::Code128) {
                Ok(pattern) => {
                    let color = style.color.as_deref().unwrap_or(&doc.text_color);
                    let fill = format!("fill=\"{}\"", escape_xml(color));
                    for (x, y, w, h) in pattern.bars(g.x, g.y, g.width, g.height) {
                        svg.rect(x, y, w, h, &fill);
                    }
                }
                Err(error) => {
                    // Degrade to the empty bounding box, keep rendering
                    warn!(element_id = element.id, %error, "barcode encode failed");
                    warnings.push(RenderWarning::Barcode {
                        element_id: element.id,
                        error,
                    });
                }
            }
        }
        ElementKind::Image => {
            if element.content.is_empty() {
                // No source yet: a light placeholder frame
                svg.rect(
                    g.x,
                    g.y,
                    g.width,
                    g.height,
                    "fill=\"none\" stroke=\"#999999\" stroke-width=\"1\" stroke-dasharray=\"4 2\"",
                );
            } else {
                svg.image(g.x, g.y, g.width, g.height, &element.content);
            }
        }
    }

    if grouped {
        svg.close_group();
    }
}

fn paint_text(svg: &mut SvgWriter, element: &Element, doc: &TemplateDocument, content: &str) {
    let g = &element.geometry;
    let style = &element.style;

    let font_size = style.font_size.unwrap_or(doc.default_font_size);
    let color = style.color.as_deref().unwrap_or(&doc.text_color);

    let (anchor, text_x) = match style.text_align {
        TextAlign::Left => ("start", g.x),
        TextAlign::Center => ("middle", g.x + g.width / 2.0),
        TextAlign::Right => ("end", g.x + g.width),
    };

    let mut attrs = format!(
        "font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\" dominant-baseline=\"middle\"",
        fmt_num(font_size),
        escape_xml(color),
        anchor,
    );
    if style.font_weight == FontWeight::Bold {
        attrs.push_str(" font-weight=\"bold\"");
    }
    if style.font_style == FontStyle::Italic {
        attrs.push_str(" font-style=\"italic\"");
    }
    if style.text_decoration == TextDecoration::Underline {
        attrs.push_str(" text-decoration=\"underline\"");
    }

    svg.text(text_x, g.y + g.height / 2.0, &attrs, content);
}

/// Derived savings line: `mrp - price`, painted beneath the MRP element
///
/// Only when the document includes MRP, both the MRP and price elements are
/// present, and there is an actual saving. Never stored in the document.
fn paint_savings(svg: &mut SvgWriter, doc: &TemplateDocument, product: &ProductRecord) {
    if !doc.include_mrp || product.mrp <= product.price {
        return;
    }
    let mrp_el = doc.elements.iter().find(|e| e.kind == ElementKind::Mrp);
    let has_price = doc.elements.iter().any(|e| e.kind == ElementKind::Price);
    let Some(mrp_el) = mrp_el else { return };
    if !has_price {
        return;
    }

    let g = &mrp_el.geometry;
    let font_size = doc.default_font_size;
    let attrs = format!(
        "font-size=\"{}\" fill=\"{}\" text-anchor=\"start\" dominant-baseline=\"middle\"",
        fmt_num(font_size),
        escape_xml(&doc.text_color),
    );
    svg.text(
        g.x,
        g.y + g.height + font_size / 2.0 + 2.0,
        &attrs,
        &format!("Save {}", format_cents(product.mrp - product.price)),
    );
}

fn stroke_attrs(style: BorderStyle, width: f64, color: &str) -> Option<String> {
    if style == BorderStyle::None || width <= 0.0 {
        return None;
    }
    let mut attrs = format!(
        "stroke=\"{}\" stroke-width=\"{}\"",
        escape_xml(color),
        fmt_num(width)
    );
    match style {
        BorderStyle::Dashed => attrs.push_str(" stroke-dasharray=\"6 3\""),
        BorderStyle::Dotted => attrs.push_str(" stroke-dasharray=\"2 2\""),
        BorderStyle::Solid | BorderStyle::None => {}
    }
    Some(attrs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Element;

    fn product() -> ProductRecord {
        ProductRecord {
            name: "Green Tea 250g".into(),
            sku: "SKU123".into(),
            price: 4500,
            mrp: 5500,
            barcode: "8901234567890".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_paint_order_is_stable_on_equal_z() {
        let mut doc = TemplateDocument::new("Z 100x50", 100.0, 50.0);
        let mut a = Element::new(1, ElementKind::Text, 0.0, 0.0, 60.0, 20.0, "first");
        a.style.z_index = 1;
        let mut b = Element::new(2, ElementKind::Text, 0.0, 0.0, 60.0, 20.0, "second");
        b.style.z_index = 1;
        doc.elements = vec![a, b];

        let svg = render(&doc, &product()).svg;
        let first = svg.find("first").unwrap();
        let second = svg.find("second").unwrap();
        assert!(first < second, "equal z must paint in insertion order");
    }

    #[test]
    fn test_element_style_overrides_document_default() {
        let mut doc = TemplateDocument::new("Style 100x50", 100.0, 50.0);
        doc.text_color = "#222222".to_string();
        let mut styled = Element::new(1, ElementKind::Text, 0.0, 0.0, 60.0, 20.0, "styled");
        styled.style.color = Some("#ff0000".to_string());
        styled.style.font_size = Some(20.0);
        let plain = Element::new(2, ElementKind::Text, 0.0, 25.0, 60.0, 20.0, "plain");
        doc.elements = vec![styled, plain];

        let svg = render(&doc, &product()).svg;
        assert!(svg.contains("fill=\"#ff0000\""));
        assert!(svg.contains("font-size=\"20\""));
        // The plain element inherits the document text color and size
        assert!(svg.contains("fill=\"#222222\""));
        assert!(svg.contains("font-size=\"12\""));
    }

    #[test]
    fn test_rotation_emits_center_transform() {
        let mut doc = TemplateDocument::new("Rot 100x50", 100.0, 50.0);
        let mut el = Element::new(1, ElementKind::Text, 10.0, 10.0, 40.0, 20.0, "tilted");
        el.geometry.rotation_degrees = 90.0;
        doc.elements = vec![el];

        let svg = render(&doc, &product()).svg;
        assert!(svg.contains("transform=\"rotate(90 30 20)\""));
    }

    #[test]
    fn test_barcode_failure_degrades_single_element() {
        let mut doc = TemplateDocument::new("Bad barcode 100x50", 100.0, 50.0);
        doc.elements = vec![
            Element::new(1, ElementKind::Barcode, 0.0, 0.0, 120.0, 60.0, ""),
            Element::new(2, ElementKind::Text, 0.0, 70.0, 60.0, 20.0, "still here"),
        ];

        let output = render(&doc, &product());
        assert_eq!(output.warnings.len(), 1);
        assert!(matches!(
            output.warnings[0],
            RenderWarning::Barcode { element_id: 1, .. }
        ));
        assert!(output.svg.contains("still here"));
    }

    #[test]
    fn test_savings_line() {
        let mut doc = TemplateDocument::new("Savings 150x100", 150.0, 100.0);
        doc.include_mrp = true;
        doc.elements = vec![
            Element::new(1, ElementKind::Price, 10.0, 10.0, 100.0, 24.0, "{{product.price}}"),
            Element::new(2, ElementKind::Mrp, 10.0, 40.0, 100.0, 24.0, "{{product.mrp}}"),
        ];

        let p = ProductRecord {
            price: 4500,
            mrp: 5500,
            ..product()
        };
        let svg = render(&doc, &p).svg;
        assert!(svg.contains("Save €10.00"));

        // No saving when mrp <= price
        let p_even = ProductRecord {
            mrp: 4500,
            ..p.clone()
        };
        assert!(!render(&doc, &p_even).svg.contains("Save"));

        // No savings line without the price element
        let mut doc_no_price = doc.clone();
        doc_no_price.elements.remove(0);
        assert!(!render(&doc_no_price, &p).svg.contains("Save"));
    }
}
