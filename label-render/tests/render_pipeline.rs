// label-render/tests/render_pipeline.rs
// Full pipeline scenarios: blank document -> defaults -> render.

use label_designer::populate_defaults;
use label_render::{RenderWarning, render};
use pretty_assertions::assert_eq;
use shared::models::{ProductRecord, TemplateDocument};

fn product() -> ProductRecord {
    ProductRecord {
        name: "Organic Honey 500g".into(),
        sku: "HNY-500".into(),
        price: 4500,
        mrp: 5500,
        barcode: "8901234567890".into(),
        ..Default::default()
    }
}

#[test]
fn test_render_is_idempotent() {
    let mut doc = TemplateDocument::new("Idem 150x100", 150.0, 100.0);
    doc.include_barcode = true;
    doc.include_price = true;
    doc.include_mrp = true;
    populate_defaults(&mut doc);
    let p = product();

    let first = render(&doc, &p);
    let second = render(&doc, &p);
    assert_eq!(first.svg, second.svg);
    assert_eq!(first.warnings, second.warnings);
}

#[test]
fn test_end_to_end_blank_document() {
    // 1. Blank 150mm x 100mm document with the retail toggles on
    let mut doc = TemplateDocument::new("Retail shelf label", 150.0, 100.0);
    doc.include_barcode = true;
    doc.include_price = true;
    doc.include_mrp = true;

    // 2. Auto-populate: exactly four elements, all inside the page
    populate_defaults(&mut doc);
    assert_eq!(doc.elements.len(), 4);
    let (w, h) = (doc.width_px(), doc.height_px());
    for el in &doc.elements {
        let g = &el.geometry;
        assert!(g.x >= 0.0 && g.x + g.width <= w);
        assert!(g.y >= 0.0 && g.y + g.height <= h);
    }

    // 3. Render against a well-formed 13-digit barcode: no encode errors
    let output = render(&doc, &product());
    assert!(output.warnings.is_empty(), "unexpected warnings: {:?}", output.warnings);

    // 4. Substituted values appear in the markup
    assert!(output.svg.contains("Organic Honey 500g"));
    assert!(output.svg.contains("€45.00"));
    assert!(output.svg.contains("€55.00"));
    assert!(output.svg.contains("Save €10.00"));

    // 5. Physical sizing is carried on the root
    assert!(output.svg.contains("width=\"150mm\""));
    assert!(output.svg.contains("height=\"100mm\""));
}

#[test]
fn test_sku_placeholder_substitution() {
    let mut doc = TemplateDocument::new("Sku 100x50", 100.0, 50.0);
    doc.elements.push(shared::models::Element::new(
        1,
        shared::models::ElementKind::Sku,
        5.0,
        5.0,
        100.0,
        24.0,
        "{{product.sku}}",
    ));

    let p = ProductRecord {
        sku: "SKU123".into(),
        ..product()
    };
    assert!(render(&doc, &p).svg.contains("SKU123"));
}

#[test]
fn test_bad_barcode_reports_but_renders_rest() {
    let mut doc = TemplateDocument::new("Degraded 100x80", 100.0, 80.0);
    doc.include_barcode = true;
    populate_defaults(&mut doc);

    // Control characters are outside CODE128 set B
    let p = ProductRecord {
        barcode: "bad\u{0007}data".into(),
        ..product()
    };
    let output = render(&doc, &p);
    assert_eq!(output.warnings.len(), 1);
    let RenderWarning::Barcode { element_id, .. } = &output.warnings[0];
    assert!(doc.element(*element_id).is_some());
    // The name element still made it into the output
    assert!(output.svg.contains("Organic Honey 500g"));
}
