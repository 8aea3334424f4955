//! Render a shelf label to SVG on stdout.
//!
//! ```sh
//! cargo run -p label-render --example render_label > label.svg
//! ```

use label_designer::populate_defaults;
use label_render::render;
use shared::models::{ProductRecord, TemplateDocument};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut doc = TemplateDocument::new("Shelf label 60x40", 60.0, 40.0);
    doc.include_barcode = true;
    doc.include_price = true;
    doc.include_mrp = true;
    populate_defaults(&mut doc);

    let product = ProductRecord {
        name: "Organic Honey 500g".into(),
        sku: "HNY-500".into(),
        price: 4500,
        mrp: 5500,
        barcode: "8901234567890".into(),
        ..Default::default()
    };

    let output = render(&doc, &product);
    for warning in &output.warnings {
        eprintln!("warning: {:?}", warning);
    }
    println!("{}", output.svg);
}
