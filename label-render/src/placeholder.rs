//! Placeholder substitution
//!
//! Grammar: `{{product.<identifier>}}` - case-sensitive identifier, no
//! nesting, no escaping. Substitution is best-effort: tokens that do not
//! resolve against the product record stay in the output as literal text.

use shared::models::ProductRecord;
use shared::util::format_cents;

const TOKEN_OPEN: &str = "{{product.";
const TOKEN_CLOSE: &str = "}}";

/// Resolve every `{{product.<field>}}` token in `content` against the
/// product record
///
/// Currency fields (`price`, `mrp`) come out with a glyph prefix and two
/// decimals. Unknown or absent fields pass through as the literal matched
/// text; this never fails.
pub fn resolve_content(content: &str, product: &ProductRecord) -> String {
    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(open) = rest.find(TOKEN_OPEN) {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + TOKEN_OPEN.len()..];

        match after_open.find(TOKEN_CLOSE) {
            Some(close) if is_identifier(&after_open[..close]) => {
                let field = &after_open[..close];
                match resolve_field(field, product) {
                    Some(value) => out.push_str(&value),
                    // Unresolvable: keep the whole matched token
                    None => {
                        out.push_str(TOKEN_OPEN);
                        out.push_str(field);
                        out.push_str(TOKEN_CLOSE);
                    }
                }
                rest = &after_open[close + TOKEN_CLOSE.len()..];
            }
            _ => {
                // Malformed token: emit the opener literally and move on
                out.push_str(TOKEN_OPEN);
                rest = after_open;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn resolve_field(field: &str, product: &ProductRecord) -> Option<String> {
    match field {
        "name" => Some(product.name.clone()),
        "sku" => Some(product.sku.clone()),
        "barcode" => Some(product.barcode.clone()),
        "price" => Some(format_cents(product.price)),
        "mrp" => Some(format_cents(product.mrp)),
        "description" => product.description.clone(),
        "manufacturingDate" => product.manufacturing_date.clone(),
        "expiryDate" => product.expiry_date.clone(),
        other => product.extra_field(other),
    }
}
