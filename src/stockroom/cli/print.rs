use super::styles::{HEADER, ID, RULE};
use colored::Colorize;
use stockroom::api::{CmdMessage, MessageLevel};
use stockroom::model::Product;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 5;
const NAME_WIDTH: usize = 35;
const CATEGORY_WIDTH: usize = 15;
const QUANTITY_WIDTH: usize = 10;
const PRICE_WIDTH: usize = 10;
const SEPARATOR: &str = " | ";
const RULE_WIDTH: usize = 85;

pub(super) fn format_message(message: &CmdMessage) -> String {
    match message.level {
        MessageLevel::Info => message.content.dimmed().to_string(),
        MessageLevel::Success => message.content.green().to_string(),
        MessageLevel::Warning => message.content.yellow().to_string(),
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        println!("{}", format_message(message));
    }
}

/// Renders products as the fixed-width ID | Name | Category | Quantity | Price table.
pub(super) fn render_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let header = [
        fit("ID", ID_WIDTH),
        fit("Name", NAME_WIDTH),
        fit("Category", CATEGORY_WIDTH),
        fit("Quantity", QUANTITY_WIDTH),
        fit("Price", PRICE_WIDTH),
    ]
    .join(SEPARATOR);

    let mut out = String::new();
    out.push_str(&format!("{}\n", HEADER.apply_to(header.trim_end())));
    out.push_str(&format!("{}\n", RULE.apply_to("=".repeat(RULE_WIDTH))));

    for product in products {
        let row = [
            ID.apply_to(fit(&product.id.to_string(), ID_WIDTH)).to_string(),
            fit(&product.name, NAME_WIDTH),
            fit(&product.category, CATEGORY_WIDTH),
            fit(&product.quantity.to_string(), QUANTITY_WIDTH),
            fit(&format!("{:.2}", product.price), PRICE_WIDTH),
        ]
        .join(SEPARATOR);
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out
}

pub(super) fn render_product(product: &Product) -> String {
    format!(
        "{} {}\n  Category: {}\n  Quantity: {}\n  Price:    {:.2}\n",
        ID.apply_to(format!("#{}", product.id)),
        HEADER.apply_to(&product.name),
        product.category,
        product.quantity,
        product.price
    )
}

pub(super) fn render_categories(categories: &[String]) -> String {
    let mut out = String::from("Available categories:\n");
    for category in categories {
        out.push_str(&format!("- {}\n", category));
    }
    out
}

/// Truncates to `width` display columns (with an ellipsis) and pads with spaces.
fn fit(s: &str, width: usize) -> String {
    let shown = if s.width() > width {
        truncate_to_width(s, width)
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(shown.width());
    format!("{}{}", shown, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
