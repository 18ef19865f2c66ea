use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static RULE: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static ID: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static MENU_TITLE: Lazy<Style> = Lazy::new(|| Style::new().cyan().bold());
