use console::Style;
use once_cell::sync::Lazy;

pub static NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static VISITED: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static PLANNED: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static NOT_VISITED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(244).italic());
pub static PHOTO: Lazy<Style> = Lazy::new(|| Style::new().cyan());
