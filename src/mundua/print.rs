use chrono::{Local, NaiveDate};
use colored::Colorize;
use mundua::api::{CmdMessage, MessageLevel};
use mundua::model::{Country, Status};
use mundua::photo;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::styles;

const NAME_WIDTH: usize = 28;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub fn print_countries(countries: &[Country]) {
    if countries.is_empty() {
        println!("No countries found.");
        return;
    }

    for country in countries {
        let name = truncate_to_width(&country.name, NAME_WIDTH);
        let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));

        let status = match country.status {
            Status::Visited => styles::VISITED.apply_to("visited    "),
            Status::Planned => styles::PLANNED.apply_to("planned    "),
            Status::NotVisited => styles::NOT_VISITED.apply_to("not visited"),
        };

        // Stale dates on not-visited countries are kept in the store but
        // never shown, matching the original UI.
        let date = if country.status.accepts_date() {
            country
                .date
                .map(|d| format!("  {}{}", d, relative_suffix(d)))
                .unwrap_or_default()
        } else {
            String::new()
        };

        let photos = if country.photos.is_empty() {
            String::new()
        } else {
            format!(
                "  {}",
                styles::PHOTO.apply_to(format!("▣ {}", country.photos.len()))
            )
        };

        println!(
            "  {}{} {}{}{}",
            styles::NAME.apply_to(name),
            padding,
            status,
            date,
            photos
        );
    }
}

/// The CLI rendition of the photo modal: the record's full photo sequence.
pub fn print_country(country: &Country) {
    println!("{}", styles::NAME.apply_to(&country.name));
    println!("--------------------------------");
    for (i, data_url) in country.photos.iter().enumerate() {
        let (media_type, size) = photo::describe(data_url);
        println!("  {}. {} ({} KB)", i + 1, media_type, size.div_ceil(1024));
    }
}

fn relative_suffix(date: NaiveDate) -> String {
    let days = (Local::now().date_naive() - date).num_days();
    if days <= 0 {
        return String::new();
    }
    let ago = Formatter::new().convert(std::time::Duration::from_secs(days as u64 * 86_400));
    format!(" {}", styles::TIME.apply_to(format!("({})", ago)))
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        out.push(c);
    }
    out
}
