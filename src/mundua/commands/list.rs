use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Country;

pub fn run(countries: Vec<Country>, query: Option<&str>) -> Result<CmdResult> {
    let listed = match query {
        Some(q) => filter_countries(countries, q),
        None => countries,
    };
    Ok(CmdResult::default().with_listed_countries(listed))
}

/// Case-insensitive substring match on the name, original order preserved.
/// Recomputed from scratch on every call; the collection is small.
pub fn filter_countries(countries: Vec<Country>, query: &str) -> Vec<Country> {
    let query = query.to_lowercase();
    countries
        .into_iter()
        .filter(|c| c.name.to_lowercase().contains(&query))
        .collect()
}
