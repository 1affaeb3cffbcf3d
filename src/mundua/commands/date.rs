use chrono::NaiveDate;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{MunduaError, Result};
use crate::model::Country;
use crate::store::CountryStore;

/// Set the trip date on one country. Only visited and planned countries
/// take a date; the original never renders the date input otherwise.
pub fn run<S: CountryStore>(
    store: &mut S,
    mut countries: Vec<Country>,
    name: &str,
    date: NaiveDate,
) -> Result<CmdResult> {
    let idx = helpers::position(&countries, name)?;
    if !countries[idx].status.accepts_date() {
        return Err(MunduaError::Api(format!(
            "A date can only be set on visited or planned countries ({} is {})",
            name, countries[idx].status
        )));
    }

    countries[idx].date = Some(date);
    helpers::commit(store, &countries)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{}: date set to {}", name, date)));
    result.affected_countries.push(countries[idx].clone());
    Ok(result)
}
