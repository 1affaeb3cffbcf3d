use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Country, Status};
use crate::store::CountryStore;

/// Replace one country's status, leaving every other field and record
/// untouched, then mirror the collection to the store.
///
/// An existing date is kept even when the status moves away from
/// visited/planned; it simply stops being shown.
pub fn run<S: CountryStore>(
    store: &mut S,
    mut countries: Vec<Country>,
    name: &str,
    new_status: Status,
) -> Result<CmdResult> {
    let idx = helpers::position(&countries, name)?;
    countries[idx].status = new_status;
    helpers::commit(store, &countries)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} is now {}",
        name, new_status
    )));
    result.affected_countries.push(countries[idx].clone());
    Ok(result)
}
