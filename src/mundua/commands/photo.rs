use std::path::Path;

use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{MunduaError, Result};
use crate::model::{Country, Status};
use crate::photo::{self, PhotoOptions};
use crate::store::CountryStore;

/// Run the photo pipeline on `file` and attach the result to one country.
/// Only visited countries take photos; the original only renders the upload
/// control on visited rows.
pub fn run<S: CountryStore>(
    store: &mut S,
    mut countries: Vec<Country>,
    name: &str,
    file: &Path,
    opts: &PhotoOptions,
    limit: usize,
) -> Result<CmdResult> {
    let idx = helpers::position(&countries, name)?;
    if countries[idx].status != Status::Visited {
        return Err(MunduaError::Api(format!(
            "Photos can only be added to visited countries ({} is {})",
            name, countries[idx].status
        )));
    }

    let encoded = photo::process(file, opts)?;
    let added = append_photo(&mut countries[idx], encoded, limit);
    helpers::commit(store, &countries)?;

    let mut result = CmdResult::default();
    if added {
        result.add_message(CmdMessage::success(format!(
            "Photo added to {} ({}/{})",
            name,
            countries[idx].photos.len(),
            limit
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "{} already has {} photos; the new photo was dropped",
            name, limit
        )));
    }
    result.affected_countries.push(countries[idx].clone());
    Ok(result)
}

/// Append then truncate to the first `limit` entries. At the cap this drops
/// the incoming photo, not the oldest. Returns whether the photo survived.
pub fn append_photo(country: &mut Country, encoded: String, limit: usize) -> bool {
    let was_full = country.photos.len() >= limit;
    country.photos.push(encoded);
    country.photos.truncate(limit);
    !was_full
}
