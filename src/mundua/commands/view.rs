use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Country;

/// The CLI counterpart of the photo modal: hand the full record to the
/// presentation layer, which renders the photo sequence.
pub fn run(countries: Vec<Country>, name: &str) -> Result<CmdResult> {
    let idx = helpers::position(&countries, name)?;
    let country = countries[idx].clone();

    let mut result = CmdResult::default();
    if country.photos.is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no photos yet", name)));
    }
    result.affected_countries.push(country);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MunduaError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::CountryStore;

    #[test]
    fn returns_the_record_with_its_photo_sequence() {
        let fx = StoreFixture::new().with_photos("France", &["a", "b"]);
        let countries = fx.store.load_all().unwrap().unwrap();

        let result = run(countries, "France").unwrap();
        assert_eq!(result.affected_countries[0].photos, ["a", "b"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn mentions_when_there_is_nothing_to_show() {
        let fx = StoreFixture::new().with_country("Spain");
        let countries = fx.store.load_all().unwrap().unwrap();

        let result = run(countries, "Spain").unwrap();
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = run(Vec::new(), "Atlantis").unwrap_err();
        assert!(matches!(err, MunduaError::CountryNotFound(_)));
    }
}
