use crate::commands::{helpers, CmdMessage};
use crate::error::{MunduaError, Result};
use crate::model::Country;
use crate::store::CountryStore;

/// What the bootstrap loader hands back: the current collection plus any
/// diagnostics it produced along the way.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub countries: Vec<Country>,
    pub messages: Vec<CmdMessage>,
}

/// Load the collection from the store, bootstrapping from the seed when the
/// store is empty or unparsable.
///
/// - Saved collection present: use it, the seed is not consulted.
/// - Nothing saved yet: fetch the seed, mirror it back, hold it.
/// - Unparsable slot: discard it, warn, fall through to the seed path.
/// - Seed failure: warn and continue with an empty collection. No retries.
pub fn run<S, F>(store: &mut S, fetch: F) -> Result<LoadOutcome>
where
    S: CountryStore,
    F: FnOnce() -> Result<Vec<Country>>,
{
    match store.load_all() {
        Ok(Some(countries)) => Ok(LoadOutcome {
            countries,
            messages: Vec::new(),
        }),
        Ok(None) => bootstrap(store, fetch, Vec::new()),
        Err(MunduaError::Serialization(e)) => {
            store.clear()?;
            let messages = vec![CmdMessage::warning(format!(
                "Discarded unreadable saved data: {}",
                e
            ))];
            bootstrap(store, fetch, messages)
        }
        Err(e) => Err(e),
    }
}

fn bootstrap<S, F>(store: &mut S, fetch: F, mut messages: Vec<CmdMessage>) -> Result<LoadOutcome>
where
    S: CountryStore,
    F: FnOnce() -> Result<Vec<Country>>,
{
    match fetch() {
        Ok(countries) => {
            helpers::commit(store, &countries)?;
            Ok(LoadOutcome {
                countries,
                messages,
            })
        }
        Err(e) => {
            // The original swallows fetch failures and shows an empty list.
            messages.push(CmdMessage::warning(format!(
                "Could not load seed data: {}",
                e
            )));
            Ok(LoadOutcome {
                countries: Vec::new(),
                messages,
            })
        }
    }
}
