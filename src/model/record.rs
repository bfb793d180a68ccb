use crate::api::Endpoint;
use serde::de::DeserializeOwned;

pub type RecordId = i64;

/// A record served by one of the collection endpoints.
pub trait Record: DeserializeOwned + Clone + PartialEq + 'static {
    /// Collection endpoint the records are listed from.
    const ENDPOINT: Endpoint;
    /// Plural noun used in the empty placeholder and in logs.
    const NOUN: &'static str;
    /// Noun shown while the collection loads.
    const LOADING_NOUN: &'static str = Self::NOUN;

    fn record_id(&self) -> RecordId;
}

/// Replaces the record with the same id in place, keeping order.
///
/// Returns `false` when no record matched.
pub fn replace_by_id<T: Record>(records: &mut [T], updated: T) -> bool {
    match records
        .iter_mut()
        .find(|record| record.record_id() == updated.record_id())
    {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}
