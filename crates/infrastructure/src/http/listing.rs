use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

/// List endpoints answer either with a bare array or with `{"data": [...]}`.
///
/// The shape is picked from the first token so a bad record reports its own
/// serde error (field name and position) instead of a generic mismatch.
pub(crate) fn parse_listing<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, serde_json::Error> {
    if body.trim_start().starts_with('{') {
        serde_json::from_str::<Envelope<T>>(body).map(|envelope| envelope.data)
    } else {
        serde_json::from_str(body)
    }
}
