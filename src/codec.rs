//! JSON entry points for decoding API responses into records and encoding request bodies.
//!
//! Errors carry the short type name of the record and the JSON path of the failing
//! field, so a caller can act on them without looking at the raw payload.

use crate::error::{Error, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use tracing::{debug, error};

static MODULE_PATH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z_][a-z0-9_]*::").expect("valid module path pattern"));

/// `freeagent_models::freeagent::contact::Contact` -> `Contact`,
/// `alloc::vec::Vec<...::Contact>` -> `Vec<Contact>`.
pub fn resource_name<T: ?Sized>() -> String {
    MODULE_PATH
        .replace_all(std::any::type_name::<T>(), "")
        .into_owned()
}

/// Decodes a JSON document. Unknown keys are ignored.
pub fn from_json<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    debug!("Decoding {} from {} bytes", resource_name::<T>(), text.len());
    decode(serde_json::de::StrRead::new(text), || text.to_string())
}

pub fn from_slice<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    debug!("Decoding {} from {} bytes", resource_name::<T>(), bytes.len());
    decode(serde_json::de::SliceRead::new(bytes), || {
        String::from_utf8_lossy(bytes).into_owned()
    })
}

/// Decodes an already parsed JSON value, e.g. one element of a larger document.
pub fn from_value<T>(value: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_path_to_error::deserialize(&value).map_err(|e| {
        let path = e.path().to_string();
        decode_error::<T>(path, e.into_inner(), &value.to_string())
    })
}

pub fn to_json<T>(record: &T) -> Result<String>
where
    T: Serialize,
{
    debug!("Encoding {}", resource_name::<T>());
    serde_json::to_string(record).map_err(encode_error::<T>)
}

pub fn to_json_pretty<T>(record: &T) -> Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(record).map_err(encode_error::<T>)
}

pub fn to_value<T>(record: &T) -> Result<serde_json::Value>
where
    T: Serialize,
{
    serde_json::to_value(record).map_err(encode_error::<T>)
}

fn decode<'de, R, T>(read: R, raw: impl Fn() -> String) -> Result<T>
where
    R: serde_json::de::Read<'de>,
    T: Deserialize<'de>,
{
    let mut deserializer = serde_json::Deserializer::new(read);
    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        decode_error::<T>(path, e.into_inner(), &raw())
    })?;
    deserializer
        .end()
        .map_err(|e| decode_error::<T>(".".to_string(), e, &raw()))?;

    Ok(value)
}

fn decode_error<T>(path: String, source: serde_json::Error, text: &str) -> Error {
    let resource = resource_name::<T>();
    error!("Failed to decode {} at {}: {:?}", resource, path, text);
    Error::Decode {
        resource,
        path,
        source,
    }
}

fn encode_error<T>(source: serde_json::Error) -> Error {
    Error::Encode {
        resource: resource_name::<T>(),
        source,
    }
}
