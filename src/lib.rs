/*!
Record types for the FreeAgent v2 accounting API.

Every resource is a plain, immutable value that maps one-to-one onto the JSON the API
sends and accepts. Root records match the outer `{"contacts": [...]}` /
`{"contact": {...}}` shapes. The HTTP side (auth, paging, retries) lives elsewhere and
only produces or consumes these values.

```rust,ignore
use freeagent_models::{codec, freeagent::ContactsRoot};

let root: ContactsRoot = codec::from_json(&body)?;
for contact in root.contacts {
    println!("{:?}", contact.organisation_name);
}
```
*/

#[macro_use]
mod wire_enum;

pub mod codec;
pub mod config;
pub mod dates;
pub mod error;
pub mod freeagent;

pub use error::{Error, Result};
