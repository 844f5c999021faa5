//! Serde support for sessions (feature-gated)
//!
//! Sessions serialize as `{"value": <subject>, "valid": <verdict>}`, which
//! makes them easy to log or return from an API.
//!
//! # Example
//!
//! ```rust,ignore
//! use sentinel::{is_number, Session};
//!
//! let session = Session::new(36, is_number());
//! let json = serde_json::to_string(&session).unwrap();
//! assert_eq!(json, r#"{"value":36,"valid":true}"#);
//! ```

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::engine::Mode;
use crate::session::Session;

impl Serialize for Session {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Session", 2)?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("valid", &self.is_valid())?;
        state.end()
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
