//! Domain identifiers.
//!
//! A `BatchId` tags one run of the orchestrator. ULIDs sort by creation time,
//! so log lines from consecutive runs stay in order when grouped by id.

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BatchId(Ulid);

impl BatchId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for BatchId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for BatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_has_prefix() {
        let id = BatchId::from_ulid(Ulid::new());
        assert!(id.to_string().starts_with("batch-"));
    }

    #[test]
    fn ids_order_by_timestamp() {
        let earlier = BatchId::from(Ulid::from_parts(1_000, 0));
        let later = BatchId::from(Ulid::from_parts(2_000, 0));
        assert!(earlier < later);
    }
}
