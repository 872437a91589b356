//! IdGenerator port - batch id allocation.
//!
//! # Implementations
//! - **UlidGenerator**: ULID built from the injected clock plus random bits.

use crate::domain::ids::BatchId;
use crate::ports::Clock;
use ulid::Ulid;

/// Allocates the id that tags one batch run.
///
/// Called once per `run_batch`; every progress event of that run carries the
/// returned id.
pub trait IdGenerator: Send + Sync {
    fn generate_batch_id(&self) -> BatchId;
}

/// ULID generator whose timestamp half comes from a `Clock`.
///
/// With a `FixedClock` the timestamp part is deterministic while the random
/// part still keeps ids unique. Instants before the Unix epoch clamp to a
/// zero timestamp.
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_batch_id(&self) -> BatchId {
        let timestamp_ms = u64::try_from(self.clock.now().timestamp_millis()).unwrap_or(0);
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        BatchId::from(ulid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn ulid_generator_generates_unique_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let id1 = id_gen.generate_batch_id();
        let id2 = id_gen.generate_batch_id();

        assert_ne!(id1, id2);
    }

    #[test]
    fn ulid_generator_uses_clock_for_timestamp() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_batch_id();
        let id2 = id_gen.generate_batch_id();

        assert_ne!(id1, id2);
        assert_eq!(id1.as_ulid().timestamp_ms(), fixed_time.timestamp_millis() as u64);
        assert_eq!(id2.as_ulid().timestamp_ms(), fixed_time.timestamp_millis() as u64);
    }

    #[test]
    fn ulid_generator_clamps_pre_epoch_clock() {
        let before_epoch = Utc.with_ymd_and_hms(1969, 7, 20, 20, 17, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(before_epoch));

        let id = id_gen.generate_batch_id();

        assert_eq!(id.as_ulid().timestamp_ms(), 0);
    }
}
