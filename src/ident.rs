use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

const SUFFIX_LEN: usize = 7;

/// Mints an activity identifier: millisecond timestamp plus a random
/// alphanumeric suffix, unique with overwhelming probability within a
/// session and across reloads. No counter state is persisted.
pub fn generate_activity_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: String = rand::thread_rng()
        .sample_iter(Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("act_{millis}_{suffix}")
}
