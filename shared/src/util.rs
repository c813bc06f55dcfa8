use std::sync::LazyLock;
use std::sync::atomic::{AtomicU32, Ordering};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Per-process random bytes mixed into every generated ID.
static PROCESS_UNIQUE: LazyLock<[u8; 5]> = LazyLock::new(|| rand::random());

/// Rolling counter, starts at a random offset.
static COUNTER: LazyLock<AtomicU32> =
    LazyLock::new(|| AtomicU32::new(rand::random::<u32>() & 0x00FF_FFFF));

/// Generate an ObjectId-style resource ID (24 lowercase hex chars).
///
/// Layout (12 bytes):
///   - 4 bytes: seconds since the Unix epoch, big-endian
///   - 5 bytes: per-process random
///   - 3 bytes: counter, big-endian, wraps at 2^24
///
/// IDs generated by one process sort by creation second.
pub fn object_id() -> String {
    let secs = (now_millis() / 1000) as u32;
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) & 0x00FF_FFFF;

    let mut bytes = [0u8; 12];
    bytes[..4].copy_from_slice(&secs.to_be_bytes());
    bytes[4..9].copy_from_slice(&*PROCESS_UNIQUE);
    bytes[9..].copy_from_slice(&count.to_be_bytes()[1..]);
    hex::encode(bytes)
}

/// Check whether `s` has the ObjectId shape: exactly 24 hex digits.
pub fn is_object_id(s: &str) -> bool {
    s.len() == 24 && s.bytes().all(|b| b.is_ascii_hexdigit())
}
