//! Test helpers for writing decision requests into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Instant used to pin `--now` in CLI tests.
pub(super) const PINNED_NOW: &str = "2024-05-01T12:00:00Z";

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn temp_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// A request from Seoul City Hall with one nearby quiet venue, one venue in
/// Gangnam and one venue without tables.
pub(super) fn sample_request() -> Value {
    json!({
        "requester": { "latitude": 37.5665, "longitude": 126.9780 },
        "locations": [
            {
                "id": 1,
                "latitude": 37.5670,
                "longitude": 126.9785,
                "rating": 4.5,
                "table_total": 10,
                "table_occupied": 3
            },
            {
                "id": 2,
                "latitude": 37.4979,
                "longitude": 127.0276,
                "rating": 5.0,
                "table_total": 10,
                "table_occupied": 0
            },
            {
                "id": 3,
                "latitude": 37.5665,
                "longitude": 126.9780,
                "table_total": 0,
                "table_occupied": 0,
                "last_event_at": "2024-05-01 11:58:00"
            }
        ]
    })
}

pub(super) fn request_with_latitude(latitude: f64) -> Value {
    json!({
        "requester": { "latitude": 37.5665, "longitude": 126.9780 },
        "locations": [
            {
                "id": 9,
                "latitude": latitude,
                "longitude": 126.9785,
                "table_total": 10,
                "table_occupied": 1
            }
        ]
    })
}

pub(super) fn to_bytes(value: &Value) -> Vec<u8> {
    serde_json::to_vec_pretty(value).expect("serialise request")
}
