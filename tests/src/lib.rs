
use serde::Serialize;
use unjoin::Row;

/// Builds a result set from a JSON array of flat row objects.
pub fn rows(src: serde_json::Value) -> Vec<Row> {
    serde_json::from_value(src).expect("result-set fixtures are arrays of flat objects")
}

/// Lowers mapped entities to JSON for structural comparison.
pub fn to_json(mapped: &impl Serialize) -> serde_json::Value {
    serde_json::to_value(mapped).expect("mapped graphs serialize to JSON")
}
