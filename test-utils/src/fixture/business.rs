use serde_json::{json, Value};

/// A complete business create/update body.
pub fn payload() -> Value {
    json!({
        "owner_id": 1,
        "name": "A",
        "street_address": "1 Main",
        "city": "X",
        "state": "CA",
        "zip_code": 90001
    })
}

/// A complete business body for the given owner.
pub fn payload_for_owner(owner_id: i32) -> Value {
    let mut body = payload();
    body["owner_id"] = json!(owner_id);
    body
}

/// A business body with one attribute removed.
pub fn payload_without(attribute: &str) -> Value {
    let mut body = payload();
    if let Some(map) = body.as_object_mut() {
        map.remove(attribute);
    }
    body
}
