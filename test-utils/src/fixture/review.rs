use serde_json::{json, Value};

/// A review create body without `review_text`.
pub fn payload(user_id: i32, business_id: i32, stars: i32) -> Value {
    json!({
        "user_id": user_id,
        "business_id": business_id,
        "stars": stars
    })
}

/// A review create body including `review_text`.
pub fn payload_with_text(user_id: i32, business_id: i32, stars: i32, text: &str) -> Value {
    let mut body = payload(user_id, business_id, stars);
    body["review_text"] = json!(text);
    body
}

/// A review update body with only `stars`.
pub fn update_payload(stars: i32) -> Value {
    json!({ "stars": stars })
}
