/// Landing text pointing clients at the API's entry collection.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing text", body = String, content_type = "text/plain")
    ),
)]
pub async fn index() -> &'static str {
    "Please navigate to /businesses to use this API"
}
