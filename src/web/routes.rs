use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    Form,
};
use serde::Deserialize;
use serde_json::json;

use super::session::Session;
use super::AppState;
use crate::error::ClockError;
use crate::utils::logging::log_request;

const INDEX_TEMPLATE: &str = include_str!("../../static/index.html");
const DATA_PLACEHOLDER: &str = "__CLOCK_DATA__";

#[derive(Debug, Deserialize)]
pub struct SetTimezoneForm {
    pub timezone: Option<String>,
}

impl IntoResponse for ClockError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "status": "error", "message": self.to_string() }))).into_response()
    }
}

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ClockError> {
    let session = Session::from_headers(&headers);
    log_request("/", &session.id, None);

    let page = state.clock.page(&session.id).await?;
    // Keep the embedded JSON from closing the script tag
    let data = serde_json::to_string(&page)?.replace("</", "<\\/");
    let html = INDEX_TEMPLATE.replace(DATA_PLACEHOLDER, &data);

    Ok(session.attach(Html(html).into_response()))
}

pub async fn time_data(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, ClockError> {
    let session = Session::from_headers(&headers);
    log_request("/time/", &session.id, None);

    let snapshot = state.clock.snapshot(&session.id).await?;
    Ok(session.attach(Json(snapshot).into_response()))
}

pub async fn set_timezone(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Option<Form<SetTimezoneForm>>,
) -> Result<Response, ClockError> {
    let session = Session::from_headers(&headers);
    // A bare POST carries no field at all and falls back to UTC
    let timezone = form.and_then(|Form(form)| form.timezone);
    log_request("/set-timezone/", &session.id, timezone.as_deref());

    let result = state
        .clock
        .update_preference(&session.id, timezone.as_deref())
        .await?;
    Ok(session.attach(Json(result).into_response()))
}

pub async fn timezones(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.clock.available_timezones())
}
