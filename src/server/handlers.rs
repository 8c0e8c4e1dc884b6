// src/server/handlers.rs
// JSON endpoints: prompt → model → formatter → response

use axum::{Form, Json, extract::State};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::formatter;
use crate::prompt::{self, Vitals};
use crate::server::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Single free-text form field shared by most endpoints
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub user_input: String,
}

/// Vitals form posted to /ai-insights
#[derive(Debug, Deserialize)]
pub struct VitalsForm {
    pub heart_rate: String,
    pub blood_pressure: String,
    pub glucose: String,
}

impl From<VitalsForm> for Vitals {
    fn from(form: VitalsForm) -> Self {
        Vitals {
            heart_rate: form.heart_rate,
            blood_pressure: form.blood_pressure,
            glucose: form.glucose,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ResultResponse<T> {
    pub result: T,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct PlanResponse {
    pub plan: String,
}

// ============================================================================
// Generation
// ============================================================================

/// Run a prompt through the model and shape the answer.
///
/// A gateway failure is turned into its marker text by `on_error` and skips
/// the formatter, so the frontend sees the message intact.
async fn generate<T>(
    state: &AppState,
    endpoint: &'static str,
    prompt: String,
    format: impl FnOnce(&str) -> T,
    on_error: impl FnOnce(String) -> T,
) -> T {
    debug!(endpoint, prompt_len = prompt.len(), "sending prompt");
    match state.generator.generate(&prompt).await {
        Ok(text) => format(&text),
        Err(e) => {
            warn!(endpoint, error = %e, "generation failed, returning error text");
            on_error(e.to_display_text())
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model_configured": state.generator.is_configured(),
    }))
}

pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<UserInput>,
) -> Json<ResultResponse<String>> {
    let result = generate(
        &state,
        "predict",
        prompt::diagnosis(&form.user_input),
        formatter::format_diagnosis,
        |e| e,
    )
    .await;
    Json(ResultResponse { result })
}

pub async fn remedies(
    State(state): State<AppState>,
    Form(form): Form<UserInput>,
) -> Json<ResultResponse<String>> {
    let result = generate(
        &state,
        "remedies",
        prompt::remedies(&form.user_input),
        formatter::format_remedies,
        |e| e,
    )
    .await;
    Json(ResultResponse { result })
}

pub async fn chat(
    State(state): State<AppState>,
    Form(form): Form<UserInput>,
) -> Json<ResultResponse<String>> {
    let result = generate(
        &state,
        "chat",
        prompt::chat(&form.user_input),
        formatter::format_chat,
        |e| e,
    )
    .await;
    Json(ResultResponse { result })
}

pub async fn treatment(
    State(state): State<AppState>,
    Form(form): Form<UserInput>,
) -> Json<PlanResponse> {
    let plan = generate(
        &state,
        "treatment",
        prompt::treatment(&form.user_input),
        formatter::format_treatment,
        |e| e,
    )
    .await;
    Json(PlanResponse { plan })
}

pub async fn ai_insights(
    State(state): State<AppState>,
    Form(form): Form<VitalsForm>,
) -> Json<ResultResponse<Vec<String>>> {
    let vitals = Vitals::from(form);
    let result = generate(
        &state,
        "ai-insights",
        prompt::insights(&vitals),
        formatter::format_insights,
        |e| vec![e],
    )
    .await;
    Json(ResultResponse { result })
}

pub async fn tips(State(state): State<AppState>) -> Json<ResultResponse<String>> {
    let result = generate(
        &state,
        "tips",
        prompt::daily_tips(),
        formatter::format_tips,
        |e| e,
    )
    .await;
    Json(ResultResponse { result })
}

pub async fn exercise(
    State(state): State<AppState>,
    Form(form): Form<UserInput>,
) -> Json<ResultResponse<String>> {
    let result = generate(
        &state,
        "exercise",
        prompt::exercise(&form.user_input),
        formatter::format_exercise,
        |e| e,
    )
    .await;
    Json(ResultResponse { result })
}
