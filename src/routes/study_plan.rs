use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::response::{parse_body, required, AppError};
use crate::services::study_plan::{
    self, ExamHorizon, StudyDayPlan, DEFAULT_DAILY_HOURS,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateStudyPlanRequest {
    exam_date: Option<String>,
    subjects: Option<String>,
    daily_hours: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct GenerateStudyPlanResponse {
    plan: Vec<StudyDayPlan>,
    total_days: i64,
}

pub async fn generate_study_plan(
    State(state): State<AppState>,
    payload: Result<Json<GenerateStudyPlanRequest>, JsonRejection>,
) -> Result<Json<GenerateStudyPlanResponse>, AppError> {
    let payload = parse_body(payload)?;
    let (Some(exam_date), Some(subjects)) = (required(payload.exam_date), required(payload.subjects))
    else {
        return Err(AppError::bad_request("Exam date and subjects are required"));
    };
    let daily_hours = payload.daily_hours.unwrap_or(DEFAULT_DAILY_HOURS);

    let horizon = ExamHorizon::resolve(&exam_date, Local::now().naive_local());
    if let ExamHorizon::Defaulted { reason } = &horizon {
        tracing::warn!(%exam_date, error = %reason, "exam date not parsed, planning the fallback week");
    }

    let subject_list = study_plan::parse_subjects(&subjects);
    let mut rng = state.request_rng();
    let plan = study_plan::build_plan(&mut rng, &horizon, &subject_list, daily_hours);
    tracing::debug!(days = plan.len(), subjects = subject_list.len(), "study plan generated");

    Ok(Json(GenerateStudyPlanResponse {
        total_days: horizon.total_days(),
        plan,
    }))
}
