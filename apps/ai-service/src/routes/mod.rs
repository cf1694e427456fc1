pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes/parse",
            post(resume::handle_parse_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/v1/resumes/suggest-skills",
            post(resume::handle_suggest_skills),
        )
        .route("/api/v1/resumes/summary", post(resume::handle_summary))
        // Matching API
        .route("/api/v1/matching/score", post(matching::handle_match_score))
        .route(
            "/api/v1/matching/analyze",
            post(matching::handle_job_analysis),
        )
        // Assessment API
        .route(
            "/api/v1/assessment/quiz",
            post(assessment::handle_generate_quiz),
        )
        .with_state(state)
}
