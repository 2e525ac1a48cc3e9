use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::GeneratePlanRequest};

#[post("/api/plans/generate")]
pub async fn generate_plan(
    state: web::Data<AppState>,
    request: web::Json<GeneratePlanRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .study_plan_service
        .generate_plan(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
