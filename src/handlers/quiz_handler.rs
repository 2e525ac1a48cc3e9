use actix_web::{post, web, HttpResponse};

use crate::{app_state::AppState, errors::AppError, models::dto::GenerateQuizRequest};

#[post("/api/quizzes/generate")]
pub async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .quiz_service
        .generate_quiz(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}
