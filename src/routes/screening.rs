use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{Evaluator, ScreeningError};
use crate::models::{EvaluateRequest, EvaluateResponse, HealthResponse, RolesResponse, ErrorResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Evaluator,
    pub max_resume_chars: usize,
}

/// Configure all screening routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/roles", web::get().to(list_roles))
        .route("/roles/{role_name}", web::get().to(get_role))
        .route("/evaluate", web::post().to(evaluate));
}

/// Map an engine error to its HTTP response
fn error_response(err: &ScreeningError) -> HttpResponse {
    match err {
        ScreeningError::UnknownRole(role) => HttpResponse::NotFound().json(ErrorResponse::new(
            "Unknown role",
            format!("Role '{}' is not in the taxonomy", role),
            404,
        )),
        ScreeningError::Configuration(e) => {
            tracing::error!("Taxonomy configuration error: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "Configuration error",
                e.to_string(),
                500,
            ))
        }
    }
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        roles: state.evaluator.taxonomy().len(),
        timestamp: chrono::Utc::now(),
    })
}

/// List selectable roles
///
/// GET /api/v1/roles
async fn list_roles(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(RolesResponse {
        roles: state.evaluator.list_roles(),
    })
}

/// Required skills for one role
///
/// GET /api/v1/roles/{role_name}
async fn get_role(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let role_name = path.into_inner();

    match state.evaluator.role(&role_name) {
        Ok(spec) => HttpResponse::Ok().json(spec),
        Err(e) => error_response(&e),
    }
}

/// Evaluate a resume against a role
///
/// POST /api/v1/evaluate
///
/// Request body:
/// ```json
/// {
///   "role": "Python Developer",
///   "resumeText": "string"
/// }
/// ```
async fn evaluate(
    state: web::Data<AppState>,
    req: web::Json<EvaluateRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: field_errors={:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            errors.to_string(),
            400,
        ));
    }

    if req.exceeds_limit(state.max_resume_chars) {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "Validation failed",
            format!("resumeText exceeds {} characters", state.max_resume_chars),
            400,
        ));
    }

    let request_id = uuid::Uuid::new_v4().to_string();

    let spec = match state.evaluator.role(&req.role) {
        Ok(spec) => spec,
        Err(e) => {
            tracing::info!("Rejected evaluation {} for unknown role '{}'", request_id, req.role);
            return error_response(&e);
        }
    };

    let result = match state.evaluator.evaluate(&req.resume_text, &req.role) {
        Ok(result) => result,
        Err(e) => return error_response(&e),
    };

    tracing::info!(
        "Evaluation {} for role '{}': score {}, {:?}, {:?}",
        request_id,
        req.role,
        result.score,
        result.decision,
        result.fit_tier
    );

    let summary = result.summary();

    HttpResponse::Ok().json(EvaluateResponse {
        request_id,
        role: spec.role_name.clone(),
        required_skills: spec.required_skills.clone(),
        result,
        summary,
    })
}
