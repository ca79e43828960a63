use actix_web::{post, web, HttpResponse};
use log::{error, info};
use lonchera_client::{extract_lunches, Client};
use lonchera_model::{BmiResult, Country, LunchIdea, StudentInput};
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, prompt};

const MISSING_DATA: &str = "Faltan datos del estudiante o país.";
const INVALID_MEASUREMENTS: &str = "El peso y la estatura deben ser mayores que cero.";

#[derive(Debug, Deserialize)]
pub struct GenerateLunchesRequest {
    student: Option<StudentInput>,
    country: Option<Country>,
}

#[derive(Debug, Serialize)]
struct GenerateLunchesResponse {
    imc: BmiResult,
    loncheras: Vec<LunchIdea>,
    lunches: Vec<LunchIdea>,
}

#[post("/api/generate-lunches")]
async fn generate_lunches(
    client: web::Data<dyn Client>,
    request: web::Json<GenerateLunchesRequest>,
) -> Result<HttpResponse, ApiError> {
    let GenerateLunchesRequest { student, country } = request.into_inner();
    let student = student.ok_or_else(|| ApiError::BadRequest(MISSING_DATA.to_owned()))?;
    let country = country
        .or(student.country)
        .ok_or_else(|| ApiError::BadRequest(MISSING_DATA.to_owned()))?;

    let imc = BmiResult::calculate(student.weight, student.height)
        .ok_or_else(|| ApiError::BadRequest(INVALID_MEASUREMENTS.to_owned()))?;

    info!(
        "Generating lunches for a {} year old student in {} (BMI {}, {})",
        student.age, country, imc.value, imc.category
    );
    let content = client
        .generate(&prompt::build(&student, country))
        .await
        .map_err(|e| {
            error!("Upstream call failed: {}", e);
            ApiError::from(e)
        })?;

    let lunches = extract_lunches(&content).map_err(|e| {
        error!("Could not extract lunches ({}), raw response: {}", e, e.raw());
        ApiError::from(e)
    })?;
    info!("Received {} lunch ideas", lunches.len());

    Ok(HttpResponse::Ok().json(GenerateLunchesResponse {
        imc,
        loncheras: lunches.clone(),
        lunches,
    }))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::BadRequest(format!("Cuerpo de la solicitud inválido: {}", err)).into()
    }))
    .service(generate_lunches);
}
