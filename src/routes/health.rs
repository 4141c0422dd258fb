use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Liveness/welcome endpoint
///
/// Requires no authentication and touches no state.
#[get("/")]
pub async fn welcome() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Take your baby steps towards productivity with Todoler"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;

    #[actix_web::test]
    async fn test_welcome_endpoint() {
        let app = test::init_service(actix_web::App::new().service(welcome)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(json["message"].as_str().unwrap().contains("Todoler"));
    }
}
