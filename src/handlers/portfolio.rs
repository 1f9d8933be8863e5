// src/handlers/portfolio.rs
// DOCUMENTATION: HTTP handlers for portfolio data
// PURPOSE: Serve profile, albums and experience to the front end

use crate::config::Config;
use crate::db::{PortfolioRepository, SupabaseClient};
use crate::errors::PortfolioError;
use crate::models::SiteMeta;
use crate::services::PortfolioService;
use actix_web::{web, HttpResponse, Responder};

/// GET /api/portfolio
/// Everything the page renders; failed parts come back as `null`
pub async fn get_portfolio(client: web::Data<SupabaseClient>) -> impl Responder {
    let snapshot = PortfolioService::fetch_snapshot(client.get_ref()).await;
    HttpResponse::Ok().json(snapshot)
}

/// GET /api/profile
pub async fn get_profile(
    client: web::Data<SupabaseClient>,
) -> Result<impl Responder, PortfolioError> {
    let profile = PortfolioRepository::get_profile(client.get_ref())
        .await
        .inspect_err(|e| log::warn!("GET /api/profile failed: {}", e))?;
    Ok(HttpResponse::Ok().json(profile))
}

/// GET /api/albums
pub async fn list_albums(
    client: web::Data<SupabaseClient>,
) -> Result<impl Responder, PortfolioError> {
    let albums = PortfolioRepository::list_albums(client.get_ref())
        .await
        .inspect_err(|e| log::warn!("GET /api/albums failed: {}", e))?;
    Ok(HttpResponse::Ok().json(albums))
}

/// GET /api/experience
pub async fn list_experience(
    client: web::Data<SupabaseClient>,
) -> Result<impl Responder, PortfolioError> {
    let entries = PortfolioRepository::list_experience(client.get_ref())
        .await
        .inspect_err(|e| log::warn!("GET /api/experience failed: {}", e))?;
    Ok(HttpResponse::Ok().json(entries))
}

/// GET /api/site
pub async fn get_site(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(SiteMeta {
        title: config.site_title.clone(),
        description: config.site_description.clone(),
        site_url: config.site_url.clone(),
    })
}

/// Configuration for portfolio routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/portfolio", web::get().to(get_portfolio))
            .route("/profile", web::get().to(get_profile))
            .route("/albums", web::get().to(list_albums))
            .route("/experience", web::get().to(list_experience))
            .route("/site", web::get().to(get_site)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use httpmock::prelude::*;
    use serde_json::{json, Value};

    fn test_config(supabase_url: &str) -> Config {
        let url = supabase_url.to_string();
        Config::from_lookup(move |key| match key {
            "SUPABASE_URL" => Some(url.clone()),
            "SUPABASE_KEY" => Some("anon".to_string()),
            "NUXT_PUBLIC_SITE_URL" => Some("https://bosun.example".to_string()),
            _ => None,
        })
    }

    macro_rules! portfolio_app {
        ($url:expr) => {{
            let config = test_config($url);
            let client = SupabaseClient::new(&config.supabase_url, &config.supabase_key).unwrap();
            test::init_service(
                App::new()
                    .app_data(web::Data::new(client))
                    .app_data(web::Data::new(config))
                    .configure(super::config),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_portfolio_snapshot_is_ok_when_backend_down() {
        let app = portfolio_app!("http://127.0.0.1:1");
        let req = test::TestRequest::get().uri("/api/portfolio").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"profile": null, "albums": null, "experience": null})
        );
    }

    #[actix_web::test]
    async fn test_profile_not_single_row_maps_to_404() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/rest/v1/profiles");
            then.status(406).json_body(json!({
                "code": "PGRST116",
                "details": "The result contains 0 rows",
                "message": "JSON object requested, multiple (or no) rows returned"
            }));
        });

        let app = portfolio_app!(&server.base_url());
        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_albums_route_passes_rows_through() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/rest/v1/albums")
                .query_param("order", "created_at.desc");
            then.status(200).json_body(json!([
                {"id": 2, "title": "Dry dock", "vessels_gallery": []},
                {"id": 1, "title": "Coastal trade", "vessels_gallery": [{"id": 9}]}
            ]));
        });

        let app = portfolio_app!(&server.base_url());
        let req = test::TestRequest::get().uri("/api/albums").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["id"], 2);
        assert_eq!(body[0]["vessels_gallery"], json!([]));
        assert_eq!(body[1]["vessels_gallery"][0]["id"], 9);
    }

    #[actix_web::test]
    async fn test_experience_transport_failure_maps_to_502() {
        let app = portfolio_app!("http://127.0.0.1:1");
        let req = test::TestRequest::get().uri("/api/experience").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "BACKEND_UNREACHABLE");
    }

    #[actix_web::test]
    async fn test_site_meta() {
        let app = portfolio_app!("http://127.0.0.1:1");
        let req = test::TestRequest::get().uri("/api/site").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["site_url"], "https://bosun.example");
        assert_eq!(
            body["title"],
            "José Josenildo da Silva - Mestre de Cabotagem"
        );
    }
}
