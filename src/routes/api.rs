//! JSON endpoints mounted under `/api`.

use actix_web::{HttpResponse, Responder, get, web};

use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::services::{api as api_service, graph as graph_service};

#[get("/v1/clients")]
pub async fn api_v1_clients(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match api_service::list_clients(repo.get_ref(), server_config.pricing_policy) {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(err) => {
            log::error!("Failed to list clients: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/vendors")]
pub async fn api_v1_vendors(repo: web::Data<DieselRepository>) -> impl Responder {
    match api_service::list_vendors(repo.get_ref()) {
        Ok(vendors) => HttpResponse::Ok().json(vendors),
        Err(err) => {
            log::error!("Failed to list vendors: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/stats")]
pub async fn api_v1_stats(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match api_service::load_stats(repo.get_ref(), server_config.pricing_policy) {
        Ok(stats) => HttpResponse::Ok().json(stats),
        Err(err) => {
            log::error!("Failed to collect stats: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/v1/graph")]
pub async fn api_v1_graph(
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    match graph_service::load_graph(repo.get_ref(), server_config.pricing_policy) {
        Ok(graph) => HttpResponse::Ok().json(graph),
        Err(err) => {
            log::error!("Failed to build the relationship graph: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
