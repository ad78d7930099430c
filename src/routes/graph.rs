use actix_web::{HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::graph as graph_service;

#[get("/graph")]
pub async fn show_graph(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match graph_service::load_graph(repo.get_ref(), server_config.pricing_policy) {
        Ok(graph) => {
            let mut context = base_context(&flash_messages, "graph");
            context.insert("graph", &graph);
            render_template(&tera, "graph/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to build the relationship graph: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
