use actix_web::{web, HttpResponse, Responder};

use crate::models::message_response::MessageResponse;

pub async fn ping() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::new("pong"))
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/ping").route(web::get().to(ping)));
}
