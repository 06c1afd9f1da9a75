use actix_web::{get, http::header::ContentType, post, web, HttpResponse, Responder};
use bodycheck_model::profile::Profile;
use log::debug;

use crate::{form::FormFields, render};

#[post("/recommendation")]
async fn recommendation(profile: web::Json<Profile>) -> impl Responder {
    debug!("Assessing JSON profile");
    web::Json(bodycheck_engine::assess(&profile))
}

#[post("/form")]
async fn form(fields: web::Form<FormFields>) -> impl Responder {
    debug!("Assessing form submission");
    let report = bodycheck_engine::assess(&fields.into_inner().into_profile());
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render::render_html(&report.recommendation))
}

#[get("/health")]
async fn health() -> impl Responder {
    "ok"
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(recommendation).service(form).service(health);
}
