use crate::launches::LaunchClient;
use actix_web::{web::Data, HttpResponse};

pub async fn latest_launch(client: Data<LaunchClient>) -> HttpResponse {
    HttpResponse::Ok().json(client.latest().await)
}
