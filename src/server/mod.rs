use crate::launches::LaunchClient;
use actix_web::dev::Server;
use actix_web::{middleware::Logger, web, App, HttpServer};
use routes::latest_launch;
use std::net::TcpListener;

mod routes;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/latest-launch").route(web::get().to(latest_launch)));
}

pub fn launch_server(listener: TcpListener, client: LaunchClient) -> Result<Server, std::io::Error> {
    let client = web::Data::new(client);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(client.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();
    Ok(server)
}
