//! Read-only personnel dashboard: list views over snapshots of the unit
//! personnel API.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod list_view;
pub mod repository;
pub mod services;

#[cfg(feature = "server")]
pub mod models;
#[cfg(feature = "server")]
pub mod routes;

#[cfg(feature = "server")]
pub use server::run;

#[cfg(feature = "server")]
mod server {
    use actix_web::{App, HttpServer, middleware, web};

    use crate::models::config::ServerConfig;
    use crate::repository::SnapshotRepository;
    use crate::routes::api::{
        api_v1_documents, api_v1_leaves, api_v1_personnel, api_v1_reassignments,
        api_v1_reload_snapshot, api_v1_users,
    };
    use crate::routes::health;

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let repo = SnapshotRepository::open(&server_config.data_dir)
            .map_err(|e| std::io::Error::other(format!("Failed to load snapshot: {e}")))?;

        let defaults = server_config.list_defaults();
        let bind_address = (server_config.address.clone(), server_config.port);

        HttpServer::new(move || {
            App::new()
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(health)
                .service(
                    web::scope("/api")
                        .service(api_v1_personnel)
                        .service(api_v1_reassignments)
                        .service(api_v1_documents)
                        .service(api_v1_users)
                        .service(api_v1_leaves)
                        .service(api_v1_reload_snapshot),
                )
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(defaults))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
