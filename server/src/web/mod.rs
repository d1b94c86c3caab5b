use crate::cli_error::CliError;
use crate::data_store::{get_store_from_env, HotelStore};
use crate::setup::{get_listen_address_from_env, get_listen_port_from_env};
use actix_web::{middleware, web, App, HttpServer};
use log::info;
use std::sync::Arc;

mod http_error_logging;
mod ui;

pub fn serve() -> Result<(), CliError> {
    let state = AppState::new()?;
    let listen_address = get_listen_address_from_env()?;
    let listen_port = get_listen_port_from_env()?;
    info!(
        "Serving hotel web application at http://{}:{}/",
        listen_address, listen_port
    );
    actix_web::rt::System::new()
        .block_on(
            HttpServer::new(move || {
                App::new()
                    .configure(ui::configure_app)
                    .app_data(web::Data::new(state.clone()))
                    .wrap(middleware::Compress::default())
            })
            .bind((listen_address, listen_port))
            .map_err(CliError::BindError)?
            .run(),
        )
        .map_err(CliError::ServerError)
}

#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn HotelStore>,
}

impl AppState {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            store: Arc::new(get_store_from_env()?),
        })
    }
}
