use crate::clock::SystemClock;
use crate::config::Config;
use crate::router::respond;
use astra::{Request, Server};
use tracing::{error, info};

mod clock;
mod config;
mod content;
mod errors;
mod logger;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logger::init_logger();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    info!(addr = %config.addr, workers = config.max_workers, "starting server");

    let clock = SystemClock;
    let server = Server::bind(config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req: Request, _info| respond(req, &clock));

    if let Err(e) = result {
        error!("server ended with error: {e}");
        std::process::exit(1);
    }

    info!("server shut down cleanly");
}
