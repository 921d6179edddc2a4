//! HTTP front end for the bytescope conversion engine.

use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    serve, Extension, Router,
};
use bytescope_codec::Params;
use bytescope_convert::{Engine, Error, Submission};
use clap::{value_parser, Arg, Command};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn, Level};

mod page;

async fn index(
    Extension(engine): Extension<Arc<Engine>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let mut params = Params::from_pairs(pairs);
    let submission = Submission::from_params(&params);
    match engine.convert(submission, &mut params) {
        Ok(conversion) => Html(page::render(&conversion, &params)).into_response(),
        Err(err @ Error::UnknownCodec(_)) => {
            warn!(%err, "rejecting request");
            (StatusCode::NOT_FOUND, "no codec found").into_response()
        }
    }
}

#[tokio::main]
async fn main() {
    // Parse arguments
    let matches = Command::new("bytescope")
        .about("convert bytes between textual representations")
        .arg(
            Arg::new("port")
                .long("port")
                .default_value("8080")
                .value_parser(value_parser!(u16)),
        )
        .get_matches();

    // Create logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    // Serve the conversion page
    let engine = Arc::new(Engine::default());
    let app = Router::new()
        .route("/", get(index))
        .layer(Extension(engine));
    let port = *matches.get_one::<u16>("port").unwrap();
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Could not bind listener");
    info!(%addr, "listening");
    serve(listener, app.into_make_service())
        .await
        .expect("Could not serve requests");
}
