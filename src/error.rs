use std::{io, net::SocketAddr};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("couldn't bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(#[from] io::Error),
}
