//! Endpoint logic.
//!
//! Turns a parsed [`Request`] into a [`Response`]. The route table, the
//! encoding allow-set and the storage root are fixed at construction and
//! shared read-only across connections.

use std::path::PathBuf;

use tracing::{error, warn};

use crate::http::encoding::EncodingSet;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};
use crate::routing::{Route, RouteTable};
use crate::storage::{FsStorage, StorageError};

const TEXT_PLAIN: &str = "text/plain";
const OCTET_STREAM: &str = "application/octet-stream";

#[derive(Debug, Clone)]
pub struct Handler {
    routes: RouteTable,
    encodings: EncodingSet,
    storage: FsStorage,
}

impl Handler {
    pub fn new(routes: RouteTable, encodings: EncodingSet, storage: FsStorage) -> Self {
        Self {
            routes,
            encodings,
            storage,
        }
    }

    /// Default routes and encodings over a storage root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self::new(
            RouteTable::default(),
            EncodingSet::default(),
            FsStorage::new(root),
        )
    }

    pub async fn handle(&self, request: &Request) -> Response {
        let matched = self.routes.resolve(&request.path);

        match (&request.method, matched.route) {
            (_, Route::Root) => Response::status_only(StatusCode::Ok),
            (_, Route::NotFound) => Response::not_found(),
            (Method::GET, Route::Echo) => {
                self.content(request, TEXT_PLAIN, matched.remainder.as_bytes().to_vec())
            }
            (Method::GET, Route::UserAgent) => {
                self.content(request, TEXT_PLAIN, request.user_agent().as_bytes().to_vec())
            }
            (Method::GET, Route::Files) => self.read_file(request, matched.remainder).await,
            (Method::POST, Route::Files) => self.write_file(request, matched.remainder).await,
            _ => Response::bad_request(),
        }
    }

    async fn read_file(&self, request: &Request, name: &str) -> Response {
        match self.storage.read(name).await {
            Ok(contents) => self.content(request, OCTET_STREAM, contents),
            Err(e) => {
                warn!(file = name, error = %e, "File read failed");
                Response::not_found()
            }
        }
    }

    async fn write_file(&self, request: &Request, name: &str) -> Response {
        match self.storage.write(name, request.body_bytes()).await {
            Ok(()) => Response::status_only(StatusCode::Created),
            Err(e @ StorageError::InvalidName(_)) => {
                warn!(file = name, error = %e, "Rejected file name");
                Response::bad_request()
            }
            Err(e) => {
                error!(file = name, error = %e, "File write failed");
                Response::internal_error()
            }
        }
    }

    /// 200 with a body, encoded if the client asked for something we support.
    fn content(&self, request: &Request, content_type: &str, body: Vec<u8>) -> Response {
        let encoding = self.encodings.negotiate(request.accept_encoding());

        Response::content(StatusCode::Ok, content_type, body, encoding).unwrap_or_else(|e| {
            error!(error = %e, "Failed to encode response body");
            Response::internal_error()
        })
    }
}
