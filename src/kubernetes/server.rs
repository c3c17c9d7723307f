// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fake API server answering Kubernetes REST requests from a `CredentialsRequestStore`.
//!
//! Hand `FakeApiServer::into_client` to code under test and every
//! `Api<DynamicObject>` call for CredentialsRequests lands in the store.

use crate::constants::reasons;
use crate::error::CredReqError;
use crate::store::CredentialsRequestStore;
use crate::types::CredentialsRequest;
use http::{Method, Request, Response, StatusCode, Uri};
use http_body_util::BodyExt;
use kube::api::{ApiResource, DeleteParams, DynamicObject, ListParams, PatchParams, WatchParams};
use kube::client::Body;
use kube::{Client, ResourceExt};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tower::Service;
use tracing::{debug, warn};

/// A `tower::Service` serving CredentialsRequests out of a shared store
#[derive(Clone)]
pub struct FakeApiServer {
    store: Arc<Mutex<CredentialsRequestStore>>,
    resource: ApiResource,
    default_namespace: String,
}

/// Where a request path points within the CredentialsRequest resource
#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    Collection,
    Object(String),
    Status(String),
}

/// Status code and JSON body of a response
#[derive(Debug)]
struct Reply {
    code: StatusCode,
    body: Vec<u8>,
}

impl FakeApiServer {
    pub fn new(store: CredentialsRequestStore, default_namespace: &str) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            resource: CredentialsRequest::api_resource(),
            default_namespace: default_namespace.to_string(),
        }
    }

    /// Build a kube Client backed by this server
    pub fn into_client(self) -> Client {
        let namespace = self.default_namespace.clone();
        Client::new(self, namespace)
    }

    /// Run `f` against the store while holding its lock
    pub fn with_store<R>(&self, f: impl FnOnce(&mut CredentialsRequestStore) -> R) -> R {
        f(&mut self.lock())
    }

    // Store operations never panic halfway through a mutation, so a poisoned
    // lock still guards a consistent slot.
    fn lock(&self) -> MutexGuard<'_, CredentialsRequestStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn route(&self, path: &str) -> Option<Route> {
        let prefix = format!(
            "/apis/{}/{}/namespaces/",
            self.resource.group, self.resource.version
        );
        let rest = path.strip_prefix(&prefix)?;
        let mut segments = rest.trim_end_matches('/').split('/');

        segments.next().filter(|ns| !ns.is_empty())?;
        if segments.next()? != self.resource.plural {
            return None;
        }

        let route = match (segments.next(), segments.next()) {
            (None, _) => Route::Collection,
            (Some(name), None) if !name.is_empty() => Route::Object(name.to_string()),
            (Some(name), Some("status")) if !name.is_empty() => Route::Status(name.to_string()),
            _ => return None,
        };

        match segments.next() {
            Some(_) => None,
            None => Some(route),
        }
    }

    fn handle(&self, method: &Method, uri: &Uri, body: &[u8]) -> Reply {
        let path = uri.path();
        debug!("{} {}", method, path);

        let Some(route) = self.route(path) else {
            warn!("No route for {} {}", method, path);
            return Reply::failure(
                StatusCode::NOT_FOUND,
                reasons::NOT_FOUND,
                "the server could not find the requested resource",
            );
        };

        let mut store = self.lock();
        let result = match (method, route) {
            (&Method::POST, Route::Collection) => match decode(body) {
                Ok(obj) => store
                    .create(&obj)
                    .map(|o| Reply::object(StatusCode::CREATED, &o)),
                Err(reply) => return reply,
            },
            (&Method::PUT, Route::Object(name)) => match decode(body) {
                Ok(obj) if obj.name_any() != name => {
                    return Reply::failure(
                        StatusCode::BAD_REQUEST,
                        reasons::BAD_REQUEST,
                        "the name of the object does not match the name on the URL",
                    );
                }
                Ok(obj) => store
                    .update(&obj)
                    .map(|o| Reply::object(StatusCode::OK, &o)),
                Err(reply) => return reply,
            },
            (&Method::PUT, Route::Status(_)) => match decode(body) {
                Ok(obj) => store
                    .update_status(&obj)
                    .map(|o| Reply::object(StatusCode::OK, &o)),
                Err(reply) => return reply,
            },
            (&Method::GET, Route::Object(name)) => {
                store.get(&name).map(|o| Reply::object(StatusCode::OK, &o))
            }
            (&Method::GET, Route::Collection) if is_watch(uri) => {
                let version = query_param(uri, "resourceVersion").unwrap_or("0");
                store
                    .watch(&WatchParams::default(), version)
                    .map(|_| Reply::success())
            }
            (&Method::GET, Route::Collection) => store
                .list(&ListParams::default())
                .map(|list| Reply::json(StatusCode::OK, &list)),
            (&Method::DELETE, Route::Object(name)) => store.delete(&name).map(|_| Reply::success()),
            (&Method::DELETE, Route::Collection) => store
                .delete_collection(&DeleteParams::default(), &ListParams::default())
                .map(|_| Reply::success()),
            (&Method::PATCH, Route::Object(name)) => store
                .patch(&name, &PatchParams::default(), body)
                .map(|o| Reply::object(StatusCode::OK, &o)),
            // Verb and route pairs with no endpoint on this resource at all
            (method, route) => {
                warn!("Unsupported request {} {:?}", method, route);
                Err(CredReqError::Unimplemented {
                    operation: "unsupported verb",
                })
            }
        };

        result.unwrap_or_else(|e| {
            debug!("{} {} failed: {}", method, path, e);
            Reply::error(&e)
        })
    }
}

impl Reply {
    fn json<T: serde::Serialize>(code: StatusCode, value: &T) -> Self {
        match serde_json::to_vec(value) {
            Ok(body) => Self { code, body },
            Err(e) => Self::error(&CredReqError::from(e)),
        }
    }

    fn object(code: StatusCode, obj: &DynamicObject) -> Self {
        Self::json(code, obj)
    }

    fn success() -> Self {
        let body = serde_json::json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Success",
            "code": 200
        });
        Self {
            code: StatusCode::OK,
            body: body.to_string().into_bytes(),
        }
    }

    fn failure(code: StatusCode, reason: &str, message: &str) -> Self {
        Self::status_body(code, reason, message, None)
    }

    fn error(err: &CredReqError) -> Self {
        let code = StatusCode::from_u16(err.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let details = match err {
            CredReqError::NotFound {
                group_resource,
                name,
            }
            | CredReqError::AlreadyExists {
                group_resource,
                name,
            } => Some(serde_json::json!({
                "name": name,
                "group": group_resource.group,
                "kind": group_resource.resource,
            })),
            _ => None,
        };
        Self::status_body(code, err.reason(), &err.to_string(), details)
    }

    fn status_body(
        code: StatusCode,
        reason: &str,
        message: &str,
        details: Option<serde_json::Value>,
    ) -> Self {
        let mut body = serde_json::json!({
            "kind": "Status",
            "apiVersion": "v1",
            "metadata": {},
            "status": "Failure",
            "message": message,
            "reason": reason,
            "code": code.as_u16()
        });
        if let Some(details) = details {
            body["details"] = details;
        }
        Self {
            code,
            body: body.to_string().into_bytes(),
        }
    }

    fn into_response(self) -> Result<Response<Body>, tower::BoxError> {
        Response::builder()
            .status(self.code)
            .header("content-type", "application/json")
            .body(Body::from(self.body))
            .map_err(Into::into)
    }
}

fn decode(body: &[u8]) -> Result<DynamicObject, Reply> {
    serde_json::from_slice(body).map_err(|e| {
        Reply::failure(
            StatusCode::BAD_REQUEST,
            reasons::BAD_REQUEST,
            &format!("request body is not a valid object: {}", e),
        )
    })
}

fn query_param<'a>(uri: &'a Uri, key: &str) -> Option<&'a str> {
    uri.query()?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

fn is_watch(uri: &Uri) -> bool {
    matches!(query_param(uri, "watch"), Some("true" | "1"))
}

impl Service<Request<Body>> for FakeApiServer {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let server = self.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let body = body.collect().await?.to_bytes();
            server
                .handle(&parts.method, &parts.uri, &body)
                .into_response()
        })
    }
}
