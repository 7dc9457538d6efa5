//! The single handler behind every path of a resource service.

use super::response::{created, deleted, ok, ApiError};
use super::route::Route;
use super::{RestResource, ServiceState};
use crate::validation::parse_body;
use axum::{
    body::Bytes,
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

/// Routes a request by path and method to the resource's client.
pub async fn dispatch<T: RestResource>(
    State(state): State<ServiceState<T>>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Response, ApiError> {
    if method == Method::OPTIONS {
        return Ok(StatusCode::OK.into_response());
    }

    let route = Route::parse(uri.path(), &state.base_path, T::FILTERS);
    debug!(resource = T::RESOURCE, %method, path = uri.path(), ?route, "Dispatch");

    match route {
        Route::Root => match (method, T::banner()) {
            (_, None) => Err(ApiError::RouteNotFound),
            (Method::GET, Some(banner)) => Ok(ok(banner)),
            _ => Err(ApiError::MethodNotAllowed),
        },
        Route::Health => match method {
            Method::GET => Ok(ok(json!({
                "status": "healthy",
                "service": T::service_name(),
            }))),
            _ => Err(ApiError::MethodNotAllowed),
        },
        Route::Collection => match method {
            Method::GET => list(&state).await,
            Method::POST => create(&state, &body).await,
            _ => Err(ApiError::MethodNotAllowed),
        },
        Route::Filtered { keyword, value } => {
            if method != Method::GET {
                return Err(ApiError::MethodNotAllowed);
            }
            let filter = T::filter_for(&keyword, &value).ok_or(ApiError::RouteNotFound)?;
            let items = state
                .client
                .filter(filter)
                .await
                .map_err(ApiError::from_framework::<T>)?;
            Ok(ok(items))
        }
        Route::Item(id) => match method {
            Method::GET => get(&state, id).await,
            Method::PUT => update(&state, id, &body).await,
            Method::DELETE => delete(&state, id).await,
            _ => Err(ApiError::MethodNotAllowed),
        },
        Route::Unmatched => Err(ApiError::RouteNotFound),
    }
}

async fn list<T: RestResource>(state: &ServiceState<T>) -> Result<Response, ApiError> {
    let items = state
        .client
        .list()
        .await
        .map_err(ApiError::from_framework::<T>)?;
    Ok(ok(items))
}

async fn get<T: RestResource>(state: &ServiceState<T>, id: u64) -> Result<Response, ApiError> {
    state
        .client
        .get(id)
        .await
        .map_err(ApiError::from_framework::<T>)?
        .map(ok)
        .ok_or(ApiError::NotFound(T::LABEL))
}

async fn create<T: RestResource>(
    state: &ServiceState<T>,
    body: &[u8],
) -> Result<Response, ApiError> {
    let params = T::create_from_json(&parse_body(body)?)?;
    let item = state
        .client
        .create(params)
        .await
        .map_err(ApiError::from_framework::<T>)?;
    let location = format!("{}/{}", state.base_path.trim_end_matches('/'), item.id());
    Ok(created(location, item))
}

async fn update<T: RestResource>(
    state: &ServiceState<T>,
    id: u64,
    body: &[u8],
) -> Result<Response, ApiError> {
    let update = T::update_from_json(&parse_body(body)?)?;
    let item = state
        .client
        .update(id, update)
        .await
        .map_err(ApiError::from_framework::<T>)?;
    Ok(ok(item))
}

async fn delete<T: RestResource>(state: &ServiceState<T>, id: u64) -> Result<Response, ApiError> {
    let removed = state
        .client
        .delete(id)
        .await
        .map_err(ApiError::from_framework::<T>)?;
    if removed {
        Ok(deleted::<T>())
    } else {
        Err(ApiError::NotFound(T::LABEL))
    }
}
