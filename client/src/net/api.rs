//! REST API helpers for communicating with the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the session cookie travels to the API origin.
//! Server-side (SSR) and native tests: the transport resolves every call to
//! [`ApiError::Unavailable`] since these endpoints only make sense in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`; pages turn failures into toast
//! notifications and never panic during hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AdminDashboard, AdminUser, Booking, BookingUpdate, CheckoutRequest, CheckoutSession, Identity, MaintenancePlan,
    MaintenanceRequest, NewBooking, Part, PartRecommendRequest, PartRecommendation, PaymentStatus, ProfileUpdate,
    RevenueStats, Review, SessionExchange, Technician, TechnicianMatch, TechnicianMatchRequest, Transaction,
};
use crate::util::bootstrap::AuthGateway;
use crate::util::payment_watch::PaymentStatusSource;

/// Header carrying the one-time handshake token to `/auth/session`.
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Post,
    Put,
    Delete,
}

fn endpoint(path: &str) -> String {
    endpoint_from(&crate::config::api_base(), path)
}

fn endpoint_from(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Percent-encode an identifier so it stays a single path segment.
fn segment(raw: &str) -> String {
    match raw {
        "." => "%2E".to_owned(),
        ".." => "%2E%2E".to_owned(),
        _ => url::form_urlencoded::byte_serialize(raw.as_bytes()).collect(),
    }
}

fn booking_path(booking_id: &str) -> String {
    format!("/bookings/{}", segment(booking_id))
}

fn payment_status_path(session_id: &str) -> String {
    format!("/payments/status/{}", segment(session_id))
}

fn admin_user_path(user_id: &str) -> String {
    format!("/admin/users/{}", segment(user_id))
}

fn admin_review_path(review_id: &str) -> String {
    format!("/admin/reviews/{}", segment(review_id))
}

/// Optional filter parameter: blank input means "no filter".
fn filter_query(key: &'static str, raw: Option<&str>) -> Vec<(&'static str, String)> {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|v| vec![(key, v.to_owned())])
        .unwrap_or_default()
}

/// Exchange the handshake token for a session credential via `GET /auth/session`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects the token.
pub async fn exchange_session(session_id: &str) -> Result<String, ApiError> {
    let body: SessionExchange = transport::get_json(
        "session exchange",
        &endpoint("/auth/session"),
        &[],
        &[(SESSION_ID_HEADER, session_id)],
    )
    .await?;
    Ok(body.session_token)
}

/// End the server-side session via `POST /auth/logout`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend responds non-2xx.
pub async fn logout() -> Result<(), ApiError> {
    transport::send_empty(Method::Post, "logout", &endpoint("/auth/logout")).await
}

/// Fetch the identity bound to the ambient credential from `GET /users/me`.
///
/// # Errors
///
/// Any failure, including a missing or expired credential, is an error; the
/// caller treats it as "not signed in".
pub async fn fetch_current_identity() -> Result<Identity, ApiError> {
    transport::get_json("load profile", &endpoint("/users/me"), &[], &[]).await
}

/// Apply a partial profile update via `PUT /users/me`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend responds non-2xx.
pub async fn update_profile(update: &ProfileUpdate) -> Result<(), ApiError> {
    transport::send_json_discard(Method::Put, "update profile", &endpoint("/users/me"), update).await
}

/// List bookings visible to the current user.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn list_bookings() -> Result<Vec<Booking>, ApiError> {
    transport::get_json("load bookings", &endpoint("/bookings"), &[], &[]).await
}

/// Create a booking via `POST /bookings`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend responds non-2xx.
pub async fn create_booking(booking: &NewBooking) -> Result<(), ApiError> {
    transport::send_json_discard(Method::Post, "create booking", &endpoint("/bookings"), booking).await
}

/// Move a booking along its status lifecycle via `PUT /bookings/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend responds non-2xx.
pub async fn update_booking(booking_id: &str, update: &BookingUpdate) -> Result<(), ApiError> {
    transport::send_json_discard(Method::Put, "update booking", &endpoint(&booking_path(booking_id)), update).await
}

/// List technicians, optionally filtered by location.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn list_technicians(location: Option<&str>) -> Result<Vec<Technician>, ApiError> {
    let query = filter_query("location", location);
    transport::get_json("load technicians", &endpoint("/technicians"), &query, &[]).await
}

/// Ask the AI matcher for technicians suited to a job.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn match_technicians(request: &TechnicianMatchRequest) -> Result<TechnicianMatch, ApiError> {
    transport::send_json(Method::Post, "technician match", &endpoint("/ai/match-technician"), request).await
}

/// List marketplace parts, optionally filtered by a search term.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn list_parts(search: Option<&str>) -> Result<Vec<Part>, ApiError> {
    let query = filter_query("search", search);
    transport::get_json("load parts", &endpoint("/parts"), &query, &[]).await
}

/// Ask the AI part finder for recommendations.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn recommend_parts(request: &PartRecommendRequest) -> Result<PartRecommendation, ApiError> {
    transport::send_json(Method::Post, "part recommendation", &endpoint("/parts/ai-recommend"), request).await
}

/// Request an AI maintenance plan for one equipment item.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn predictive_maintenance(request: &MaintenanceRequest) -> Result<MaintenancePlan, ApiError> {
    transport::send_json(Method::Post, "maintenance plan", &endpoint("/ai/predictive-maintenance"), request).await
}

/// Open a hosted checkout session via `POST /payments/checkout`.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn start_checkout(request: &CheckoutRequest) -> Result<CheckoutSession, ApiError> {
    transport::send_json(Method::Post, "checkout", &endpoint("/payments/checkout"), request).await
}

/// Read the current state of a checkout session.
///
/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn payment_status(session_id: &str) -> Result<PaymentStatus, ApiError> {
    transport::get_json("payment status", &endpoint(&payment_status_path(session_id)), &[], &[]).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn admin_dashboard() -> Result<AdminDashboard, ApiError> {
    transport::get_json("admin dashboard", &endpoint("/admin/dashboard"), &[], &[]).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn admin_users() -> Result<Vec<AdminUser>, ApiError> {
    transport::get_json("admin users", &endpoint("/admin/users"), &[], &[]).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn admin_bookings() -> Result<Vec<Booking>, ApiError> {
    transport::get_json("admin bookings", &endpoint("/admin/bookings"), &[], &[]).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn admin_transactions() -> Result<Vec<Transaction>, ApiError> {
    transport::get_json("admin transactions", &endpoint("/admin/transactions"), &[], &[]).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn admin_revenue_stats() -> Result<RevenueStats, ApiError> {
    transport::get_json("revenue stats", &endpoint("/admin/revenue-stats"), &[], &[]).await
}

/// # Errors
///
/// Returns an error if the request fails or the body cannot be decoded.
pub async fn admin_reviews() -> Result<Vec<Review>, ApiError> {
    transport::get_json("admin reviews", &endpoint("/admin/reviews"), &[], &[]).await
}

/// Delete a user account. Callers must confirm with the admin first.
///
/// # Errors
///
/// Returns an error if the request fails or the backend responds non-2xx.
pub async fn delete_user(user_id: &str) -> Result<(), ApiError> {
    transport::send_empty(Method::Delete, "delete user", &endpoint(&admin_user_path(user_id))).await
}

/// Delete a review. Callers must confirm with the admin first.
///
/// # Errors
///
/// Returns an error if the request fails or the backend responds non-2xx.
pub async fn delete_review(review_id: &str) -> Result<(), ApiError> {
    transport::send_empty(Method::Delete, "delete review", &endpoint(&admin_review_path(review_id))).await
}

/// The live backend behind the bootstrap and payment-watch seams.
#[derive(Clone, Copy, Debug, Default)]
pub struct RestApi;

impl AuthGateway for RestApi {
    async fn exchange_session(&self, session_id: &str) -> Result<String, ApiError> {
        exchange_session(session_id).await
    }

    async fn fetch_identity(&self) -> Result<Identity, ApiError> {
        fetch_current_identity().await
    }
}

impl PaymentStatusSource for RestApi {
    async fn fetch_status(&self, session_id: &str) -> Result<PaymentStatus, ApiError> {
        payment_status(session_id).await
    }
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use web_sys::RequestCredentials;

    use super::{ApiError, Method};

    fn with_credentials(request: RequestBuilder) -> RequestBuilder {
        request.credentials(RequestCredentials::Include)
    }

    fn builder(method: Method, url: &str) -> RequestBuilder {
        with_credentials(match method {
            Method::Post => Request::post(url),
            Method::Put => Request::put(url),
            Method::Delete => Request::delete(url),
        })
    }

    fn checked(operation: &'static str, result: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
        let resp = result.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(ApiError::Status { operation, status });
        }
        Ok(resp)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(super) async fn get_json<T: DeserializeOwned>(
        operation: &'static str,
        url: &str,
        query: &[(&'static str, String)],
        headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let mut request = with_credentials(Request::get(url));
        if !query.is_empty() {
            request = request.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        for (name, value) in headers {
            request = request.header(name, value);
        }
        let resp = checked(operation, request.send().await)?;
        decode(resp).await
    }

    pub(super) async fn send_json<B: Serialize, T: DeserializeOwned>(
        method: Method,
        operation: &'static str,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = builder(method, url).json(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        let resp = checked(operation, request.send().await)?;
        decode(resp).await
    }

    pub(super) async fn send_json_discard<B: Serialize>(
        method: Method,
        operation: &'static str,
        url: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = builder(method, url).json(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        checked(operation, request.send().await)?;
        Ok(())
    }

    pub(super) async fn send_empty(method: Method, operation: &'static str, url: &str) -> Result<(), ApiError> {
        checked(operation, builder(method, url).send().await)?;
        Ok(())
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use super::{ApiError, Method};

    pub(super) async fn get_json<T: DeserializeOwned>(
        _operation: &'static str,
        _url: &str,
        _query: &[(&'static str, String)],
        _headers: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        Err(ApiError::Unavailable)
    }

    pub(super) async fn send_json<B: Serialize, T: DeserializeOwned>(
        _method: Method,
        _operation: &'static str,
        _url: &str,
        _body: &B,
    ) -> Result<T, ApiError> {
        Err(ApiError::Unavailable)
    }

    pub(super) async fn send_json_discard<B: Serialize>(
        _method: Method,
        _operation: &'static str,
        _url: &str,
        _body: &B,
    ) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }

    pub(super) async fn send_empty(_method: Method, _operation: &'static str, _url: &str) -> Result<(), ApiError> {
        Err(ApiError::Unavailable)
    }
}
