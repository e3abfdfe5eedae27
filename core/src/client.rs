//! Stateless request builder and response parser for the user API.
//!
//! # Design
//! `UserApi` holds only a base URL. Each operation is a `build_*` / `parse_*`
//! pair with the host executing the round-trip in between. Mutation parsers
//! check the status only: the acknowledgement bodies carry nothing the client
//! needs, and resynchronization always goes through a follow-up list.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{User, UserInput};

/// Stateless client for the user API.
#[derive(Debug, Clone)]
pub struct UserApi {
    base_url: String,
}

impl UserApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Get, format!("{}/users", self.base_url))
    }

    pub fn build_create(&self, input: &UserInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(
            HttpMethod::Post,
            format!("{}/users", self.base_url),
            encode(input)?,
        ))
    }

    pub fn build_update(&self, id: i64, input: &UserInput) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest::json(
            HttpMethod::Put,
            format!("{}/users/{id}", self.base_url),
            encode(input)?,
        ))
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest::bare(HttpMethod::Delete, format!("{}/users/{id}", self.base_url))
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        expect_status(&response, 200)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create acknowledges with 201; the body is a message the client ignores.
    pub fn parse_create(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(&response, 201)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(&response, 200)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        expect_status(&response, 200)
    }
}

fn encode<T: serde::Serialize>(input: &T) -> Result<String, ApiError> {
    serde_json::to_string(input).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Map non-success statuses onto `ApiError`, keeping 404 distinct.
fn expect_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Unexpected {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> UserApi {
        UserApi::new("http://localhost:5000")
    }

    fn input() -> UserInput {
        UserInput {
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            age: 30,
        }
    }

    #[test]
    fn build_list_produces_bare_get() {
        let req = api().build_list();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost:5000/users");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_produces_json_post() {
        let req = api().build_create(&input()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://localhost:5000/users");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Alice");
        assert_eq!(body["email"], "alice@x.com");
        assert_eq!(body["age"], 30);
    }

    #[test]
    fn build_update_targets_the_id() {
        let req = api().build_update(7, &input()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.url, "http://localhost:5000/users/7");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_targets_the_id() {
        let req = api().build_delete(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.url, "http://localhost:5000/users/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = UserApi::new("http://localhost:5000/");
        assert_eq!(api.build_list().url, "http://localhost:5000/users");
    }

    #[test]
    fn parse_list_success() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":1,"name":"Alice","email":"alice@x.com","age":30}]"#,
        );
        let users = api().parse_list(response).unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 1);
        assert_eq!(users[0].name, "Alice");
    }

    #[test]
    fn parse_list_bad_json() {
        let err = api().parse_list(HttpResponse::new(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn parse_create_accepts_201() {
        let response = HttpResponse::new(201, r#"{"message":"User added successfully!"}"#);
        assert!(api().parse_create(response).is_ok());
    }

    #[test]
    fn parse_create_rejects_other_statuses() {
        let err = api()
            .parse_create(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Unexpected { status: 500, .. }));
    }

    #[test]
    fn parse_update_maps_404_to_not_found() {
        let err = api().parse_update(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_update_accepts_200() {
        let response = HttpResponse::new(200, r#"{"message":"User updated successfully!"}"#);
        assert!(api().parse_update(response).is_ok());
    }

    #[test]
    fn parse_delete_maps_404_to_not_found() {
        let err = api().parse_delete(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_delete_accepts_200() {
        let response = HttpResponse::new(200, r#"{"message":"User deleted successfully!"}"#);
        assert!(api().parse_delete(response).is_ok());
    }
}
