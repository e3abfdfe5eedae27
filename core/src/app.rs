//! Client state machine: the record table, the form, and the actions that
//! drive the API.
//!
//! # Design
//! `App` owns the transient client state: the last-fetched `records`, the
//! `draft` being typed, the id under edit (create mode when `None`), and the
//! per-field validation errors from the last blocked submit. Every user
//! action splits into a build-request half and an apply-response half; the
//! host executes the request in between, so the state machine stays
//! synchronous and fully testable offline.
//!
//! Mutations acknowledge without a body, so each successful apply hands back
//! the list request and the host refetches to resynchronize `records`.

use crate::client::UserApi;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Draft, User};
use crate::validation::{validate, ValidationErrors};

pub struct App {
    api: UserApi,
    records: Vec<User>,
    draft: Draft,
    edit_target: Option<i64>,
    errors: ValidationErrors,
}

impl App {
    pub fn new(api: UserApi) -> Self {
        Self {
            api,
            records: Vec::new(),
            draft: Draft::default(),
            edit_target: None,
            errors: ValidationErrors::default(),
        }
    }

    /// Last-fetched record list. Non-authoritative: whatever the most recent
    /// applied list response said.
    pub fn records(&self) -> &[User] {
        &self.records
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    /// Id being edited, or `None` in create mode.
    pub fn edit_target(&self) -> Option<i64> {
        self.edit_target
    }

    /// Validation errors from the last blocked submit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// List request, for the initial load and for every resynchronization.
    pub fn load(&self) -> HttpRequest {
        self.api.build_list()
    }

    /// Replace `records` with the server's current set.
    pub fn apply_list(&mut self, response: HttpResponse) -> Result<(), ApiError> {
        self.records = self.api.parse_list(response)?;
        Ok(())
    }

    /// Validate the draft and build the create or update request.
    ///
    /// Returns `Ok(None)` when validation fails: the per-field messages are
    /// stored in [`errors`](Self::errors) and nothing is sent.
    pub fn submit(&mut self) -> Result<Option<HttpRequest>, ApiError> {
        let input = match validate(&self.draft) {
            Ok(input) => input,
            Err(errors) => {
                self.errors = errors;
                return Ok(None);
            }
        };
        self.errors = ValidationErrors::default();
        let request = match self.edit_target {
            Some(id) => self.api.build_update(id, &input)?,
            None => self.api.build_create(&input)?,
        };
        Ok(Some(request))
    }

    /// Complete a submit: parse the acknowledgement, reset the form, and
    /// hand back the list request for the refetch.
    ///
    /// On a parse error the form is left as it was, so the user can retry.
    pub fn apply_submit(&mut self, response: HttpResponse) -> Result<HttpRequest, ApiError> {
        match self.edit_target {
            Some(_) => self.api.parse_update(response)?,
            None => self.api.parse_create(response)?,
        }
        self.edit_target = None;
        self.draft = Draft::default();
        self.errors = ValidationErrors::default();
        Ok(self.api.build_list())
    }

    /// Enter edit mode for a listed record: remember its id and seed the
    /// draft from its fields. Returns `false` when the id is not in
    /// `records`.
    pub fn begin_edit(&mut self, id: i64) -> bool {
        let Some(user) = self.records.iter().find(|u| u.id == id) else {
            return false;
        };
        self.draft = Draft::from(user);
        self.edit_target = Some(id);
        self.errors = ValidationErrors::default();
        true
    }

    pub fn delete(&self, id: i64) -> HttpRequest {
        self.api.build_delete(id)
    }

    /// Complete a delete and hand back the list request for the refetch.
    pub fn apply_delete(&mut self, response: HttpResponse) -> Result<HttpRequest, ApiError> {
        self.api.parse_delete(response)?;
        Ok(self.api.build_list())
    }
}
