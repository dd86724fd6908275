use axum::{
    Form,
    extract::{FromRequest, Multipart, Query, Request},
    http::header,
};
use std::collections::HashMap;

use crate::domain::{CreateUserForm, UpdateUserForm};
use crate::error::ApiError;

/// Text fields of a request, gathered from the query string and the body.
///
/// Url-encoded and multipart bodies are read; a request without a body
/// content type contributes query fields only. For a repeated key the first
/// value wins, and a body value beats a query value.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    fn merge_first(target: &mut HashMap<String, String>, pairs: Vec<(String, String)>) {
        for (key, value) in pairs {
            target.entry(key).or_insert(value);
        }
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut query = HashMap::new();
        if req.uri().query().is_some() {
            let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
                .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;
            Self::merge_first(&mut query, pairs);
        }

        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|value| value.to_str().unwrap_or_default().to_ascii_lowercase());

        let mut body = HashMap::new();
        match content_type.as_deref() {
            None => {}
            Some(ct) if ct.starts_with("application/x-www-form-urlencoded") => {
                let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;
                Self::merge_first(&mut body, pairs);
            }
            Some(ct) if ct.starts_with("multipart/form-data") => {
                let mut multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|rejection| ApiError::malformed(rejection.body_text()))?;
                while let Some(field) = multipart
                    .next_field()
                    .await
                    .map_err(|e| ApiError::malformed(e.body_text()))?
                {
                    let Some(name) = field.name().map(str::to_owned) else {
                        continue;
                    };
                    let value = field
                        .text()
                        .await
                        .map_err(|e| ApiError::malformed(e.body_text()))?;
                    body.entry(name).or_insert(value);
                }
            }
            Some(other) => {
                return Err(ApiError::malformed(format!(
                    "unsupported content type {:?}",
                    other
                )));
            }
        }

        query.extend(body);
        Ok(FormFields(query))
    }
}

impl From<FormFields> for CreateUserForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            name: fields.take("name"),
            email: fields.take("email"),
            age: fields.take("age"),
        }
    }
}

impl From<FormFields> for UpdateUserForm {
    fn from(mut fields: FormFields) -> Self {
        Self {
            name: fields.take("name"),
            email: fields.take("email"),
            age: fields.take("age"),
        }
    }
}
