//! API request model for creating cats.
//!
//! The request carries only client-owned fields. Unknown fields, including
//! `id` and `created`, are dropped during deserialization so a client can never
//! choose them.

use crate::models::{ApiError, NewCat};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request structure for creating a new cat
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct CreateCatRequest {
    #[schema(example = "Tom")]
    pub name: String,
    #[serde(default)]
    #[schema(nullable = false, example = "black")]
    pub color: Option<String>,
}

impl TryFrom<CreateCatRequest> for NewCat {
    type Error = ApiError;

    fn try_from(request: CreateCatRequest) -> Result<Self, Self::Error> {
        let candidate = NewCat::new(request.name, request.color);
        candidate.validate()?;
        Ok(candidate)
    }
}
