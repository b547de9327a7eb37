//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use crate::error::AppError;

/// Numeric `{id}` path segment of the `/product/{id}` routes.
///
/// Segments that are not pure ASCII digits are treated as unknown paths (404);
/// digit runs that overflow an `i64` are rejected as `Invalid product ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::UnmatchedRoute);
        }
        raw.parse::<i64>()
            .map(Self)
            .map_err(|_| AppError::validation("Invalid product ID"))
    }
}

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::UnmatchedRoute)?;

        Self::parse(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_parse() {
        assert_eq!(ProductId::parse("0").unwrap(), ProductId(0));
        assert_eq!(ProductId::parse("42").unwrap(), ProductId(42));
        assert_eq!(ProductId::parse("007").unwrap(), ProductId(7));
    }

    #[test]
    fn non_digits_are_unmatched() {
        for raw in ["", "abc", "-1", "+1", "1.5", "12a", " 1"] {
            assert!(
                matches!(ProductId::parse(raw), Err(AppError::UnmatchedRoute)),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn overflow_is_invalid() {
        match ProductId::parse("99999999999999999999") {
            Err(AppError::ValidationError(msg)) => assert_eq!(msg, "Invalid product ID"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
