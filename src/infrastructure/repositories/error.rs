// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_CATEGORY_SLUG: &str = "categories_slug_key";
const CNT_PHOTO_SLUG: &str = "photos_slug_key";
const CNT_PHOTO_CATEGORY: &str = "photos_category_id_fkey";
const CNT_FRAME_STYLE: &str = "frames_style_key";
const CNT_FORMAT_NAME: &str = "formats_name_key";
const CNT_PRICE_SIZE: &str = "prices_size_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let known = db_err.constraint().and_then(|constraint| match constraint {
                CNT_CATEGORY_SLUG | CNT_PHOTO_SLUG => {
                    Some(DomainError::Conflict("slug already exists".into()))
                }
                CNT_FRAME_STYLE => Some(DomainError::Conflict("Frame style already exists".into())),
                CNT_FORMAT_NAME => Some(DomainError::Conflict("Format name already exists".into())),
                CNT_PHOTO_CATEGORY => Some(DomainError::NotFound("Category not found".into())),
                CNT_PRICE_SIZE => Some(DomainError::NotFound("Size not found".into())),
                _ => None,
            });
            if let Some(mapped) = known {
                return mapped;
            }

            // Constraints without a dedicated message fall back to the SQLSTATE class.
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Converts a `COUNT(*)` result, which Postgres reports as a signed bigint.
pub(crate) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_are_persistence_failures() {
        let mapped = map_sqlx(sqlx::Error::PoolTimedOut);
        assert!(matches!(mapped, DomainError::Persistence(_)));
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(count_to_u64(-1), 0);
        assert_eq!(count_to_u64(7), 7);
    }
}
