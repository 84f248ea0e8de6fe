use validator::Validate;

use crate::errors::AppError;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        let details = err.field_errors()
            .iter()
            .map(|(field, errs)| {
                let errors = errs.iter()
                    .map(|e| e.message.as_deref().unwrap_or(e.code.as_ref()).to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}: {}", field, errors)
            })
            .collect::<Vec<_>>()
            .join("; ");
        AppError::BadRequest(format!("Validation failed: {}", details))
    })
}
