use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Incoming Task fields, shared by create and both update flavors.
/// Everything is optional at the deserialization layer so a missing
/// `title` surfaces as a 400 error map rather than a body rejection;
/// required-field checks live in [`TaskPayload::validate_payload`].
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct TaskPayload {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters."
    ))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl TaskPayload {
    /// Validate with a `partial` switch: a partial payload only checks
    /// the fields that are present, a full payload additionally
    /// requires `title`.
    pub fn validate_payload(&self, partial: bool) -> Result<(), ValidationErrors> {
        let mut errors = match self.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !partial && self.title.is_none() {
            let mut required = ValidationError::new("required");
            required.message = Some("This field is required.".into());
            errors.add("title", required);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
