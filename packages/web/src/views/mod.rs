mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod profile;
pub use profile::{Information, Profile};

mod departments;
pub use departments::{Bph, DepartmentDetail};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod user;
pub use user::UserSettings;

mod blog;
pub use blog::{BlogDetail, BlogList};

mod forum;
pub use forum::{ForumCreate, ForumDetail, ForumList};

mod gallery;
pub use gallery::{EventPhotos, Gallery};

mod errors;
pub use errors::{Forbidden, NotFound, NotFoundPage, ServerError};

use store::forms::Field;
use store::FormError;

/// Message to show under `field`, if the last submission failed on it.
pub(crate) fn field_error(error: &Option<FormError>, field: Field) -> Option<String> {
    error
        .as_ref()
        .filter(|err| err.field() == Some(field))
        .map(FormError::user_message)
}

/// Message for the banner above a form: anything not tied to one field.
pub(crate) fn form_banner(error: &Option<FormError>) -> Option<String> {
    error
        .as_ref()
        .filter(|err| err.field().is_none())
        .map(FormError::user_message)
}
