// ============================================================================
// ACCOUNT VIEWMODEL - Login / signup forms
// ============================================================================

use std::rc::Rc;

use crate::error::AppError;
use crate::models::{LoginVariables, SignupVariables};
use crate::services::{AuthService, BookshelfApi};
use crate::state::{AccountFormState, AppServices, Notifier};

pub struct AccountViewModel {
    bookshelf: Rc<dyn BookshelfApi>,
    auth: AuthService,
    notify: Notifier,
}

fn required(value: String, field: &'static str) -> Result<String, AppError> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(AppError::MissingField(field))
    } else {
        Ok(value)
    }
}

pub fn login_variables(form: &AccountFormState) -> Result<LoginVariables, AppError> {
    Ok(LoginVariables {
        email: required(form.get_email(), "email")?,
        password: required(form.get_password(), "password")?,
    })
}

pub fn signup_variables(form: &AccountFormState) -> Result<SignupVariables, AppError> {
    Ok(SignupVariables {
        username: required(form.get_username(), "username")?,
        email: required(form.get_email(), "email")?,
        password: required(form.get_password(), "password")?,
    })
}

impl AccountViewModel {
    pub fn new(services: &AppServices) -> Self {
        Self {
            bookshelf: services.bookshelf.clone(),
            auth: services.auth.clone(),
            notify: Rc::new(|| {}),
        }
    }

    pub fn with_notifier(mut self, notify: Notifier) -> Self {
        self.notify = notify;
        self
    }

    fn set_submitting(&self, form: &AccountFormState, submitting: bool) {
        form.set_submitting(submitting);
        (self.notify)();
    }

    pub async fn login(&self, form: &AccountFormState) -> Result<(), AppError> {
        let variables = login_variables(form)?;

        self.set_submitting(form, true);
        let result = self.bookshelf.login(&variables).await;
        self.set_submitting(form, false);

        self.finish(form, result.map(|payload| payload.token))
    }

    pub async fn signup(&self, form: &AccountFormState) -> Result<(), AppError> {
        let variables = signup_variables(form)?;

        self.set_submitting(form, true);
        let result = self.bookshelf.add_user(&variables).await;
        self.set_submitting(form, false);

        self.finish(form, result.map(|payload| payload.token))
    }

    // Fields are cleared either way; the alert only on failure
    fn finish(&self, form: &AccountFormState, token: Result<String, AppError>) -> Result<(), AppError> {
        form.clear();
        match token.and_then(|token| self.auth.login(&token)) {
            Ok(()) => {
                form.set_alert(false);
                Ok(())
            }
            Err(e) => {
                form.set_alert(true);
                Err(e)
            }
        }
    }
}
