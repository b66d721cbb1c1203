use accreq_core::format::result::JsonResult;

use super::{
    error::ActionError,
    request::{ActionRequest, UserInfo},
    Action,
};

pub fn authorize_admin(user: Option<&UserInfo>) -> Result<(), ActionError> {
    match user {
        None => Err(ActionError::Unauthorized(String::from(
            "Login is required to access this resource.",
        ))),
        Some(user) if !user.is_admin => {
            log::warn!("non-admin user {} denied", user.id);
            Err(ActionError::Forbidden(String::from(
                "Admin privilege is required to access this resource.",
            )))
        }
        Some(_) => Ok(()),
    }
}

pub struct AdminOnly<A> {
    inner: A,
}

impl<A: Action> AdminOnly<A> {
    pub fn new(inner: A) -> Self {
        Self { inner }
    }
    pub fn inner_mut(&mut self) -> &mut A {
        &mut self.inner
    }
}

impl<A: Action> Action for AdminOnly<A> {
    type Output = A::Output;

    fn execute(&mut self, request: &ActionRequest) -> Result<JsonResult<Self::Output>, ActionError> {
        authorize_admin(request.user())?;
        self.inner.execute(request)
    }
}
