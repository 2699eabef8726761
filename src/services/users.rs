use crate::domain::user::User;
use crate::dto::list::ListPageData;
use crate::forms::ListDefaults;
use crate::forms::users::UsersQueryForm;
use crate::repository::UserReader;
use crate::services::{ServiceResult, render_page};

/// Loads the requested page of dashboard accounts.
pub fn load_users_page<R>(
    repo: &R,
    form: UsersQueryForm,
    defaults: &ListDefaults,
) -> ServiceResult<ListPageData<User>>
where
    R: UserReader + ?Sized,
{
    let state = form.into_state(defaults).map_err(|err| {
        log::error!("Invalid users query: {err}");
        err
    })?;

    let users = repo.list_users().map_err(|err| {
        log::error!("Failed to load users: {err}");
        err
    })?;

    Ok(render_page(users, &state))
}
