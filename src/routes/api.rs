use actix_web::{HttpRequest, Responder, get, post, web};

use crate::forms::ListDefaults;
use crate::forms::documents::DocumentsQueryForm;
use crate::forms::leaves::LeavesQueryForm;
use crate::forms::personnel::PersonnelQueryForm;
use crate::forms::reassignments::ReassignmentsQueryForm;
use crate::forms::users::UsersQueryForm;
use crate::repository::SnapshotRepository;
use crate::routes::{parse_query, respond};
use crate::services::{
    documents as documents_service, leaves as leaves_service, personnel as personnel_service,
    reassignments as reassignments_service, snapshot as snapshot_service,
    users as users_service,
};

#[get("/v1/personnel")]
pub async fn api_v1_personnel(
    req: HttpRequest,
    repo: web::Data<SnapshotRepository>,
    defaults: web::Data<ListDefaults>,
) -> impl Responder {
    let form: PersonnelQueryForm = match parse_query(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    respond(
        personnel_service::load_personnel_page(repo.get_ref(), form, defaults.get_ref()),
        "list personnel",
    )
}

#[get("/v1/reassignments")]
pub async fn api_v1_reassignments(
    req: HttpRequest,
    repo: web::Data<SnapshotRepository>,
    defaults: web::Data<ListDefaults>,
) -> impl Responder {
    let form: ReassignmentsQueryForm = match parse_query(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    respond(
        reassignments_service::load_reassignments_page(repo.get_ref(), form, defaults.get_ref()),
        "list reassignments",
    )
}

#[get("/v1/documents")]
pub async fn api_v1_documents(
    req: HttpRequest,
    repo: web::Data<SnapshotRepository>,
    defaults: web::Data<ListDefaults>,
) -> impl Responder {
    let form: DocumentsQueryForm = match parse_query(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    respond(
        documents_service::load_documents_page(repo.get_ref(), form, defaults.get_ref()),
        "list documents",
    )
}

#[get("/v1/users")]
pub async fn api_v1_users(
    req: HttpRequest,
    repo: web::Data<SnapshotRepository>,
    defaults: web::Data<ListDefaults>,
) -> impl Responder {
    let form: UsersQueryForm = match parse_query(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    respond(
        users_service::load_users_page(repo.get_ref(), form, defaults.get_ref()),
        "list users",
    )
}

#[get("/v1/leaves")]
pub async fn api_v1_leaves(
    req: HttpRequest,
    repo: web::Data<SnapshotRepository>,
    defaults: web::Data<ListDefaults>,
) -> impl Responder {
    let form: LeavesQueryForm = match parse_query(&req) {
        Ok(form) => form,
        Err(response) => return response,
    };

    respond(
        leaves_service::load_leaves_page(repo.get_ref(), form, defaults.get_ref()),
        "list leaves",
    )
}

#[post("/v1/snapshot/reload")]
pub async fn api_v1_reload_snapshot(repo: web::Data<SnapshotRepository>) -> impl Responder {
    respond(
        snapshot_service::reload_snapshot(repo.get_ref()),
        "reload snapshot",
    )
}
