use crate::{
    app::AppState,
    dtos::{
        ListParams,
        member::{MemberResponse, MemberUpdateRequest},
    },
    error::{ApiError, ErrorBody},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use database::services::MemberService;

/// List members with their recommenders
#[utoipa::path(
    get,
    path = "/user/all",
    params(ListParams),
    responses(
        (status = 200, description = "Members retrieved successfully", body = Vec<MemberResponse>),
        (status = 400, description = "Invalid query parameters"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Members"
)]
pub async fn get_all_members(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = MemberService::list(&state.db, params.limit).await?;
    let directory = MemberService::load_directory(&state.db, members.clone(), Vec::new()).await?;

    let response = members
        .iter()
        .map(|member| MemberResponse::from_directory(member, &directory))
        .collect();

    Ok(Json(response))
}

/// Update the provided fields of a member
#[utoipa::path(
    put,
    path = "/user/{member_id}",
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    request_body = MemberUpdateRequest,
    responses(
        (status = 200, description = "Member updated", body = MemberResponse),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Members"
)]
pub async fn update_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
    Json(request): Json<MemberUpdateRequest>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = MemberService::update(&state.db, member_id, request.into()).await?;
    let directory =
        MemberService::load_directory(&state.db, vec![member.clone()], Vec::new()).await?;

    Ok(Json(MemberResponse::from_directory(&member, &directory)))
}

/// Delete a member
#[utoipa::path(
    delete,
    path = "/user/{member_id}",
    params(
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    ),
    tag = "Members"
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(member_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    MemberService::delete(&state.db, member_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
