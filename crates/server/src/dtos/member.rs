use database::{
    entities::member,
    services::{MemberDirectory, MemberPatch},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a member, with the member who recommended them nested inside
#[derive(Debug, PartialEq, Serialize, ToSchema)]
pub struct MemberResponse {
    pub first_name: String,
    pub surname: String,
    #[schema(no_recursion)]
    pub recommended_by: Option<Box<MemberResponse>>,
}

impl MemberResponse {
    /// Projects `member` and its recommender chain as found in `directory`
    pub fn from_directory(member: &member::Model, directory: &MemberDirectory) -> Self {
        let chain = directory.chain(member);
        let recommended_by = chain
            .iter()
            .skip(1)
            .rev()
            .fold(None, |inner, m| Some(Box::new(Self::single(m, inner))));

        Self::single(member, recommended_by)
    }

    fn single(member: &member::Model, recommended_by: Option<Box<Self>>) -> Self {
        Self {
            first_name: member.first_name.clone(),
            surname: member.surname.clone(),
            recommended_by,
        }
    }
}

/// Partial member update; omitted and `null` fields are left unchanged
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MemberUpdateRequest {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub telephone: Option<String>,
    pub recommended_by_id: Option<i32>,
}

impl From<MemberUpdateRequest> for MemberPatch {
    fn from(request: MemberUpdateRequest) -> Self {
        Self {
            first_name: request.first_name,
            surname: request.surname,
            address: request.address,
            zipcode: request.zipcode,
            telephone: request.telephone,
            recommended_by_id: request.recommended_by_id,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDateTime;

    fn member(id: i32, first_name: &str, recommended_by_id: Option<i32>) -> member::Model {
        member::Model {
            id,
            surname: "Smith".to_string(),
            first_name: first_name.to_string(),
            address: "44 Highway Way".to_string(),
            zipcode: "52365".to_string(),
            telephone: "555-555-5555".to_string(),
            recommended_by_id,
            join_date: NaiveDateTime::default(),
        }
    }

    #[test]
    fn test_recommenders_are_nested() {
        let directory: MemberDirectory = [
            member(1, "Darren", None),
            member(2, "Tracy", Some(1)),
            member(3, "Tim", Some(2)),
        ]
        .into_iter()
        .collect();

        let response = MemberResponse::from_directory(directory.get(3).unwrap(), &directory);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["first_name"], "Tim");
        assert_eq!(json["recommended_by"]["first_name"], "Tracy");
        assert_eq!(json["recommended_by"]["recommended_by"]["first_name"], "Darren");
        assert!(json["recommended_by"]["recommended_by"]["recommended_by"].is_null());
    }

    #[test]
    fn test_recommender_cycle_terminates() {
        let directory: MemberDirectory = [member(1, "Anne", Some(2)), member(2, "Burton", Some(1))]
            .into_iter()
            .collect();

        let response = MemberResponse::from_directory(directory.get(1).unwrap(), &directory);

        let recommender = response.recommended_by.as_deref().unwrap();
        assert_eq!(recommender.first_name, "Burton");
        assert!(recommender.recommended_by.is_none());
    }

    #[test]
    fn test_update_request_keeps_nulls_as_unset() {
        let request: MemberUpdateRequest =
            serde_json::from_str(r#"{"surname": "Baker", "address": null}"#).unwrap();
        let patch = MemberPatch::from(request);

        assert_eq!(patch.surname.as_deref(), Some("Baker"));
        assert!(patch.address.is_none());
        assert!(patch.first_name.is_none());
    }
}
