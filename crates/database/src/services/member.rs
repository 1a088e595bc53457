use crate::entities::member;
use crate::error::ServiceError;
use crate::services::MAX_LIST_LIMIT;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QuerySelect,
};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Sparse update for a member. `None` leaves the stored value as it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub first_name: Option<String>,
    pub surname: Option<String>,
    pub address: Option<String>,
    pub zipcode: Option<String>,
    pub telephone: Option<String>,
    /// Written as-is; the referenced member is not looked up
    pub recommended_by_id: Option<i32>,
}

impl MemberPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn apply(self, member: &mut member::ActiveModel) {
        if let Some(first_name) = self.first_name {
            member.first_name = Set(first_name);
        }
        if let Some(surname) = self.surname {
            member.surname = Set(surname);
        }
        if let Some(address) = self.address {
            member.address = Set(address);
        }
        if let Some(zipcode) = self.zipcode {
            member.zipcode = Set(zipcode);
        }
        if let Some(telephone) = self.telephone {
            member.telephone = Set(telephone);
        }
        if let Some(recommended_by_id) = self.recommended_by_id {
            member.recommended_by_id = Set(Some(recommended_by_id));
        }
    }
}

/// A set of members together with every member on their recommender chains
#[derive(Clone, Debug, Default)]
pub struct MemberDirectory {
    members: HashMap<i32, member::Model>,
}

impl MemberDirectory {
    pub fn get(&self, id: i32) -> Option<&member::Model> {
        self.members.get(&id)
    }

    pub fn recommender_of(&self, member: &member::Model) -> Option<&member::Model> {
        member
            .recommended_by_id
            .and_then(|id| self.members.get(&id))
    }

    /// Returns `member` followed by its recommender, that member's recommender and so on.
    /// Stops at a dangling reference or before a member would repeat.
    pub fn chain<'a>(&'a self, member: &'a member::Model) -> Vec<&'a member::Model> {
        let mut chain = vec![member];
        let mut seen = HashSet::from([member.id]);
        let mut current = member;

        while let Some(next) = self.recommender_of(current) {
            if !seen.insert(next.id) {
                break;
            }
            chain.push(next);
            current = next;
        }

        chain
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl FromIterator<member::Model> for MemberDirectory {
    fn from_iter<I: IntoIterator<Item = member::Model>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().map(|m| (m.id, m)).collect(),
        }
    }
}

pub struct MemberService;

impl MemberService {
    pub async fn list(db: &DatabaseConnection, limit: u64) -> Result<Vec<member::Model>, DbErr> {
        member::Entity::find()
            .limit(limit.min(MAX_LIST_LIMIT))
            .all(db)
            .await
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<member::Model>, DbErr> {
        member::Entity::find_by_id(id).one(db).await
    }

    /// Loads `wanted` plus the full recommender closure of `seeds` and `wanted`.
    ///
    /// Each round fetches every referenced member that is neither loaded nor already
    /// requested, so dangling references and cycles end the loop.
    pub async fn load_directory(
        db: &DatabaseConnection,
        seeds: Vec<member::Model>,
        wanted: impl IntoIterator<Item = i32>,
    ) -> Result<MemberDirectory, DbErr> {
        let mut members: HashMap<i32, member::Model> =
            seeds.into_iter().map(|m| (m.id, m)).collect();
        let mut requested = HashSet::new();
        let mut pending: BTreeSet<i32> = wanted.into_iter().collect();

        loop {
            pending.extend(members.values().filter_map(|m| m.recommended_by_id));
            pending.retain(|id| !members.contains_key(id) && !requested.contains(id));

            if pending.is_empty() {
                break;
            }

            let ids: Vec<i32> = std::mem::take(&mut pending).into_iter().collect();
            requested.extend(ids.iter().copied());

            let found = member::Entity::find()
                .filter(member::Column::Id.is_in(ids))
                .all(db)
                .await?;
            members.extend(found.into_iter().map(|m| (m.id, m)));
        }

        Ok(MemberDirectory { members })
    }

    /// Applies `patch` to the member with `id` and returns the stored row
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        patch: MemberPatch,
    ) -> Result<member::Model, ServiceError> {
        let Some(existing) = Self::find_by_id(db, id).await? else {
            debug!("Member {id} not found, rejecting update");
            return Err(ServiceError::MemberNotFound);
        };

        if patch.is_empty() {
            return Ok(existing);
        }

        let mut active: member::ActiveModel = existing.into();
        patch.apply(&mut active);

        Ok(active.update(db).await?)
    }

    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
        let Some(existing) = Self::find_by_id(db, id).await? else {
            debug!("Member {id} not found, rejecting delete");
            return Err(ServiceError::MemberNotFound);
        };

        existing.delete(db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::services::fixtures::sample_member;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    #[test]
    fn test_chain_follows_recommenders() {
        let directory = MemberDirectory {
            members: HashMap::from([
                (1, sample_member(1, "Tim", None)),
                (2, sample_member(2, "Janice", Some(1))),
                (3, sample_member(3, "Gerald", Some(2))),
            ]),
        };

        let gerald = directory.get(3).unwrap();
        let names: Vec<&str> = directory
            .chain(gerald)
            .iter()
            .map(|m| m.first_name.as_str())
            .collect();

        assert_eq!(names, vec!["Gerald", "Janice", "Tim"]);
    }

    #[test]
    fn test_chain_stops_at_cycle_and_dangling_reference() {
        let directory = MemberDirectory {
            members: HashMap::from([
                (1, sample_member(1, "Tim", Some(2))),
                (2, sample_member(2, "Janice", Some(1))),
                (3, sample_member(3, "Gerald", Some(99))),
            ]),
        };

        assert_eq!(directory.chain(directory.get(1).unwrap()).len(), 2);
        assert_eq!(directory.chain(directory.get(3).unwrap()).len(), 1);
    }

    #[tokio::test]
    async fn test_load_directory_fetches_recommenders_until_closed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([
                vec![sample_member(2, "Janice", Some(1))],
                vec![sample_member(1, "Tim", None)],
            ])
            .into_connection();

        let seeds = vec![sample_member(3, "Gerald", Some(2))];
        let directory = MemberService::load_directory(&db, seeds, Vec::new())
            .await
            .unwrap();

        assert_eq!(directory.len(), 3);
        assert_eq!(db.into_transaction_log().len(), 2);
    }

    #[tokio::test]
    async fn test_load_directory_does_not_refetch_missing_members() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<member::Model>::new()])
            .into_connection();

        let seeds = vec![sample_member(3, "Gerald", Some(42))];
        let directory = MemberService::load_directory(&db, seeds, Vec::new())
            .await
            .unwrap();

        assert_eq!(directory.len(), 1);
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_load_directory_without_references_skips_queries() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let seeds = vec![sample_member(1, "Tim", None)];
        let directory = MemberService::load_directory(&db, seeds, Vec::new())
            .await
            .unwrap();

        assert_eq!(directory.len(), 1);
        assert!(db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_only_provided_fields() {
        let stored = sample_member(1, "Tim", None);
        let updated = member::Model {
            surname: "Boothe".to_string(),
            recommended_by_id: Some(4),
            ..stored.clone()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()], vec![updated.clone()]])
            .into_connection();

        let patch = MemberPatch {
            surname: Some("Boothe".to_string()),
            recommended_by_id: Some(4),
            ..MemberPatch::default()
        };
        let result = MemberService::update(&db, 1, patch).await.unwrap();

        assert_eq!(result, updated);
        assert_eq!(result.first_name, stored.first_name);
        assert_eq!(result.address, stored.address);

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("UPDATE"));
        assert!(log.contains("Boothe"));
        assert!(!log.contains("Tim"));
    }

    #[tokio::test]
    async fn test_update_with_empty_patch_skips_write() {
        let stored = sample_member(1, "Tim", None);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let result = MemberService::update(&db, 1, MemberPatch::default())
            .await
            .unwrap();

        assert_eq!(result, stored);
        assert_eq!(db.into_transaction_log().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_member() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<member::Model>::new()])
            .into_connection();

        let err = MemberService::update(&db, 999, MemberPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MemberNotFound));
    }

    #[tokio::test]
    async fn test_delete_existing_member() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_member(1, "Tim", None)]])
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        MemberService::delete(&db, 1).await.unwrap();

        let log = format!("{:?}", db.into_transaction_log());
        assert!(log.contains("DELETE"));
    }

    #[tokio::test]
    async fn test_delete_missing_member_issues_no_delete() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<member::Model>::new()])
            .into_connection();

        let err = MemberService::delete(&db, 999).await.unwrap_err();
        assert!(matches!(err, ServiceError::MemberNotFound));

        let log = db.into_transaction_log();
        assert_eq!(log.len(), 1);
        assert!(!format!("{log:?}").contains("DELETE"));
    }
}
