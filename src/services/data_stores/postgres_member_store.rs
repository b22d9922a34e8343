use color_eyre::eyre::eyre;
use sqlx::PgPool;

use crate::domain::{
    Member, MemberId, MemberName, MemberStore, MemberStoreError,
};

pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: i64,
    name: String,
}

impl TryFrom<MemberRow> for Member {
    type Error = MemberStoreError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        let name = MemberName::parse(&row.name)
            .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;
        Ok(Member::new(name).with_id(MemberId::new(row.id)))
    }
}

#[async_trait::async_trait]
impl MemberStore for PostgresMemberStore {
    #[tracing::instrument(name = "Saving member to PostgreSQL", skip_all)]
    async fn save(&self, member: Member) -> Result<Member, MemberStoreError> {
        if let Some(id) = member.id {
            return Err(MemberStoreError::AlreadyPersisted(id));
        }

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO members (name) VALUES ($1) RETURNING id
            "#,
        )
        .bind(member.name.as_ref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                MemberStoreError::NameConflict
            }
            e => MemberStoreError::UnexpectedError(eyre!(e)),
        })?;

        Ok(member.with_id(MemberId::new(id)))
    }

    #[tracing::instrument(name = "Finding member by ID in PostgreSQL", skip_all)]
    async fn find_by_id(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberStoreError> {
        sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name FROM members WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?
        .map(Member::try_from)
        .transpose()
    }

    #[tracing::instrument(
        name = "Finding member by name in PostgreSQL",
        skip_all
    )]
    async fn find_by_name(
        &self,
        name: &MemberName,
    ) -> Result<Option<Member>, MemberStoreError> {
        sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name FROM members WHERE name = $1 LIMIT 1
            "#,
        )
        .bind(name.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?
        .map(Member::try_from)
        .transpose()
    }

    #[tracing::instrument(name = "Listing members from PostgreSQL", skip_all)]
    async fn find_all(&self) -> Result<Vec<Member>, MemberStoreError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name FROM members ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

        rows.into_iter().map(Member::try_from).collect()
    }
}
