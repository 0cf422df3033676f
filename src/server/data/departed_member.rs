use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::member::{DepartedMember, RecordDepartureParams};

pub struct DepartedMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartedMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a departure snapshot.
    ///
    /// # Arguments
    /// - `params` - Member data captured at departure
    /// - `total_points` - Balance at the moment of leaving
    /// - `times_left` - Departure counter including this departure
    /// - `leave_date` - When the member left
    pub async fn create(
        &self,
        params: RecordDepartureParams,
        total_points: i32,
        times_left: i32,
        leave_date: DateTime<Utc>,
    ) -> Result<DepartedMember, DbErr> {
        let entity = entity::departed_member::ActiveModel {
            member_id: ActiveValue::Set(params.member_id.to_string()),
            guild_id: ActiveValue::Set(params.guild_id.to_string()),
            leave_date: ActiveValue::Set(leave_date),
            username: ActiveValue::Set(params.profile.username),
            display_name: ActiveValue::Set(params.profile.display_name),
            highest_role: ActiveValue::Set(params.highest_role),
            total_points: ActiveValue::Set(total_points),
            join_date: ActiveValue::Set(params.join_date),
            times_left: ActiveValue::Set(times_left),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        DepartedMember::from_entity(entity)
    }

    /// Gets the member's most recent departure from a guild.
    pub async fn get_latest(
        &self,
        guild_id: u64,
        member_id: u64,
    ) -> Result<Option<DepartedMember>, DbErr> {
        entity::prelude::DepartedMember::find()
            .filter(entity::departed_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::departed_member::Column::MemberId.eq(member_id.to_string()))
            .order_by_desc(entity::departed_member::Column::LeaveDate)
            .one(self.db)
            .await?
            .map(DepartedMember::from_entity)
            .transpose()
    }

    /// Increments `times_left` on one departure row.
    ///
    /// # Returns
    /// - `Ok(true)` - Row updated
    /// - `Ok(false)` - No such row
    pub async fn increment_times_left(
        &self,
        guild_id: u64,
        member_id: u64,
        leave_date: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::DepartedMember::update_many()
            .col_expr(
                entity::departed_member::Column::TimesLeft,
                Expr::cust(r#""times_left" + 1"#),
            )
            .filter(entity::departed_member::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::departed_member::Column::MemberId.eq(member_id.to_string()))
            .filter(entity::departed_member::Column::LeaveDate.eq(leave_date))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
