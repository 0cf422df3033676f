use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::all::{Context, GuildId, GuildMemberUpdateEvent, Member, User};

use crate::server::{
    model::member::{MemberProfile, RecordDepartureParams},
    service::{ledger::LedgerService, member::MemberService, welcome::WelcomeService},
};

/// Handles the guild_member_addition event when a member joins a guild.
///
/// Marks a returning member's latest departure, ensures a leaderboard entry and starts a
/// new onboarding period with starter quests. New members start without a mentor.
pub async fn handle_guild_member_addition(
    db: &DatabaseConnection,
    starter_quest_ids: &[String],
    _ctx: Context,
    new_member: Member,
) {
    if new_member.user.bot {
        return;
    }

    let user_id = new_member.user.id.get();
    let guild_id = new_member.guild_id.get();
    let profile = member_profile(&new_member);

    match MemberService::new(db).record_return(guild_id, user_id).await {
        Ok(true) => tracing::info!("Member {} returned to guild {}", profile.username, guild_id),
        Ok(false) => {}
        Err(e) => tracing::error!("Failed to record return of member {}: {:?}", user_id, e),
    }

    if let Err(e) = LedgerService::new(db)
        .add_member(guild_id, user_id, &profile)
        .await
    {
        tracing::error!(
            "Failed to add member {} to leaderboard of guild {}: {:?}",
            user_id,
            guild_id,
            e
        );
    }

    if let Err(e) = WelcomeService::new(db)
        .enroll_member(guild_id, user_id, None, starter_quest_ids)
        .await
    {
        tracing::error!(
            "Failed to enroll member {} in guild {}: {:?}",
            user_id,
            guild_id,
            e
        );
    }
}

/// Handles the guild_member_removal event when a member leaves a guild.
///
/// Uses the cached member data for the departure snapshot when Discord provides it.
pub async fn handle_guild_member_removal(
    db: &DatabaseConnection,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    member_data_if_available: Option<Member>,
) {
    if user.bot {
        return;
    }

    let (profile, highest_role, join_date) = match &member_data_if_available {
        Some(member) => (
            member_profile(member),
            highest_role_name(&ctx, member),
            member
                .joined_at
                .and_then(|at| DateTime::<Utc>::from_timestamp(at.unix_timestamp(), 0)),
        ),
        None => (
            MemberProfile::new(user.name.clone(), user.display_name()),
            None,
            None,
        ),
    };

    let params = RecordDepartureParams {
        guild_id: guild_id.get(),
        member_id: user.id.get(),
        profile,
        highest_role,
        join_date,
    };

    if let Err(e) = MemberService::new(db).record_departure(params).await {
        tracing::error!(
            "Failed to record departure of member {} from guild {}: {:?}",
            user.id,
            guild_id,
            e
        );
    }
}

/// Handles the guild_member_update event when a member is updated in a guild (nickname, etc.)
///
/// Refreshes the names cached on the member's leaderboard entry.
pub async fn handle_guild_member_update(
    db: &DatabaseConnection,
    _ctx: Context,
    _old: Option<Member>,
    new: Option<Member>,
    _event: GuildMemberUpdateEvent,
) {
    let Some(member) = new else {
        return;
    };
    if member.user.bot {
        return;
    }

    let guild_id = member.guild_id.get();
    let profile = member_profile(&member);

    if let Err(e) = LedgerService::new(db)
        .add_member(guild_id, member.user.id.get(), &profile)
        .await
    {
        tracing::error!(
            "Failed to refresh leaderboard names for member {} in guild {}: {:?}",
            member.user.id,
            guild_id,
            e
        );
    } else {
        tracing::debug!(
            "Refreshed leaderboard names for {} in guild {}",
            profile.display_name,
            guild_id
        );
    }
}

fn member_profile(member: &Member) -> MemberProfile {
    MemberProfile::new(member.user.name.clone(), member.display_name())
}

/// Name of the member's highest positioned role, looked up in the guild cache.
fn highest_role_name(ctx: &Context, member: &Member) -> Option<String> {
    let guild = ctx.cache.guild(member.guild_id)?;

    member
        .roles
        .iter()
        .filter_map(|role_id| guild.roles.get(role_id))
        .max_by_key(|role| role.position)
        .map(|role| role.name.clone())
}
