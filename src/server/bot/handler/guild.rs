//! Guild event handlers for leaderboard synchronization.
//!
//! `guild_create` fires on startup for every guild the bot is in, when it joins a new
//! guild, and when a guild comes back after an outage. Each time, every human member is
//! ensured a leaderboard entry and has their cached names refreshed, so members who joined
//! while the bot was offline still show up. Balances are never changed here.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, Member};

use crate::server::{model::member::MemberProfile, service::ledger::LedgerService};

/// Maximum number of members to fetch per API request.
///
/// Discord's API supports up to 1000 members per request.
static MEMBERS_PER_REQUEST: u64 = 1000;

/// Handles the guild_create event when a guild becomes available or the bot joins a new guild.
///
/// Fetches every member with pagination (requires the GUILD_MEMBERS intent), then adds
/// each non-bot member to the leaderboard.
///
/// # Arguments
/// - `db` - Database connection for the ledger
/// - `ctx` - Discord context for member pagination
/// - `guild` - Guild data from Discord
/// - `_is_new` - Whether this is a new guild join (unused)
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild_id,
        guild.member_count,
    );

    let mut all_members: Vec<Member> = Vec::new();
    let mut after: Option<u64> = None;

    loop {
        match ctx
            .http
            .get_guild_members(guild.id, Some(MEMBERS_PER_REQUEST), after)
            .await
        {
            Ok(members) => {
                if members.is_empty() {
                    break;
                }

                after = members.last().map(|m| m.user.id.get());
                let fetched_count = members.len();
                all_members.extend(members);

                if fetched_count < MEMBERS_PER_REQUEST as usize {
                    break;
                }
            }
            Err(e) => {
                tracing::error!(
                    "Failed to fetch guild {} members from API: {:?}",
                    guild_id,
                    e
                );
                break;
            }
        }
    }

    let ledger = LedgerService::new(db);
    let mut synced = 0usize;

    for member in all_members.iter().filter(|m| !m.user.bot) {
        let profile = MemberProfile::new(member.user.name.clone(), member.display_name());

        if let Err(e) = ledger
            .add_member(guild_id, member.user.id.get(), &profile)
            .await
        {
            tracing::error!(
                "Failed to add member {} of guild {} to leaderboard: {:?}",
                member.user.id,
                guild_id,
                e
            );
        } else {
            synced += 1;
        }
    }

    tracing::info!(
        "Synced {} members to the leaderboard for guild {} ({})",
        synced,
        guild.name,
        guild_id
    );
}
