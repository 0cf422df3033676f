pub use super::departed_member::Entity as DepartedMember;
pub use super::leaderboard::Entity as Leaderboard;
pub use super::quest::Entity as Quest;
pub use super::quest_progress::Entity as QuestProgress;
pub use super::welcome_automation::Entity as WelcomeAutomation;
