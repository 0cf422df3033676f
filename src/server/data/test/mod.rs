mod departed_member;
mod welcome;
