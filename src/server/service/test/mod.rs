mod reward;
mod welcome;
