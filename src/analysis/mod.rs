pub mod mentions;
pub mod sentiment;
pub mod text;
pub mod word_frequencies;
