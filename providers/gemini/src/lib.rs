pub mod generator;
pub mod wire;

pub use generator::GeminiGenerator;
