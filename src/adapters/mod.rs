// Adapters - concrete implementations of the ports

pub mod gemini;
pub mod probe_ffprobe;

pub use gemini::GeminiClient;
pub use probe_ffprobe::FfprobeAdapter;
