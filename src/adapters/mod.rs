pub mod gemini_client_http;
pub mod key_value_filesystem;

pub use gemini_client_http::HttpGeminiService;
pub use key_value_filesystem::FilesystemKeyValueStore;
