pub mod file;
pub mod http;

pub use file::FileProjectSource;
pub use http::HttpProjectSource;
