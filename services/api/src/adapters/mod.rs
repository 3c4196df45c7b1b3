pub mod clock;
pub mod gateway_client;
pub mod session_file;

pub use clock::TokioClock;
pub use gateway_client::HttpGateway;
pub use session_file::FileSessionRepository;
