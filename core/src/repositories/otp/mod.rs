//! OTP repository: trait and in-memory mock

mod mock;
mod repository;

pub use mock::MockOtpRepository;
pub use repository::OtpRepository;
