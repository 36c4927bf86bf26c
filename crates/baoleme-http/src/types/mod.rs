pub mod envelope;
pub mod request;
pub mod response;
pub mod role;

pub use envelope::{Envelope, SUCCESS_CODE};
pub use request::{ApiRequest, Body, Credential, FormPart};
pub use response::ApiResponse;
pub use role::Role;
