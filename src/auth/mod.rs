mod login;

pub use login::{LoginRequest, LoginResponse, SESSION_TOKEN_STUB, USER_ID_STUB, login};
