pub mod module;
pub mod mood;
pub mod question;
pub mod response;
pub mod results;
pub mod session;
