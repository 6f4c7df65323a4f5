// Handlers module

pub mod chat;
pub mod login;
pub mod register;
pub mod root;

pub use chat::{chat, chat_handler};
pub use login::{login, login_handler};
pub use register::{register, register_handler};
pub use root::root_handler;
