pub mod chat;
pub mod chat_room;
pub mod user_chat;
