pub mod html;
pub mod slug;
