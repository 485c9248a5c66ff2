pub mod bug;
pub mod carousel;
pub mod constants;
pub mod contact;
pub mod cursor;
pub mod language;
pub mod lightbox;
pub mod notice;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod skills;
pub mod timing;
