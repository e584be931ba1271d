rust_i18n::i18n!("locales", fallback = "ko");

mod clock;
mod constraint;
mod field_validator;
mod message;
mod range;
mod selector;
mod types;

pub use clock::*;
pub use constraint::*;
pub use field_validator::*;
pub use message::*;
pub use range::*;
pub use selector::*;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod lecture;

        pub use lecture::*;
    }
}
