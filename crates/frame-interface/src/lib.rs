#[macro_export]
macro_rules! common_derives {
    ($item:item) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            serde::Serialize,
            serde::Deserialize,
            specta::Type,
        )]
        $item
    };
}

pub mod frame;
pub mod order;

pub use frame::{SpeakerIdentity, WordFrame};
pub use order::{FrameOrderError, ensure_chronological};
