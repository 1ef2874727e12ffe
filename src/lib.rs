//! Message pipeline for the JUGAAD shopping-assistant chat.
//!
//! Platform neutral: the web widget and the terminal client both plug their
//! own [`transcript::TranscriptView`], [`backend::ChatBackend`] and
//! [`input::InputField`] into the same [`orchestrator::Orchestrator`].

pub mod backend;
pub mod clipboard;
pub mod coupon;
pub mod errors;
pub mod input;
pub mod models;
pub mod orchestrator;
pub mod renderer;
pub mod transcript;
pub mod typing;

pub use backend::ChatBackend;
pub use coupon::{is_coupon_payload, CouponCard, CouponLine, IconKind};
pub use errors::AppError;
pub use input::{InputController, InputEvent, InputField};
pub use models::{Message, Role};
pub use orchestrator::{Orchestrator, RequestState, SubmitOutcome};
pub use transcript::{Entry, EntryKind, Transcript, TranscriptView};
