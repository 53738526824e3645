pub mod filter;
pub mod form;
pub mod image_fallback;
pub mod session;

pub use filter::FilterState;
pub use form::{FormController, FormPhase, SubmitOutcome, SubmitRejected, SubmitTicket};
pub use image_fallback::{ImageFallback, ImageFallbacks, ImageStage};
pub use session::{MemorySessionStore, Session, SessionContext, SessionStore};
