pub mod form_handle;
pub mod session_state;

pub use form_handle::FormHandle;
pub use session_state::SessionState;
