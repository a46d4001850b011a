//! Full router tests: authentication gate, session cookies and end-to-end run logging.

mod router;
mod scenario;
