// src/constants.rs
//
// Application-wide constants. Each one is the default for a setting that can be
// overridden in the TOML config (see `infrastructure/config.rs`).

/// Base URL of the Granola API.
pub const DEFAULT_BASE_URL: &str = "https://api.granola.ai";

/// Endpoint returning `{ docs: [...] }` for the signed-in user.
pub const LIST_DOCUMENTS_ENDPOINT: &str = "/v2/get-documents";

/// Endpoint returning the transcript segments of a single document.
pub const TRANSCRIPT_ENDPOINT: &str = "/v1/get-document-transcript";

/// Client identification sent with every request. The API rejects unknown clients.
pub const DEFAULT_USER_AGENT: &str = "Granola/5.354.0";
pub const DEFAULT_CLIENT_VERSION: &str = "5.354.0";

/// Location of the desktop app's token file, relative to the platform data dir
/// (`~/Library/Application Support` on macOS).
pub const CREDENTIALS_RELATIVE_PATH: &str = "Granola/supabase.json";

/// Field in the token file holding a JSON-encoded string with `access_token`.
pub const TOKENS_FIELD: &str = "workos_tokens";

/// How many recent documents are scanned when looking up notes by id.
///
/// Documents older than this window are reported as having no notes.
///
/// Used in: `application/document_viewer.rs`
pub const NOTES_LOOKUP_WINDOW: usize = 100;

/// How many recent documents are scanned when looking for the latest 1:1.
///
/// Used in: `application/meeting_finder.rs`
pub const MEETING_SEARCH_WINDOW: usize = 50;

/// Default number of documents for `list`.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Default number of recent documents searched by `search`.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Title markers identifying a one-on-one meeting.
pub const ONE_ON_ONE_MARKERS: &[&str] = &["1:1", "1x1"];
