//! Endpoint configuration.

use serde::{Deserialize, Serialize};

/// Base URLs of the spreadsheet-backed script endpoints.
///
/// Each URL serves reads via `GET [?action=...]` and writes via `POST`
/// with an action-tagged JSON body. Overridable so tests can point at a
/// mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetEndpoints {
    /// Donor registry endpoint.
    pub donor_url: String,
    /// Blood request endpoint (also receives volunteer offers).
    pub request_url: String,
    /// Contact message endpoint.
    pub contact_url: String,
    /// Content endpoint serving both blog posts and events.
    pub content_url: String,
}

impl Default for SheetEndpoints {
    fn default() -> Self {
        Self {
            donor_url:
                "https://script.google.com/macros/s/AKfycbw4bAdKZ25R8y9nzWvARKIVhIzWqoa5oIvbtDVqrHTuMNeKOVLBfCEUrMSsRnYsSKRonA/exec"
                    .to_string(),
            request_url:
                "https://script.google.com/macros/s/AKfycbxqR27BSDvcx5PMT1RAXF_uNfCE4rVHdW3Njgy2pkW1N8kMTUyXrPWoUuF8iDIljkzorQ/exec"
                    .to_string(),
            contact_url:
                "https://script.google.com/macros/s/AKfycbzFNTZUthjJYO9wm-K1UsytrK2Ik5Y_v2TlMOeRlko3BZGoAJyex7m0Bntl6oUbd6Ry/exec"
                    .to_string(),
            content_url:
                "https://script.google.com/macros/s/AKfycbzre_5bJEeZevGSADQOZMaLynFYUf09M-v1Hke8jg2KHfil_Qt0j4miam74Az1VUyOYOg/exec"
                    .to_string(),
        }
    }
}

impl SheetEndpoints {
    /// Points every endpoint at the same base URL. Intended for tests.
    #[must_use]
    pub fn with_base(base: &str) -> Self {
        Self {
            donor_url: format!("{base}/donors"),
            request_url: format!("{base}/requests"),
            contact_url: format!("{base}/contact"),
            content_url: format!("{base}/content"),
        }
    }
}
