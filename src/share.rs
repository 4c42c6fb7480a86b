//! Share-link derivation.
//!
//! Builds the outbound share URLs for the currently displayed quotation.
//! Purely syntactic; the URLs are rendered and copied, never fetched.

const TWEET_INTENT_URL: &str = "https://twitter.com/intent/tweet";
const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";

/// Fixed hashtags carried by the tweet-intent URL.
///
const TWEET_HASHTAGS: &str = "citaDelDia,inspiracion";

/// Specify the supported share platforms.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareTarget {
    Twitter,
    WhatsApp,
}

impl ShareTarget {
    /// Return the display label for the platform.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            ShareTarget::Twitter => "Twitter",
            ShareTarget::WhatsApp => "WhatsApp",
        }
    }
}

/// A derived share URL for one platform.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareLink {
    pub target: ShareTarget,
    pub url: String,
}

/// Return the shareable payload string for a quotation.
///
fn share_payload(text: &str, author: &str) -> String {
    format!("\"{}\" - {}", text, author)
}

/// Derive the share links for a quotation, one per platform, each carrying
/// the URL-escaped payload in its `text` query parameter.
///
pub fn derive_share_links(text: &str, author: &str) -> Vec<ShareLink> {
    let encoded = urlencoding::encode(&share_payload(text, author)).into_owned();
    vec![
        ShareLink {
            target: ShareTarget::Twitter,
            url: format!(
                "{}?text={}&hashtags={}",
                TWEET_INTENT_URL, encoded, TWEET_HASHTAGS
            ),
        },
        ShareLink {
            target: ShareTarget::WhatsApp,
            url: format!("{}?text={}", WHATSAPP_SEND_URL, encoded),
        },
    ]
}
