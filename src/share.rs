//! Share-link generation: a deterministic, reversible encoding of the cart
//! embedded in a URL.
//!
//! The cart serializes to a canonical JSON array of items (field order is
//! fixed by the `LineItem` schema) and the JSON bytes become a URL-safe
//! base64 token without padding. The full link is
//! `<origin>/share/<token>`; that shape is the interop contract with any
//! companion decoder.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use thiserror::Error;

use crate::cart::Cart;

/// Path segment between the origin and the token.
const SHARE_PATH: &str = "/share/";

/// Errors from encoding or decoding a share token.
#[derive(Debug, Error)]
pub enum ShareError {
    /// The cart could not be represented in the canonical text form.
    /// No partial link is ever surfaced when this happens.
    #[error("Canonical cart form error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The token is not valid URL-safe base64.
    #[error("Share token is not valid base64: {0}")]
    Token(#[from] base64::DecodeError),

    /// The decoded payload is not UTF-8 text.
    #[error("Share token payload is not UTF-8: {0}")]
    Payload(#[from] std::string::FromUtf8Error),
}

/// Encode the cart into a URL-safe share token.
///
/// Deterministic: the same cart value always yields the same token. No
/// timestamps or identifiers beyond the cart's own data are embedded.
pub fn encode_token(cart: &Cart) -> Result<String, ShareError> {
    let json = serde_json::to_string(cart.items())?;
    Ok(URL_SAFE_NO_PAD.encode(json.as_bytes()))
}

/// Decode a share token back into a cart.
///
/// Inverse of [`encode_token`]: item-for-item equality of id, name,
/// restaurant, price and quantity is preserved across the round trip.
pub fn decode_token(token: &str) -> Result<Cart, ShareError> {
    let bytes = URL_SAFE_NO_PAD.decode(token)?;
    let json = String::from_utf8(bytes)?;
    let items = serde_json::from_str(&json)?;
    Ok(Cart::new(items))
}

/// Build the full shareable link: `<origin>/share/<token>`.
pub fn share_link(origin: &str, cart: &Cart) -> Result<String, ShareError> {
    let token = encode_token(cart)?;
    Ok(format!("{}{}{}", origin.trim_end_matches('/'), SHARE_PATH, token))
}

/// Extract and decode the token from a full share link.
pub fn decode_link(link: &str) -> Result<Cart, ShareError> {
    let token = link
        .rsplit_once(SHARE_PATH)
        .map(|(_, token)| token)
        .unwrap_or(link);
    decode_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineItem;

    fn seed() -> Cart {
        Cart::new(vec![LineItem::new(
            "1",
            "Chicken Schezwan Fried Rice & Chilli Chicken Sauce",
            "The Red Box",
            309,
            1,
        )])
    }

    #[test]
    fn token_is_deterministic() {
        let cart = seed();
        let first = encode_token(&cart).unwrap();
        let second = encode_token(&cart).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn token_round_trips() {
        let cart = seed();
        let token = encode_token(&cart).unwrap();
        assert_eq!(decode_token(&token).unwrap(), cart);
    }

    #[test]
    fn token_is_url_safe() {
        let cart = seed();
        let token = encode_token(&cart).unwrap();
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn link_has_origin_and_share_path() {
        let link = share_link("https://food.example.com", &seed()).unwrap();
        assert!(link.starts_with("https://food.example.com/share/"));
    }

    #[test]
    fn link_round_trips() {
        let cart = seed();
        let link = share_link("https://food.example.com", &cart).unwrap();
        assert_eq!(decode_link(&link).unwrap(), cart);
    }

    #[test]
    fn trailing_slash_on_origin_is_normalized() {
        let link = share_link("https://food.example.com/", &seed()).unwrap();
        assert!(link.starts_with("https://food.example.com/share/"));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(decode_token("not!base64!").is_err());
    }

    #[test]
    fn valid_base64_with_bad_payload_is_rejected() {
        let token = URL_SAFE_NO_PAD.encode(b"{\"not\":\"an array\"}");
        assert!(decode_token(&token).is_err());
    }
}
