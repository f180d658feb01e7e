use thiserror::Error;

const WHATSAPP_BASE: &str = "https://wa.me/";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("not a WhatsApp link: {0}")]
    NotWhatsApp(String),
    #[error("invalid phone number: {0}")]
    InvalidPhone(String),
    #[error("link has no text parameter")]
    MissingText,
    #[error("couldn't decode text parameter")]
    BadEncoding,
}

/// Builds a `wa.me` deep link that opens a chat with `phone` and `message` pre-filled.
///
/// `phone` is the international number without `+` or separators.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!(
        "{WHATSAPP_BASE}{phone}?text={}",
        urlencoding::encode(message)
    )
}

/// Builds a `mailto:` link with a pre-filled subject and body.
///
/// Spaces are encoded as `%20` since mail clients don't read `+` as a space.
pub fn mailto_url(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{address}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Splits a link built by [`whatsapp_url`] back into phone and message.
pub fn parse_whatsapp_url(url: &str) -> Result<(String, String), LinkError> {
    let rest = url
        .strip_prefix(WHATSAPP_BASE)
        .ok_or_else(|| LinkError::NotWhatsApp(url.to_string()))?;
    let (phone, query) = rest.split_once('?').unwrap_or((rest, ""));
    if phone.is_empty() || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LinkError::InvalidPhone(phone.to_string()));
    }
    let text = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("text="))
        .ok_or(LinkError::MissingText)?;
    let message = urlencoding::decode(text).map_err(|_| LinkError::BadEncoding)?;
    Ok((phone.to_string(), message.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHONE: &str = "5519996107311";
    const MESSAGE: &str =
        "Olá Tayara! Vim através do seu portfólio e gostaria de conversar sobre um projeto.";

    #[test]
    fn test_whatsapp_round_trip() {
        let url = whatsapp_url(PHONE, MESSAGE);
        let (phone, message) = parse_whatsapp_url(&url).expect("should parse our own link");
        assert_eq!(phone, PHONE);
        assert_eq!(message, MESSAGE);
    }

    #[test]
    fn test_whatsapp_encoding() {
        let url = whatsapp_url(PHONE, MESSAGE);
        assert!(url.starts_with("https://wa.me/5519996107311?text=Ol%C3%A1%20Tayara%21"));
        assert!(!url.contains(' '));
        assert!(!url.contains('+'));
        assert!(url.is_ascii());
    }

    #[test]
    fn test_reserved_characters_survive() {
        let message = "a&b=c?d#e/f+g 100% çã";
        let url = whatsapp_url(PHONE, message);
        assert_eq!(url.matches('?').count(), 1);
        assert!(!url.contains('#'));
        let (_, decoded) = parse_whatsapp_url(&url).expect("should parse");
        assert_eq!(decoded, message);
    }

    #[test]
    fn test_mailto() {
        let url = mailto_url(
            "tzampim@gmail.com",
            "Contato através do Portfólio",
            "Olá Tayara,\r\n\r\nGostaria de conversar sobre um projeto.",
        );
        assert_eq!(
            url,
            "mailto:tzampim@gmail.com?subject=Contato%20atrav%C3%A9s%20do%20Portf%C3%B3lio&body=Ol%C3%A1%20Tayara%2C%0D%0A%0D%0AGostaria%20de%20conversar%20sobre%20um%20projeto."
        );
    }

    #[test]
    fn test_parse_rejects_other_links() {
        assert_eq!(
            parse_whatsapp_url("https://example.com/123?text=hi"),
            Err(LinkError::NotWhatsApp("https://example.com/123?text=hi".to_string()))
        );
        assert_eq!(
            parse_whatsapp_url("https://wa.me/55-19?text=hi"),
            Err(LinkError::InvalidPhone("55-19".to_string()))
        );
        assert_eq!(
            parse_whatsapp_url("https://wa.me/5519996107311"),
            Err(LinkError::MissingText)
        );
        assert_eq!(
            parse_whatsapp_url("https://wa.me/5519996107311?text=%C3"),
            Err(LinkError::BadEncoding)
        );
    }
}
