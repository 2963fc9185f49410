use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::{Channel, DispatchAction};

/// Characters `encodeURIComponent` leaves untouched, on top of ASCII alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub struct WhatsAppChannel {
    phone_digits: String,
}

impl WhatsAppChannel {
    pub fn new(owner_phone: &str) -> Self {
        Self {
            phone_digits: owner_phone.chars().filter(|c| c.is_ascii_digit()).collect(),
        }
    }

    pub fn phone_digits(&self) -> &str {
        &self.phone_digits
    }
}

impl Channel for WhatsAppChannel {
    fn dispatch(&self, message: &str) -> DispatchAction {
        let text = utf8_percent_encode(message, URI_COMPONENT);
        DispatchAction::OpenUrl {
            url: format!("https://wa.me/{}?text={text}", self.phone_digits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;
    use url::Url;

    #[test]
    fn test_strips_non_digits() {
        let channel = WhatsAppChannel::new("+33 (0)6 12-34.56 78");
        assert_eq!(channel.phone_digits(), "330612345678");
    }

    #[test]
    fn test_link_targets_wa_me() {
        let channel = WhatsAppChannel::new("+33612345678");
        let action = channel.dispatch("Bonjour");

        let url = Url::parse(action.url()).unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/33612345678");
        assert!(matches!(action, DispatchAction::OpenUrl { .. }));
    }

    #[test]
    fn test_text_encoded_like_uri_component() {
        let channel = WhatsAppChannel::new("+33612345678");
        let action = channel.dispatch("Bonjour, d'écoute (1+1) a&b=c ~*!\n");

        assert_eq!(
            action.url(),
            "https://wa.me/33612345678?text=Bonjour%2C%20d'%C3%A9coute%20(1%2B1)%20a%26b%3Dc%20~*!%0A"
        );
    }

    #[test]
    fn test_text_percent_decodes_to_message() {
        let message = "Bonjour, ça va ?\nNotes: a+b & c=d 100%";
        let action = WhatsAppChannel::new("+33612345678").dispatch(message);

        let encoded = action.url().split_once("?text=").unwrap().1;
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, message);
    }
}
