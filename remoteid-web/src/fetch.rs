//! One-shot GET requests

use crate::request::create_cors_request;
use crate::transport::Transport;
use crate::types::{HttpMethod, ResponseType, Result, WebError};

/// Fetch a URL once and hand the response text to `callback`
///
/// Returns whatever the callback returns.
pub fn ajax_get_callback<T, F, R>(transport: &T, url: &str, callback: F) -> Result<R>
where
    T: Transport + ?Sized,
    F: FnOnce(&str) -> R,
{
    let request = create_cors_request(transport.capability(), HttpMethod::Get, url)
        .ok_or_else(|| WebError::CorsUnsupported { url: url.to_string() })?;

    let response = transport.send(&request)?;
    if response.is_success() {
        log::debug!("GET {} -> {}", url, response.status);
    } else {
        log::warn!("GET {} -> {}", url, response.status);
    }
    Ok(callback(&response.text()))
}

/// Fetch a URL once and hand the raw response bytes to `callback`
pub fn ajax_get_callback_binary<T, F, R>(transport: &T, url: &str, callback: F) -> Result<R>
where
    T: Transport + ?Sized,
    F: FnOnce(&[u8]) -> R,
{
    let request = create_cors_request(transport.capability(), HttpMethod::Get, url)
        .ok_or_else(|| WebError::CorsUnsupported { url: url.to_string() })?
        .with_response_type(ResponseType::ArrayBuffer);

    let response = transport.send(&request)?;
    if !response.is_success() {
        log::warn!("GET {} -> {}", url, response.status);
    }
    log::info!("got response length {}", response.byte_length());
    Ok(callback(response.bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{CorsCapability, CorsRequest};
    use crate::types::{Response, TransportError};
    use std::cell::RefCell;

    struct Fixed {
        capability: CorsCapability,
        status: u16,
        result: std::result::Result<Vec<u8>, TransportError>,
        seen: RefCell<Vec<CorsRequest>>,
    }

    impl Fixed {
        fn ok(body: &[u8]) -> Self {
            Self {
                capability: CorsCapability::Credentials,
                status: 200,
                result: Ok(body.to_vec()),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl Transport for Fixed {
        fn capability(&self) -> CorsCapability {
            self.capability
        }

        fn send(&self, request: &CorsRequest) -> std::result::Result<Response, TransportError> {
            self.seen.borrow_mut().push(request.clone());
            self.result.clone().map(|body| Response::new(self.status, body))
        }
    }

    #[test]
    fn test_text_callback() {
        let transport = Fixed::ok(b"OK");
        let len = ajax_get_callback(&transport, "/update", |text| {
            assert_eq!(text, "OK");
            text.len()
        })
        .unwrap();
        assert_eq!(len, 2);
        assert_eq!(transport.seen.borrow()[0].response_type, ResponseType::Text);
    }

    #[test]
    fn test_binary_callback_passes_raw_bytes() {
        let transport = Fixed::ok(&[0x00, 0xFF, 0x10]);
        let bytes = ajax_get_callback_binary(&transport, "/fw.bin", |bytes| bytes.to_vec()).unwrap();
        assert_eq!(bytes, vec![0x00, 0xFF, 0x10]);
        assert_eq!(
            transport.seen.borrow()[0].response_type,
            ResponseType::ArrayBuffer
        );
    }

    #[test]
    fn test_error_status_still_reaches_callback() {
        let mut transport = Fixed::ok(b"FAIL");
        transport.status = 500;
        let text = ajax_get_callback(&transport, "/update", str::to_string).unwrap();
        assert_eq!(text, "FAIL");
    }

    #[test]
    fn test_transport_error_propagates() {
        let mut transport = Fixed::ok(b"");
        transport.result = Err(TransportError::Timeout);
        let result = ajax_get_callback(&transport, "/", |_| ());
        assert!(matches!(result, Err(WebError::Transport(TransportError::Timeout))));
    }

    #[test]
    fn test_unsupported_cors_is_reported() {
        let mut transport = Fixed::ok(b"");
        transport.capability = CorsCapability::Unsupported;
        let result = ajax_get_callback(&transport, "/", |_| ());
        assert!(matches!(result, Err(WebError::CorsUnsupported { .. })));
        assert!(transport.seen.borrow().is_empty());
    }
}
