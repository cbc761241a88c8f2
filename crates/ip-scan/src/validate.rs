use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use bstr::ByteSlice;
use memchr::{memchr, memchr2};

/// Longest IPv6 literal: six full groups followed by a dotted quad.
const MAX_IPV6_LEN: usize = "ffff:ffff:ffff:ffff:ffff:ffff:255.255.255.255".len();

/// Classify a candidate token as an IP address.
///
/// The whole token must be a literal: anything before or after the address (a trailing
/// `.`, a zone id, a port) makes it "not an address". Rejection is not an error, just
/// `None`.
///
/// # Example
///
/// ```
/// use ip_scan::validate;
///
/// assert_eq!(validate(b"127.0.0.1"), Some("127.0.0.1".parse().unwrap()));
/// assert_eq!(validate(b"127.0.0.1."), None);
/// assert_eq!(validate(b"2001:DB8::1"), Some("2001:db8::1".parse().unwrap()));
/// assert_eq!(validate(b"13:10"), None);
/// ```
#[inline]
pub fn validate(token: &[u8]) -> Option<IpAddr> {
    if token.len() < 2 || token.len() > MAX_IPV6_LEN {
        return None;
    }
    memchr2(b'.', b':', token)?;
    if !token.iter().all(|&b| is_literal_byte(b)) {
        return None;
    }
    if memchr(b':', token).is_some() {
        parse_ipv6_bytes(token).map(IpAddr::V6)
    } else {
        parse_ipv4_bytes(token).map(IpAddr::V4)
    }
}

#[inline(always)]
fn is_literal_byte(b: u8) -> bool {
    matches!(b, b'0'..=b'9' | b'a'..=b'f' | b'A'..=b'F' | b'.' | b':')
}

/// Parse an IPv4 address from a byte slice.
///
/// Performs strict validation of dotted-quad notation (e.g., `192.168.1.1`).
/// Rejects:
/// - Octet values > 255
/// - Leading zeros (e.g., `192.168.001.1`)
/// - Anything other than exactly four octets
///
/// # Example
///
/// ```
/// use ip_scan::parse_ipv4_bytes;
///
/// assert_eq!(parse_ipv4_bytes(b"192.168.1.1"), Some("192.168.1.1".parse().unwrap()));
/// assert_eq!(parse_ipv4_bytes(b"256.1.1.1"), None);  // Out of range
/// assert_eq!(parse_ipv4_bytes(b"192.168.01.1"), None);  // Leading zero
/// ```
#[inline]
pub fn parse_ipv4_bytes(bytes: &[u8]) -> Option<Ipv4Addr> {
    if bytes.len() < 7 || bytes.len() > 15 {
        return None;
    }
    let mut octets = [0u8; 4];
    let mut octet_idx = 0;
    let mut current_val = 0u16;
    let mut digits_in_octet = 0;
    for &b in bytes {
        match b {
            b'.' => {
                if digits_in_octet == 0 || octet_idx == 3 {
                    return None;
                }
                octets[octet_idx] = current_val as u8;
                octet_idx += 1;
                current_val = 0;
                digits_in_octet = 0;
            }
            b'0'..=b'9' => {
                if digits_in_octet > 0 && current_val == 0 {
                    return None;
                }
                current_val = current_val * 10 + (b - b'0') as u16;
                if current_val > 255 {
                    return None;
                }
                digits_in_octet += 1;
            }
            _ => return None,
        }
    }
    if octet_idx != 3 || digits_in_octet == 0 {
        return None;
    }
    octets[3] = current_val as u8;
    Some(Ipv4Addr::from(octets))
}

/// Parse an IPv6 address from a byte slice.
///
/// Accepts the RFC 4291 text forms: eight groups of one to four hex digits, a single
/// `::` standing in for one or more zero groups, and an optional trailing dotted quad
/// (`::ffff:192.0.2.1`). The dotted quad follows the same rules as
/// [`parse_ipv4_bytes`].
///
/// # Example
///
/// ```
/// use ip_scan::parse_ipv6_bytes;
///
/// assert!(parse_ipv6_bytes(b"::1").is_some());
/// assert!(parse_ipv6_bytes(b"::ffff:192.0.2.1").is_some());
/// assert!(parse_ipv6_bytes(b"1::2::3").is_none());     // Two compressions
/// assert!(parse_ipv6_bytes(b"fe80::1%eth0").is_none()); // Zone id
/// ```
#[inline]
pub fn parse_ipv6_bytes(bytes: &[u8]) -> Option<Ipv6Addr> {
    if bytes.len() < 2 || bytes.len() > MAX_IPV6_LEN {
        return None;
    }
    bytes.to_str().ok()?.parse::<Ipv6Addr>().ok()
}
