use ip_scan::{validate, ScanError, ScanResult, Scanner, Tokenizer};
use rand::Rng;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Simplified test harness to verify address extraction.
fn check_extraction(haystack: &[u8], expected: &[&str]) {
    let scanner = Scanner::new().expect("Failed to build scanner");

    let actual: Vec<String> = scanner
        .extract(haystack)
        .map(|addr| addr.to_string())
        .collect();

    assert_eq!(
        actual,
        expected.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
        "\nFailed for haystack: {}\n",
        String::from_utf8_lossy(haystack)
    );
}

#[test]
fn test_url_line() {
    check_extraction(b"10.10.10.2 https://webserver.com", &["10.10.10.2"]);
}

#[test]
fn test_json_line() {
    check_extraction(br#"{"ip": "172.16.2.84"}"#, &["172.16.2.84"]);
}

#[test]
fn test_key_value_log_line() {
    check_extraction(
        br#"log -> time=13:10, event=foo, addr=192.168.0.2, desc="a foo went bar""#,
        &["192.168.0.2"],
    );
}

#[test]
fn test_sentence_with_trailing_period() {
    check_extraction(b"There's no place like 127.0.0.1.", &[]);
    check_extraction(b"IP address 8.8.8.8 is for Google DNS.", &["8.8.8.8"]);
}

#[test]
fn test_ipv6_variations() {
    check_extraction(
        b"Full: 2001:0db8:85a3:0000:0000:8a2e:0370:7334, Compressed: 2001:DB8::1, Local: ::1",
        &["2001:db8:85a3::8a2e:370:7334", "2001:db8::1", "::1"],
    );
}

#[test]
fn test_delimiters_and_junk() {
    check_extraction(
        b"text 1.1.1.1 text, 2.2.2.2; [3.3.3.3] (8.8.8.8) <9.9.9.9> '4.4.4.4'",
        &["1.1.1.1", "2.2.2.2", "3.3.3.3", "8.8.8.8", "9.9.9.9", "4.4.4.4"],
    );
}

#[test]
fn test_no_partial_matches() {
    // Addresses glued to other word characters stay glued.
    check_extraction(
        b"host1.2.3.4 1.2.3.4a 1.2.3.4.5 v6::1x 192.168.1.1:8080",
        &[],
    );
}

#[test]
fn test_zone_id_is_split_off() {
    // '%' is punctuation, so the zone becomes its own word.
    check_extraction(b"fe80::1%eth0", &["fe80::1"]);
}

#[test]
fn test_bracketed_ipv6_and_ports() {
    // '[' and ']' split, so the literal inside is a word of its own and the
    // ":443" left behind is rejected.
    check_extraction(b"[2001:db8::1]:443 [::1]", &["2001:db8::1", "::1"]);
}

#[test]
fn test_multiline_yaml() {
    check_extraction(
        b"servers:\n  - 10.0.0.1\n  - 10.0.0.2\nbackup: fd00::2\n",
        &["10.0.0.1", "10.0.0.2", "fd00::2"],
    );
}

#[test]
fn test_tokens_with_foreign_characters_rejected() {
    let tokenizer = Tokenizer::new().unwrap();
    let text = "z1.2.3.4 1.2.3.4g ::1h caf\u{e9}::1 1.2.3.4\u{e9}";
    for token in tokenizer.tokenize(text.as_bytes()) {
        let foreign = token
            .iter()
            .any(|&b| !(b.is_ascii_hexdigit() || b == b'.' || b == b':'));
        assert!(foreign, "{:?}", String::from_utf8_lossy(token));
        assert_eq!(validate(token), None);
    }
}

/// Stray non-UTF-8 bytes are glued to their word, not split out of it
#[test]
fn test_invalid_utf8_is_not_a_delimiter() {
    check_extraction(b"\xff10.0.0.1 x\xc3(192.168.0.1\xfe", &[]);
    check_extraction(b"\xff 10.0.0.1 \xc3(192.168.0.1)\xfe", &["10.0.0.1", "192.168.0.1"]);
}

#[test]
fn test_tokens_rejoin_to_input() {
    let tokenizer = Tokenizer::new().unwrap();
    let text = "  a.b, c:d;; {\"e\": [1.2.3.4]}\n\tf  ";
    let rejoined = tokenizer
        .tokenize(text.as_bytes())
        .map(|w| String::from_utf8_lossy(w).into_owned())
        .collect::<Vec<_>>()
        .join(" ");

    let collapsed = text
        .split(|c: char| tokenizer.is_delimiter(c))
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    assert_eq!(rejoined, collapsed);
    assert_eq!(rejoined, "a.b c:d e: 1.2.3.4 f");
}

#[test]
fn test_render_is_idempotent() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let addr = if rng.gen_bool(0.5) {
            IpAddr::V4(Ipv4Addr::from(rng.gen::<u32>()))
        } else {
            let mut segs: [u16; 8] = rng.gen();
            // Zero runs exercise '::' compression.
            for seg in segs.iter_mut() {
                if rng.gen_bool(0.4) {
                    *seg = 0;
                }
            }
            IpAddr::V6(Ipv6Addr::from(segs))
        };

        let rendered = addr.to_string();
        let parsed = validate(rendered.as_bytes()).expect("canonical form must parse");
        assert_eq!(parsed, addr);
        let again = validate(parsed.to_string().as_bytes()).unwrap();
        assert_eq!(again.to_string(), rendered);
    }
}

#[test]
fn test_scan_reader() {
    let scanner = Scanner::new().unwrap();
    let input: &[u8] = b"a 1.1.1.1\nb 2.2.2.2.\nc ::ffff:10.0.0.1\n";
    let result = scanner.scan("inline", input);
    assert_eq!(result.source(), "inline");
    assert!(result.error().is_none());
    let got: Vec<String> = result.addresses().iter().map(|a| a.to_string()).collect();
    assert_eq!(got, vec!["1.1.1.1", "::ffff:10.0.0.1"]);
}

#[test]
fn test_scan_empty_reader() {
    let scanner = Scanner::new().unwrap();
    let result = scanner.scan("nothing", std::io::empty());
    assert!(matches!(result.error(), Some(ScanError::Empty)));
    assert!(result.addresses().is_empty());
}

#[test]
fn test_scanner_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Scanner>();
    assert_send_sync::<ScanResult>();
}
