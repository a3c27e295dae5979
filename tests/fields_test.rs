use email_presence::{email_recovery, phone_number};

#[test]
fn test_email_recovery_found() {
    assert_eq!(
        email_recovery("[+] twitter.com Email recovery: ex****e@gmail.com").as_deref(),
        Some("ex****e@gmail.com")
    );
}

#[test]
fn test_email_recovery_absent() {
    assert!(email_recovery("[+] twitter.com").is_none());
    assert!(email_recovery("[+] twitter.com email recovery").is_none());
}

#[test]
fn test_email_recovery_empty_value() {
    assert_eq!(email_recovery("[+] x email recovery:   ").as_deref(), Some(""));
}

#[test]
fn test_email_recovery_last_occurrence() {
    assert_eq!(
        email_recovery("[+] x email recovery: a Email Recovery: b").as_deref(),
        Some("b")
    );
}

#[test]
fn test_phone_number_found() {
    assert_eq!(
        phone_number("[+] snapchat.com Phone number: +44 ******789").as_deref(),
        Some("+44 ******789")
    );
}

#[test]
fn test_phone_number_mixed_case() {
    assert_eq!(phone_number("[+] x PHONE Number:+1555").as_deref(), Some("+1555"));
}

#[test]
fn test_phone_number_absent() {
    assert!(phone_number("[-] snapchat.com").is_none());
}
