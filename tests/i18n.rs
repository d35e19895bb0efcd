//! UI 문자열 번역기 테스트.
use unit_conversion_toolbox::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn english_and_korean_bundles() {
    let en = Translator::new("en");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::APP_EXIT), "Exiting application.");

    let ko = Translator::new("ko");
    assert_eq!(ko.language(), Language::Ko);
    assert_eq!(ko.t(keys::APP_EXIT), "프로그램을 종료합니다.");
}

#[test]
fn unknown_key_falls_back() {
    let ko = Translator::new("ko");
    assert_eq!(ko.t("no.such.key"), "[missing translation]");
}

#[test]
fn cli_flag_wins_over_config() {
    assert_eq!(resolve_language("ko", Some("en")), "ko");
    assert_eq!(resolve_language("en-US", Some("ko")), "en");
    // auto는 설정값으로 넘어간다.
    assert_eq!(resolve_language("auto", Some("ko")), "ko");
}
