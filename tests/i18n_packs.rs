//! 외부 언어팩 덮어쓰기 테스트.
use std::fs;

use brix_sugar_calculator::i18n::{keys, Language, Translator};

#[test]
fn pack_overrides_built_in_and_falls_back_to_base_code() {
    let dir = std::env::temp_dir().join(format!("brix_i18n_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("es.toml"),
        "[result]\nmetric_label = \"Azúcar a añadir\"\n",
    )
    .unwrap();

    // es-mx.toml 이 없으면 es.toml 을 쓴다
    let tr = Translator::new_with_pack("es-mx", dir.to_str());
    assert_eq!(tr.language(), Language::Es);
    assert_eq!(tr.t(keys::RESULT_METRIC_LABEL), "Azúcar a añadir");
    // 팩에 없는 키는 내장 스페인어
    assert_eq!(tr.t(keys::MAIN_MENU_EXIT), "0) Salir");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_pack_dir_uses_built_in_strings() {
    let tr = Translator::new_with_pack("en", Some("/nonexistent/brix/locales"));
    assert_eq!(tr.t(keys::RESULT_METRIC_LABEL), "Sugar to add");
    assert!(tr.lookup(keys::RESULT_METRIC_LABEL).is_none());
}

#[test]
fn regional_pack_wins_over_base_pack() {
    let dir = std::env::temp_dir().join(format!("brix_i18n_region_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("es.toml"), "[result]\nmetric_label = \"Azúcar (es)\"\n").unwrap();
    fs::write(dir.join("es-mx.toml"), "[result]\nmetric_label = \"Azúcar (mx)\"\n").unwrap();

    let tr = Translator::new_with_pack("es-mx", dir.to_str());
    assert_eq!(tr.t(keys::RESULT_METRIC_LABEL), "Azúcar (mx)");
    let tr = Translator::new_with_pack("es", dir.to_str());
    assert_eq!(tr.t(keys::RESULT_METRIC_LABEL), "Azúcar (es)");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn pack_without_strings_is_ignored() {
    let dir = std::env::temp_dir().join(format!("brix_i18n_broken_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("ko.toml"), "[result]\nmetric_label = 3\n").unwrap();

    let tr = Translator::new_with_pack("ko", dir.to_str());
    assert!(tr.lookup(keys::RESULT_METRIC_LABEL).is_none());
    assert_eq!(tr.t(keys::RESULT_METRIC_LABEL), "투입할 설탕");
    let _ = fs::remove_dir_all(&dir);
}
