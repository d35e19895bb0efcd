use std::env;

use unit_conversion_toolbox::{app, config, i18n, table};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli_lang_arg(), Some(&cfg.language));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    let table = table::standard_table();
    app::run(&mut cfg, &tr, &table)?;
    Ok(())
}

/// --lang xx 또는 --lang=xx 플래그를 읽는다 (xx: auto/ko/en).
fn cli_lang_arg() -> String {
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            return val.to_string();
        }
        if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
        i += 1;
    }
    "auto".to_string()
}
