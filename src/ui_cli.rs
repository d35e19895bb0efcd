use std::io::{self, Write};

use crate::app::AppError;
use crate::config::{Config, LastSelection};
use crate::conversion::ConversionRequest;
use crate::i18n::{keys, Translator};
use crate::table::ConversionTable;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    BrowseTable,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_CONVERT));
    println!("{}", tr.t(keys::MAIN_MENU_BROWSE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::BrowseTable),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환 메뉴를 처리한다.
///
/// 물리량 -> 입력 단위 -> 변환 단위 -> 값 순으로 묻고 결과를
/// `{값} {입력단위} = {결과} {변환단위}` 형식으로 출력한다.
/// 변환 오류는 여기서 바로 출력하고 세션은 계속한다.
pub fn handle_convert(
    tr: &Translator,
    config: &mut Config,
    table: &ConversionTable,
) -> Result<(), AppError> {
    println!("{}", tr.t(keys::CONVERT_HEADING));

    let last = config.last_selection.clone();
    let quantity_names = table.quantity_names();
    let quantity = select_indexed(
        tr,
        keys::CONVERT_PROMPT_QUANTITY,
        &quantity_names,
        last.as_ref()
            .map(|l| l.quantity.as_str())
            .filter(|q| quantity_names.iter().any(|&n| n == *q)),
    )?;

    // 단위 기본값은 같은 물리량을 다시 고른 경우에만 제안한다.
    let units = match table.unit_names(quantity) {
        Ok(units) => units,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };
    let unit_default = |pick: fn(&LastSelection) -> &str| {
        last.as_ref()
            .filter(|l| l.quantity == quantity)
            .map(|l| pick(l))
            .filter(|u| units.iter().any(|&n| n == *u))
    };
    let from_unit = select_indexed(
        tr,
        keys::CONVERT_PROMPT_FROM_UNIT,
        units,
        unit_default(|l| l.from_unit.as_str()),
    )?;
    let to_unit = select_indexed(
        tr,
        keys::CONVERT_PROMPT_TO_UNIT,
        units,
        unit_default(|l| l.to_unit.as_str()),
    )?;
    let value = read_f64(tr, tr.t(keys::CONVERT_PROMPT_VALUE))?;

    let request = ConversionRequest {
        quantity: quantity.to_string(),
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
        value,
    };
    match request.execute(table) {
        Ok(result) => {
            println!(
                "{} {} = {:.*} {}",
                value, from_unit, config.decimals, result, to_unit
            );
            config.last_selection = Some(LastSelection {
                quantity: quantity.to_string(),
                from_unit: from_unit.to_string(),
                to_unit: to_unit.to_string(),
            });
        }
        Err(e) => println!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
    }
    Ok(())
}

/// 변환표 전체(물리량, 단위, 기재된 직접 계수)를 출력한다.
pub fn handle_browse(tr: &Translator, table: &ConversionTable) -> Result<(), AppError> {
    println!("{}", tr.t(keys::BROWSE_HEADING));
    for qt in table.quantities() {
        println!("[{}]", qt.name());
        println!("  {} {}", tr.t(keys::BROWSE_UNITS_LABEL), qt.units().join(", "));
        for (from, to, factor) in qt.edges() {
            println!("  {from} -> {to}: {factor}");
        }
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, config: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} decimals={}, language={}",
        tr.t(keys::SETTINGS_CURRENT),
        config.decimals,
        config.language
    );

    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
    if !sel.trim().is_empty() {
        match sel.trim().parse::<usize>() {
            Ok(n) if n <= 12 => config.decimals = n,
            _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
        }
    }

    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    let lang = sel.trim().to_lowercase();
    match lang.as_str() {
        "" => {}
        "auto" | "ko" | "en" => {
            config.language = lang;
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_NOTE));
        }
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }

    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 번호 목록을 출력하고 하나를 고르게 한다. 기본값이 있으면 엔터로 재사용한다.
fn select_indexed(
    tr: &Translator,
    prompt_key: &str,
    items: &[&'static str],
    default: Option<&str>,
) -> Result<&'static str, AppError> {
    let listing: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}) {}", i + 1, name))
        .collect();
    println!("{}", listing.join("  "));
    if let Some(d) = default {
        println!("{} {}", tr.t(keys::CONVERT_DEFAULT_HINT), d);
    }
    loop {
        let sel = read_line(tr.t(prompt_key))?;
        let sel = sel.trim();
        if sel.is_empty() {
            if let Some(d) = default {
                if let Some(&item) = items.iter().find(|&&u| u == d) {
                    return Ok(item);
                }
            }
        } else if let Ok(n) = sel.parse::<usize>() {
            if (1..=items.len()).contains(&n) {
                return Ok(items[n - 1]);
            }
        }
        println!("{}", tr.t(keys::CONVERT_UNSUPPORTED));
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => return Ok(v),
            _ => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
