//! 변환표 자체의 구조(순서, 단위 집합, 연결성)에 대한 테스트.
use unit_conversion_toolbox::conversion::{resolve_factor, ConversionError};
use unit_conversion_toolbox::table::standard_table;

#[test]
fn quantity_order_is_stable() {
    let table = standard_table();
    assert_eq!(
        table.quantity_names(),
        vec![
            "Mass", "Length", "Volume", "Density", "Force", "Pressure", "Energy", "Power"
        ]
    );
}

#[test]
fn unit_order_follows_declaration() {
    let table = standard_table();
    assert_eq!(
        table.unit_names("Mass").unwrap(),
        &["kg", "g", "metric ton (tonne)", "lbm", "oz"]
    );
}

#[test]
fn target_only_units_are_registered() {
    // 표에서 간선의 도착점으로만 등장하는 단위도 목록에 있어야 한다.
    let table = standard_table();
    assert!(table.unit_names("Energy").unwrap().contains(&"ergs"));
    assert!(table.unit_names("Power").unwrap().contains(&"ft·lbf/s"));
}

#[test]
fn direct_factor_lookup() {
    let table = standard_table();
    assert_eq!(table.direct_factor("Mass", "kg", "g").unwrap(), Some(1000.0));
    // 간선이 없는 쌍은 오류가 아니라 None이다.
    assert_eq!(
        table
            .direct_factor("Mass", "g", "metric ton (tonne)")
            .unwrap(),
        None
    );
    assert!(matches!(
        table.direct_factor("Mass", "kg", "parsecs"),
        Err(ConversionError::UnknownUnit { .. })
    ));
    assert!(matches!(
        table.direct_factor("Astrology", "kg", "g"),
        Err(ConversionError::UnknownQuantity(_))
    ));
}

#[test]
fn every_unit_pair_is_reachable() {
    // 표의 간선이 듬성해도 정방향+역방향 탐색으로 모든 쌍이 닿아야 한다.
    // 실패하면 표에 구멍이 생겼다는 뜻이다.
    let table = standard_table();
    for qt in table.quantities() {
        for from in qt.units() {
            for to in qt.units() {
                let factor = resolve_factor(&table, qt.name(), from, to);
                assert!(
                    factor.is_ok(),
                    "{}: {from} -> {to} 경로 없음",
                    qt.name()
                );
                let factor = factor.unwrap();
                assert!(
                    factor.is_finite() && factor > 0.0,
                    "{}: {from} -> {to} 계수 이상: {factor}",
                    qt.name()
                );
            }
        }
    }
}

#[test]
fn derived_factors_roughly_invert() {
    // 경로로 유도된 계수는 반대 방향 계수와 대략 역수 관계여야 한다.
    // 표 자체의 반올림 때문에 정확한 역수는 아니다.
    let table = standard_table();
    for qt in table.quantities() {
        for from in qt.units() {
            for to in qt.units() {
                let fwd = resolve_factor(&table, qt.name(), from, to).unwrap();
                let rev = resolve_factor(&table, qt.name(), to, from).unwrap();
                let product = fwd * rev;
                assert!(
                    (product - 1.0).abs() < 2e-3,
                    "{}: {from} <-> {to} 곱 {product}",
                    qt.name()
                );
            }
        }
    }
}
