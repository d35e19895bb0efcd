//! 변환 해석기 회귀 테스트. 동일 단위, 직접/역방향 간선, 경로 탐색을 다룬다.
use unit_conversion_toolbox::conversion::{convert, resolve_factor, ConversionError};
use unit_conversion_toolbox::table::{standard_table, ConversionTable, QuantityTable};

#[test]
fn identity_holds_for_every_unit() {
    // 자기 자신으로의 변환은 표에 자기 간선이 없어도 항상 값 그대로여야 한다.
    let table = standard_table();
    for qt in table.quantities() {
        for unit in qt.units() {
            let v = convert(&table, qt.name(), unit, unit, -3.5).expect("identity");
            assert_eq!(v, -3.5, "{}: {unit}", qt.name());
        }
    }
}

#[test]
fn direct_edges_apply_tabulated_factor() {
    let table = standard_table();
    for qt in table.quantities() {
        for (from, to, factor) in qt.edges() {
            let v = convert(&table, qt.name(), from, to, 2.5).expect("direct edge");
            assert_eq!(v, 2.5 * factor, "{}: {from} -> {to}", qt.name());
        }
    }
}

#[test]
fn kg_to_g() {
    let table = standard_table();
    let v = convert(&table, "Mass", "kg", "g", 2.0).unwrap();
    assert_eq!(v, 2000.0);
}

#[test]
fn ft_to_mile_direct() {
    // 표 자체의 반올림(0.000189394) 기준으로 약 1마일.
    let table = standard_table();
    let v = convert(&table, "Length", "ft", "mile", 5280.0).unwrap();
    assert!((v - 1.0).abs() < 1e-3, "got {v}");
}

#[test]
fn stated_factor_wins_over_reciprocal() {
    // ft -> yard는 0.333333으로 기재되어 있고 yard -> ft는 3이다.
    // 정확히 역수가 아니지만 기재된 방향의 값을 그대로 써야 한다.
    let table = standard_table();
    let v = convert(&table, "Length", "ft", "yard", 2.0).unwrap();
    assert_eq!(v, 2.0 * 0.333333);
    assert_ne!(v, 2.0 / 3.0);
}

#[test]
fn reverse_edge_fallback_divides() {
    let table = standard_table();
    // gal (US) -> qt 간선은 없고 qt -> gal (US) = 0.25만 있다.
    let v = convert(&table, "Volume", "gal (US)", "qt", 2.0).unwrap();
    assert_eq!(v, 2.0 / 0.25);
    // Pa -> kPa 간선도 없고 kPa -> Pa = 1000만 있다.
    let v = convert(&table, "Pressure", "Pa", "kPa", 500.0).unwrap();
    assert!((v - 0.5).abs() < 1e-12, "got {v}");
}

#[test]
fn multi_hop_g_to_tonne() {
    // g -> metric ton 직접 간선이 없으므로 g -> kg -> tonne 경로로 풀린다.
    let table = standard_table();
    let v = convert(&table, "Mass", "g", "metric ton (tonne)", 1_000_000.0).unwrap();
    assert!((v - 1.0).abs() < 1e-9, "got {v}");
}

#[test]
fn multi_hop_psi_to_mmhg() {
    let table = standard_table();
    let v = convert(&table, "Pressure", "psi", "mmHg", 14.6959).unwrap();
    assert!((v - 760.0).abs() < 0.1, "got {v}");
}

#[test]
fn multi_hop_cubic_inch_to_liter() {
    // in³ -> ft³ -> m³ -> L, 세 홉.
    let table = standard_table();
    let v = convert(&table, "Volume", "in³", "L", 1000.0).unwrap();
    assert!((v - 16.387).abs() < 0.01, "got {v}");
}

#[test]
fn target_only_units_resolve_through_reverse_edges() {
    let table = standard_table();
    // ergs는 J -> ergs 간선의 도착점으로만 존재한다.
    let v = convert(&table, "Energy", "ergs", "J", 1e7).unwrap();
    assert!((v - 1.0).abs() < 1e-9, "got {v}");
    // ft·lbf/s 역시 W -> ft·lbf/s 간선뿐이다. 550 ft·lbf/s ≈ 1 hp.
    let v = convert(&table, "Power", "ft·lbf/s", "hp", 550.0).unwrap();
    assert!((v - 1.0).abs() < 1e-3, "got {v}");
}

#[test]
fn resolution_is_deterministic() {
    let table = standard_table();
    let a = resolve_factor(&table, "Pressure", "psi", "mmHg").unwrap();
    let b = resolve_factor(&table, "Pressure", "psi", "mmHg").unwrap();
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn unknown_unit_and_quantity_are_typed_errors() {
    let table = standard_table();
    let err = convert(&table, "Mass", "kg", "parsecs", 1.0).unwrap_err();
    assert_eq!(
        err,
        ConversionError::UnknownUnit {
            quantity: "Mass".to_string(),
            unit: "parsecs".to_string(),
        }
    );
    let err = convert(&table, "Astrology", "kg", "g", 1.0).unwrap_err();
    assert_eq!(err, ConversionError::UnknownQuantity("Astrology".to_string()));
}

#[test]
fn tie_break_prefers_forward_over_reverse() {
    // s -> x -> t (정방향 2홉, 계수 2*3)와 s -> y -> t (첫 홉이 역방향, 1/4*5)가
    // 같은 길이로 존재한다. 정방향 간선을 우선해야 한다.
    let qt = QuantityTable::new("Test", &["s", "x", "y", "t"])
        .edge("s", "x", 2.0)
        .edge("y", "s", 4.0)
        .edge("x", "t", 3.0)
        .edge("y", "t", 5.0);
    let table = ConversionTable::new(vec![qt]);
    let v = convert(&table, "Test", "s", "t", 1.0).unwrap();
    assert_eq!(v, 6.0);
}

#[test]
fn tie_break_prefers_lower_sorted_unit_name() {
    // 정방향 2홉 경로가 a/b 두 중간 단위로 존재하면 이름이 앞서는 a를 택한다.
    let qt = QuantityTable::new("Test", &["s", "b", "a", "t"])
        .edge("s", "b", 2.0)
        .edge("s", "a", 3.0)
        .edge("a", "t", 10.0)
        .edge("b", "t", 10.0);
    let table = ConversionTable::new(vec![qt]);
    let v = convert(&table, "Test", "s", "t", 1.0).unwrap();
    assert_eq!(v, 30.0);
}

#[test]
fn disconnected_units_report_no_path() {
    let qt = QuantityTable::new("Test", &["a", "b", "c"]).edge("a", "b", 2.0);
    let table = ConversionTable::new(vec![qt]);
    let err = convert(&table, "Test", "a", "c", 1.0).unwrap_err();
    assert_eq!(
        err,
        ConversionError::NoPath {
            quantity: "Test".to_string(),
            from: "a".to_string(),
            to: "c".to_string(),
        }
    );
    // 동일 단위는 간선이 전혀 없어도 성공해야 한다.
    let v = convert(&table, "Test", "c", "c", 7.0).unwrap();
    assert_eq!(v, 7.0);
}

#[test]
fn negative_and_zero_values_pass_through() {
    // 엔진은 부호 제한을 두지 않는다 (표시 정책은 셸의 몫).
    let table = standard_table();
    let v = convert(&table, "Mass", "kg", "g", -2.0).unwrap();
    assert_eq!(v, -2000.0);
    let v = convert(&table, "Mass", "kg", "g", 0.0).unwrap();
    assert_eq!(v, 0.0);
}
