//! 변환표 정의 모듈 모음. 물리량별 파일이 각자의 표를 구성한다.

pub mod density;
pub mod energy;
pub mod force;
pub mod length;
pub mod mass;
pub mod power;
pub mod pressure;
pub mod volume;

use crate::conversion::ConversionError;

/// 하나의 물리량에 속한 단위 목록과 방향성 변환 계수 그래프.
///
/// 표에 기재된 방향만 간선이 되므로 간선은 대칭이 아닐 수 있고
/// (역방향 간선이 빠진 경우), 모든 단위쌍이 직접 연결되어 있지도 않다.
/// 단위 이름은 선언 순서를 유지한다 (UI 목록 출력용).
#[derive(Debug, Clone)]
pub struct QuantityTable {
    name: &'static str,
    units: Vec<&'static str>,
    edges: Vec<(&'static str, &'static str, f64)>,
}

impl QuantityTable {
    /// 단위 목록과 함께 빈 표를 만든다. 간선은 `edge`로 추가한다.
    pub fn new(name: &'static str, units: &[&'static str]) -> Self {
        Self {
            name,
            units: units.to_vec(),
            edges: Vec::new(),
        }
    }

    /// 방향성 간선 `from -> to` (value_to = value_from * factor)를 추가한다.
    /// 양쪽 단위는 모두 선언된 단위여야 한다.
    pub fn edge(mut self, from: &'static str, to: &'static str, factor: f64) -> Self {
        debug_assert!(self.units.contains(&from), "미선언 단위: {from}");
        debug_assert!(self.units.contains(&to), "미선언 단위: {to}");
        debug_assert!(factor > 0.0, "변환 계수는 양수여야 함: {from} -> {to}");
        self.edges.push((from, to, factor));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// 선언 순서대로의 단위 이름 목록.
    pub fn units(&self) -> &[&'static str] {
        &self.units
    }

    pub fn contains_unit(&self, unit: &str) -> bool {
        self.units.iter().any(|&u| u == unit)
    }

    /// 표에 기재된 직접 계수. 없으면 None (오류가 아님).
    pub fn direct_factor(&self, from: &str, to: &str) -> Option<f64> {
        self.edges
            .iter()
            .find(|(a, b, _)| *a == from && *b == to)
            .map(|(_, _, f)| *f)
    }

    /// 선언 순서대로의 전체 간선 목록.
    pub fn edges(&self) -> &[(&'static str, &'static str, f64)] {
        &self.edges
    }

    /// `from`에서 나가는 정방향 간선을 도착 단위 이름 오름차순으로 반환한다.
    pub(crate) fn forward_neighbors(&self, from: &str) -> Vec<(&'static str, f64)> {
        let mut out: Vec<(&'static str, f64)> = self
            .edges
            .iter()
            .filter(|(a, _, _)| *a == from)
            .map(|(_, b, f)| (*b, *f))
            .collect();
        out.sort_by(|(a, _), (b, _)| a.cmp(b));
        out
    }

    /// `from`으로 들어오는 간선을 출발 단위 이름 오름차순으로 반환한다.
    /// 반환되는 계수는 기재된 방향(v -> from)의 값이므로 역방향 이동 시 나눠야 한다.
    pub(crate) fn reverse_neighbors(&self, from: &str) -> Vec<(&'static str, f64)> {
        let mut out: Vec<(&'static str, f64)> = self
            .edges
            .iter()
            .filter(|(_, b, _)| *b == from)
            .map(|(a, _, f)| (*a, *f))
            .collect();
        out.sort_by(|(a, _), (b, _)| a.cmp(b));
        out
    }
}

/// 전체 변환표. 시작 시 한 번 만들어 읽기 전용으로 공유한다.
#[derive(Debug, Clone)]
pub struct ConversionTable {
    quantities: Vec<QuantityTable>,
}

impl ConversionTable {
    pub fn new(quantities: Vec<QuantityTable>) -> Self {
        Self { quantities }
    }

    /// 물리량 이름 목록. 선언 순서를 유지하여 UI 목록이 항상 같게 나온다.
    pub fn quantity_names(&self) -> Vec<&'static str> {
        self.quantities.iter().map(|q| q.name()).collect()
    }

    pub fn quantity(&self, name: &str) -> Option<&QuantityTable> {
        self.quantities.iter().find(|q| q.name() == name)
    }

    pub fn quantities(&self) -> &[QuantityTable] {
        &self.quantities
    }

    /// 해당 물리량의 단위 이름 목록.
    pub fn unit_names(&self, quantity: &str) -> Result<&[&'static str], ConversionError> {
        self.quantity(quantity)
            .map(QuantityTable::units)
            .ok_or_else(|| ConversionError::UnknownQuantity(quantity.to_string()))
    }

    /// 표에 기재된 직접 계수를 조회한다. 간선이 없는 단위쌍은 Ok(None)이다.
    pub fn direct_factor(
        &self,
        quantity: &str,
        from: &str,
        to: &str,
    ) -> Result<Option<f64>, ConversionError> {
        let qt = self
            .quantity(quantity)
            .ok_or_else(|| ConversionError::UnknownQuantity(quantity.to_string()))?;
        for unit in [from, to] {
            if !qt.contains_unit(unit) {
                return Err(ConversionError::UnknownUnit {
                    quantity: quantity.to_string(),
                    unit: unit.to_string(),
                });
            }
        }
        Ok(qt.direct_factor(from, to))
    }
}

/// 기본 제공 변환표를 구성한다.
pub fn standard_table() -> ConversionTable {
    ConversionTable::new(vec![
        mass::table(),
        length::table(),
        volume::table(),
        density::table(),
        force::table(),
        pressure::table(),
        energy::table(),
        power::table(),
    ])
}
