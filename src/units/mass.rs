use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 질량 단위. 내부 기준은 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Pound,
    Tonne,
}

/// 알 수 없는 단위 문자열.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown mass unit: {0}")]
pub struct UnknownMassUnit(pub String);

impl MassUnit {
    pub const ALL: [MassUnit; 4] = [
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Pound,
        MassUnit::Tonne,
    ];

    /// 표시용 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Pound => "lb",
            MassUnit::Tonne => "t",
        }
    }

    /// 단위 코드(kg, g, lb, t 등)를 해석한다. 대소문자는 구분하지 않는다.
    pub fn from_code(code: &str) -> Result<Self, UnknownMassUnit> {
        match code.trim().to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(MassUnit::Kilogram),
            "g" | "gram" | "grams" => Ok(MassUnit::Gram),
            "lb" | "lbs" | "pound" | "pounds" => Ok(MassUnit::Pound),
            "t" | "ton" | "tonne" | "tonnes" => Ok(MassUnit::Tonne),
            other => Err(UnknownMassUnit(other.to_string())),
        }
    }
}

fn to_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 1000.0,
        MassUnit::Pound => value * 0.453_592_37,
        MassUnit::Tonne => value * 1000.0,
    }
}

fn from_kg(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value * 1000.0,
        MassUnit::Pound => value / 0.453_592_37,
        MassUnit::Tonne => value / 1000.0,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    if from == to {
        return value;
    }
    let base = to_kg(value, from);
    from_kg(base, to)
}
