//! 단위 정의 및 변환 모듈.

pub mod mass;

pub use mass::{convert_mass, MassUnit, UnknownMassUnit};
