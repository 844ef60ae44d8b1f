//! °Brix 보정 계산 모듈 모음.
//! 설탕 투입량 계산(고형분 수지)과 그 검산으로 구성한다.

pub mod solids_balance;
pub mod sugar_adjustment;

pub use solids_balance::*;
pub use sugar_adjustment::*;
